//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::export::{DEFAULT_IMAGES_DIR, DEFAULT_SCHEME, RewriteOptions};

/// Library file used when neither the flag nor the config names one.
pub const DEFAULT_LIBRARY: &str = "library.db";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default library database
    pub library: Option<PathBuf>,

    /// Scheme of internal image references (default `inkdrop`)
    pub image_scheme: Option<String>,

    /// Folder extracted images go into, relative to each note
    pub images_dir: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/mdexport/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdexport")
            .join("config.toml")
    }

    /// Resolve the library database, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--library` argument
    /// 2. Config file `library` setting
    /// 3. `library.db` in the current directory
    pub fn library_path(&self, cli_library: Option<&PathBuf>) -> PathBuf {
        cli_library
            .cloned()
            .or_else(|| self.library.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY))
    }

    /// Image rewriting options with config overrides applied.
    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            scheme: self
                .image_scheme
                .clone()
                .unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
            images_dir: self
                .images_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string()),
        }
    }
}
