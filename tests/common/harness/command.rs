//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `mdexport` binary.
///
/// Commands run with `HOME` and `XDG_CONFIG_HOME` pointed at the test
/// environment, so a developer's own config file never leaks in.
pub struct ExportCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
}

impl ExportCommand {
    /// Creates a new command for the `mdexport` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
        }
    }

    /// Sets the `--library` option.
    pub fn library(mut self, path: &Path) -> Self {
        self.args.push("--library".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Isolates config lookup under `home`.
    pub fn home(mut self, home: &Path) -> Self {
        self.home = Some(home.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("mdexport").expect("Failed to find mdexport binary");
        if let Some(home) = &self.home {
            cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
        }
        cmd.env_remove("MDEXPORT_LOG").env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `all` command writing to `out`.
    pub fn all(self, out: &Path) -> Self {
        self.args(["all", "-o"]).args([out.to_string_lossy()])
    }

    /// Configures for the `book` command writing to `out`.
    pub fn book(self, id: &str, out: &Path) -> Self {
        self.args(["book", id, "-o"]).args([out.to_string_lossy()])
    }

    /// Configures for the `note` command writing to `out`.
    pub fn note(self, id: &str, out: &Path) -> Self {
        self.args(["note", id, "-o"]).args([out.to_string_lossy()])
    }

    /// Configures for the `notes` command writing to `out`.
    pub fn notes(self, ids: &[&str], out: &Path) -> Self {
        self.args(["notes"])
            .args(ids)
            .args(["-o"])
            .args([out.to_string_lossy()])
    }

    /// Configures for the `books` command.
    pub fn books(self) -> Self {
        self.args(["books"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for ExportCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        ExportCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_library() {
        let cmd = ExportCommand::new().library(Path::new("/tmp/lib.db"));
        assert_eq!(cmd.get_args(), ["--library", "/tmp/lib.db"]);
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = ExportCommand::new()
            .notes(&["a", "b"], Path::new("/out"))
            .format_json();
        assert_eq!(
            cmd.get_args(),
            ["notes", "a", "b", "-o", "/out", "--format", "json"]
        );
    }
}
