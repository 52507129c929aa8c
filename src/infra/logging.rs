//! Structured logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "MDEXPORT_LOG";

/// Maps the `-v` count to a filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "mdexport=warn",
        1 => "mdexport=debug",
        _ => "mdexport=trace",
    }
}

/// Installs a compact stderr subscriber.
///
/// `MDEXPORT_LOG` (or `RUST_LOG`) takes precedence over the verbosity flag.
pub fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
