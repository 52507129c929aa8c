//! Console reporting of export outcomes.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::output::{Output, OutputFormat};
use crate::export::{ExportSummary, Notifier};

/// Failure payload for JSON output.
#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    message: &'a str,
    detail: &'a str,
}

/// Prints summaries to stdout and failures to stderr, in the chosen format.
pub struct ConsoleNotifier<W> {
    format: OutputFormat,
    out: W,
}

impl ConsoleNotifier<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    fn write_summary(&mut self, message: &str, summary: &ExportSummary) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => writeln!(self.out, "{}", message),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&Output::new(summary))?;
                writeln!(self.out, "{}", json)
            }
            OutputFormat::Paths => writeln!(self.out, "{}", summary.destination.display()),
        }
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn info(&mut self, message: &str, summary: &ExportSummary) {
        if let Err(e) = self.write_summary(message, summary) {
            tracing::warn!(error = %e, "failed to print export summary");
        }
    }

    fn error(&mut self, message: &str, detail: &str) {
        match self.format {
            OutputFormat::Json => {
                let error = ErrorOutput { message, detail };
                eprintln!("{}", serde_json::json!({ "error": error }));
            }
            OutputFormat::Human | OutputFormat::Paths => {
                eprintln!("error: {}: {}", message, detail);
            }
        }
    }
}
