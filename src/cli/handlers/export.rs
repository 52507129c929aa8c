//! Handlers for the export commands.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use crate::cli::config::Config;
use crate::cli::notify::ConsoleNotifier;
use crate::cli::output::OutputFormat;
use crate::cli::picker::PromptPicker;
use crate::cli::{BookArgs, DirArgs, NoteArgs, NotesArgs};
use crate::export::{ExportReport, Exporter};
use crate::infra::ImageSizeProbe;
use crate::store::LibraryImageExtractor;

use super::open_library;

/// Handle the `all` command.
pub fn handle_all(
    args: &DirArgs,
    library: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<ExitCode> {
    run_export(library, config, format, args.output.clone(), |exporter| {
        exporter.export_all()
    })
}

/// Handle the `book` command.
pub fn handle_book(
    args: &BookArgs,
    library: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<ExitCode> {
    run_export(library, config, format, args.output.clone(), |exporter| {
        exporter.export_notebook(&args.id)
    })
}

/// Handle the `note` command.
pub fn handle_note(
    args: &NoteArgs,
    library: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<ExitCode> {
    run_export(library, config, format, args.output.clone(), |exporter| {
        exporter.export_note(&args.id)
    })
}

/// Handle the `notes` command.
pub fn handle_notes(
    args: &NotesArgs,
    library: &Path,
    config: &Config,
    format: OutputFormat,
) -> Result<ExitCode> {
    run_export(library, config, format, args.output.clone(), |exporter| {
        exporter.export_notes(&args.ids)
    })
}

/// Wires the library-backed collaborators into an exporter and runs `f`.
///
/// The exporter has already reported the outcome by the time this returns;
/// only the exit code is left to decide.
fn run_export<F>(
    library: &Path,
    config: &Config,
    format: OutputFormat,
    output: Option<PathBuf>,
    f: F,
) -> Result<ExitCode>
where
    F: FnOnce(&mut Exporter<'_>) -> ExportReport,
{
    let store = open_library(library)?;
    let options = config.rewrite_options();
    let extractor = LibraryImageExtractor::new(&store, &options.scheme);
    let probe = ImageSizeProbe;
    let mut picker = PromptPicker::from_stdin(output);
    let mut notifier = ConsoleNotifier::stdout(format);

    let mut exporter = Exporter::new(&store, &extractor, &probe, &mut picker, &mut notifier)
        .with_options(options);
    let report = f(&mut exporter);

    Ok(exit_code(&report, format))
}

fn exit_code(report: &ExportReport, format: OutputFormat) -> ExitCode {
    match report {
        ExportReport::Completed(_) => ExitCode::SUCCESS,
        ExportReport::Cancelled => {
            if format == OutputFormat::Human {
                eprintln!("Export cancelled: no destination chosen (use -o to pass one)");
            }
            ExitCode::SUCCESS
        }
        ExportReport::Failed(_) => ExitCode::FAILURE,
    }
}
