//! mdexport - export a note library to a tree of Markdown files

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod store;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_all, handle_book, handle_books, handle_completions, handle_note, handle_notes,
    },
};

/// Main entry point for the CLI application.
///
/// Export failures have already been reported by the time this returns
/// `ExitCode::FAILURE`; an `Err` has not.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if let Err(e) = infra::logging::init_tracing(cli.verbose) {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    if let Command::Completions(args) = &cli.command {
        handle_completions(args);
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load()?;
    let library = config.library_path(cli.library.as_ref());
    tracing::debug!(library = %library.display(), "using library");

    match &cli.command {
        Command::All(args) => handle_all(args, &library, &config, cli.format),
        Command::Book(args) => handle_book(args, &library, &config, cli.format),
        Command::Note(args) => handle_note(args, &library, &config, cli.format),
        Command::Notes(args) => handle_notes(args, &library, &config, cli.format),
        Command::Books => handle_books(&library, cli.format).map(|()| ExitCode::SUCCESS),
        Command::Completions(_) => Ok(ExitCode::SUCCESS),
    }
}
