//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod notify;
pub mod output;
pub mod picker;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// mdexport - export a note library to a tree of Markdown files
#[derive(Parser, Debug)]
#[command(name = "mdexport", version, about, long_about = None)]
pub struct Cli {
    /// Library database (overrides config file)
    #[arg(short = 'l', long, global = true)]
    pub library: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export every notebook, each into its own folder
    All(DirArgs),

    /// Export one notebook (and its sub-notebooks) into a folder
    Book(BookArgs),

    /// Export a single note to a Markdown file
    Note(NoteArgs),

    /// Export several notes into one folder
    Notes(NotesArgs),

    /// List notebooks with their ids
    Books,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `all` command
#[derive(Parser, Debug)]
pub struct DirArgs {
    /// Destination folder (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `book` command
#[derive(Parser, Debug)]
pub struct BookArgs {
    /// Notebook id
    pub id: String,

    /// Destination folder (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `note` command
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Note id
    pub id: String,

    /// Destination file, or a folder to use the note's default file name
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `notes` command
#[derive(Parser, Debug)]
pub struct NotesArgs {
    /// Note ids
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Destination folder (prompted for when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["mdexport", "book", "b1", "-o", "/out", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.format, OutputFormat::Json));
        let Command::Book(args) = cli.command else {
            panic!("expected book command");
        };
        assert_eq!(args.id, "b1");
        assert_eq!(args.output, Some(PathBuf::from("/out")));
    }

    #[test]
    fn notes_requires_at_least_one_id() {
        assert!(Cli::try_parse_from(["mdexport", "notes"]).is_err());
    }
}
