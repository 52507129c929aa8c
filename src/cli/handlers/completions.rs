//! Handler for the `completions` command.

use std::io;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};

/// Writes a completion script for the requested shell to stdout.
pub fn handle_completions(args: &CompletionsArgs) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, name, &mut io::stdout());
}
