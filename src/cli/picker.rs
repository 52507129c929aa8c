//! Destination picking for the command line.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::export::DestinationPicker;

/// Picks destinations from `-o`, falling back to a prompt on a terminal.
///
/// Without `-o` and without a terminal to ask on, every pick is a cancel.
pub struct PromptPicker<R> {
    output: Option<PathBuf>,
    input: Option<R>,
}

impl PromptPicker<io::StdinLock<'static>> {
    /// Prompts on stdin, but only when stdin is a terminal.
    pub fn from_stdin(output: Option<PathBuf>) -> Self {
        let stdin = io::stdin();
        let input = stdin.is_terminal().then(|| stdin.lock());
        Self { output, input }
    }
}

impl<R: BufRead> PromptPicker<R> {
    pub fn new(output: Option<PathBuf>, input: Option<R>) -> Self {
        Self { output, input }
    }

    fn ask(&mut self, prompt: &str) -> Option<PathBuf> {
        let input = self.input.as_mut()?;

        eprint!("{}: ", prompt);
        io::stderr().flush().ok();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                (!answer.is_empty()).then(|| PathBuf::from(answer))
            }
        }
    }
}

impl<R: BufRead> DestinationPicker for PromptPicker<R> {
    fn pick_directory(&mut self, prompt: &str) -> Option<PathBuf> {
        match self.output.clone() {
            Some(dir) => Some(dir),
            None => self.ask(prompt),
        }
    }

    fn pick_file(&mut self, default_name: &str) -> Option<PathBuf> {
        let path = match self.output.clone() {
            Some(path) => path,
            None => self.ask(&format!("Save note as ({} in a folder)", default_name))?,
        };

        if path.is_dir() {
            Some(path.join(default_name))
        } else {
            Some(path)
        }
    }
}
