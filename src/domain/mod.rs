//! Core types: Notebook, Note, ExportTarget

mod note;
mod notebook;
mod target;

pub use note::{Note, NoteBuilder};
pub use notebook::{Notebook, NotebookRow, build_tree, find_notebook};
pub use target::ExportTarget;
