//! Handler for the `books` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::output::{BookListing, Output, OutputFormat};
use crate::domain::Notebook;
use crate::infra::sanitize_filename;
use crate::store::NoteStore;

use super::open_library;

/// Handle the books command - print the notebook tree with ids.
pub fn handle_books(library: &Path, format: OutputFormat) -> Result<()> {
    let store = open_library(library)?;
    let listings = collect_listings(&store.notebooks()?);

    match format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No notebooks found.");
            }
            for book in &listings {
                println!("{}{}  [{}]", "  ".repeat(book.depth), book.name, book.id);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&listings))?);
        }
        OutputFormat::Paths => {
            for book in &listings {
                println!("{}", book.path);
            }
        }
    }

    Ok(())
}

/// Flattens the tree in export order.
pub fn collect_listings(roots: &[Notebook]) -> Vec<BookListing> {
    let mut listings = Vec::new();
    for root in roots {
        push_listing(root, 0, &PathBuf::new(), &mut listings);
    }
    listings
}

fn push_listing(notebook: &Notebook, depth: usize, parent: &Path, out: &mut Vec<BookListing>) {
    let path = parent.join(sanitize_filename(notebook.name()));
    out.push(BookListing {
        id: notebook.id().to_string(),
        name: notebook.name().to_string(),
        depth,
        path: path.to_string_lossy().replace('\\', "/"),
    });
    for child in notebook.children() {
        push_listing(child, depth + 1, &path, out);
    }
}
