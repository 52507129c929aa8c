//! Isolated test environment with a temporary library.

#![allow(dead_code)]

use super::{ExportCommand, TestNote};
use mdexport::domain::NotebookRow;
use mdexport::store::{SqliteStore, StoredFile};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a library database and output folder.
///
/// Everything lives in one temp directory that is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    root: PathBuf,
    store: SqliteStore,
}

impl TestEnv {
    /// Creates a new environment with an empty library.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let store =
            SqliteStore::create(&root.join("library.db")).expect("Failed to create library");
        std::fs::create_dir_all(root.join("home")).expect("Failed to create home");
        Self {
            _temp_dir: temp_dir,
            root,
            store,
        }
    }

    /// Returns the path to the library database.
    pub fn library_path(&self) -> PathBuf {
        self.root.join("library.db")
    }

    /// Returns the default export destination (not created up front).
    pub fn out_dir(&self) -> PathBuf {
        self.root.join("out")
    }

    /// Returns the isolated home directory.
    pub fn home(&self) -> PathBuf {
        self.root.join("home")
    }

    /// Returns the temp root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Adds a notebook, optionally under a parent.
    pub fn add_book(&self, id: &str, name: &str, parent: Option<&str>) {
        let position = self
            .store
            .conn()
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get::<_, i64>(0))
            .expect("Failed to count books");
        self.store
            .insert_book(&NotebookRow {
                id: id.to_string(),
                name: name.to_string(),
                parent_id: parent.map(str::to_string),
                position,
            })
            .expect("Failed to insert book");
    }

    /// Adds a note.
    pub fn add_note(&self, note: &TestNote) {
        self.store
            .insert_note(&note.to_note())
            .expect("Failed to insert note");
    }

    /// Adds a binary attachment.
    pub fn add_file(&self, id: &str, name: &str, content_type: &str, data: Vec<u8>) {
        self.store
            .insert_file(&StoredFile {
                id: id.to_string(),
                name: name.to_string(),
                content_type: Some(content_type.to_string()),
                data,
            })
            .expect("Failed to insert file");
    }

    /// Writes a config file into the isolated home.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.home().join(".config").join("mdexport");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates an ExportCommand configured for this environment.
    pub fn cmd(&self) -> ExportCommand {
        ExportCommand::new()
            .home(&self.home())
            .library(&self.library_path())
    }

    /// Creates an ExportCommand without `--library`, relying on config.
    pub fn cmd_without_library(&self) -> ExportCommand {
        ExportCommand::new().home(&self.home())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdexport::store::NoteStore;

    #[test]
    fn test_env_creates_library() {
        let env = TestEnv::new();
        assert!(env.library_path().is_file());
        assert!(!env.out_dir().exists());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_seeds_books_in_insertion_order() {
        let env = TestEnv::new();
        env.add_book("b", "Beta", None);
        env.add_book("a", "Alpha", None);

        let store = SqliteStore::open(&env.library_path()).unwrap();
        let names: Vec<String> = store
            .notebooks()
            .unwrap()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, vec!["Beta", "Alpha"]);
    }
}
