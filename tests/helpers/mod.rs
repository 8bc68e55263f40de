use anyhow::{Context, Result};
use dashpad::application::NoteBoard;
use dashpad::infrastructure::JsonNoteStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary data directory
#[allow(dead_code)]
pub struct TestDataDir {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Open a note board backed by this directory's notes slot
    pub fn open_board(&self) -> NoteBoard<JsonNoteStore> {
        NoteBoard::new(self.store())
    }

    pub fn store(&self) -> JsonNoteStore {
        JsonNoteStore::new(&self.path)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.path.join("notes.json")
    }
}
