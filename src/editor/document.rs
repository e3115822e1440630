//! Document Module
//!
//! The note's text and the file it belongs to, with whole-file open and
//! save operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Base window title
pub const APP_NAME: &str = "Stinote";

/// File operation failures, shown to the user and otherwise recovered from
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Result of a plain save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the stored path
    Saved(PathBuf),
    /// No file yet; the caller has to ask for one (Save As)
    NeedsPath,
}

/// The single open note
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    file_name: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Window title, including the file path once there is one
    pub fn title(&self) -> String {
        match &self.file_name {
            Some(path) => format!("{} - {}", APP_NAME, path.display()),
            None => APP_NAME.to_string(),
        }
    }

    /// Replace the text with the contents of `path`.
    ///
    /// Text and file name are only touched when the read succeeds.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Opened {:?} ({} bytes)", path, text.len());
        self.text = text;
        self.file_name = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the text to the stored path, or report that a path is needed.
    pub fn save(&mut self) -> Result<SaveOutcome, FileError> {
        let Some(path) = self.file_name.clone() else {
            return Ok(SaveOutcome::NeedsPath);
        };
        self.write_to(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Write the text to `path` and make it the stored path.
    ///
    /// The stored path is left as it was if the write fails.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.file_name = Some(path.to_path_buf());
        Ok(())
    }

    fn write_to(&self, path: &Path) -> Result<(), FileError> {
        fs::write(path, self.text.as_bytes()).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved {:?} ({} bytes)", path, self.text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_without_path_needs_path() {
        let mut doc = Document::new();
        doc.set_text("draft");

        assert_eq!(doc.save().unwrap(), SaveOutcome::NeedsPath);
        assert_eq!(doc.file_name(), None);
    }

    #[test]
    fn test_save_with_path_writes_directly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let mut doc = Document::new();
        doc.set_text("first");
        doc.save_as(&path).unwrap();

        doc.set_text("second");
        assert_eq!(doc.save().unwrap(), SaveOutcome::Saved(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_failed_save_keeps_path() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("note.txt");
        let bad = dir.path().join("missing").join("note.txt");
        let mut doc = Document::new();
        doc.set_text("keep me");
        doc.save_as(&good).unwrap();

        let err = doc.save_as(&bad).unwrap_err();
        assert!(matches!(err, FileError::Write { ref path, .. } if *path == bad));
        assert_eq!(doc.file_name(), Some(good.as_path()));

        // Stored path becomes unwritable: save fails, path stays.
        fs::remove_file(&good).unwrap();
        fs::create_dir(&good).unwrap();
        assert!(doc.save().is_err());
        assert_eq!(doc.file_name(), Some(good.as_path()));
    }

    #[test]
    fn test_failed_save_as_without_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = Document::new();

        assert!(doc.save_as(dir.path().join("nope").join("a.txt")).is_err());
        assert_eq!(doc.file_name(), None);
        assert_eq!(doc.title(), "Stinote");
    }

    #[test]
    fn test_open_replaces_text_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.txt");
        fs::write(&path, "milk\neggs\n").unwrap();

        let mut doc = Document::new();
        doc.set_text("old");
        doc.open(&path).unwrap();

        assert_eq!(doc.text(), "milk\neggs\n");
        assert_eq!(doc.file_name(), Some(path.as_path()));
    }

    #[test]
    fn test_failed_open_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("a.txt");
        fs::write(&existing, "a").unwrap();

        let mut doc = Document::new();
        doc.open(&existing).unwrap();
        doc.set_text("edited");

        let missing = dir.path().join("b.txt");
        let err = doc.open(&missing).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert_eq!(doc.text(), "edited");
        assert_eq!(doc.file_name(), Some(existing.as_path()));
    }

    #[test]
    fn test_open_then_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        fs::write(&path, "hello").unwrap();

        let mut doc = Document::new();
        doc.open(&path).unwrap();
        assert_eq!(doc.text(), "hello");
        assert_eq!(doc.file_name(), Some(path.as_path()));

        assert_eq!(doc.save().unwrap(), SaveOutcome::Saved(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_title_shows_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let mut doc = Document::new();
        doc.save_as(&path).unwrap();

        assert_eq!(doc.title(), format!("Stinote - {}", path.display()));
    }
}
