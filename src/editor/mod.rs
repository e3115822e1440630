//! Editor Module
//!
//! Toolkit-independent editor state: the document, its file operations,
//! the file dialog and the keyboard shortcuts.

pub mod dialog;
pub mod document;
pub mod shortcuts;
pub mod text_format;

pub use dialog::{DialogKind, FileDialog};
pub use document::{Document, FileError, SaveOutcome};
pub use shortcuts::{FileCommand, Modifiers};
pub use text_format::TextFormat;
