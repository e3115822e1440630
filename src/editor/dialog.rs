//! In-window file dialog: a path prompt for Open and Save As.

use std::path::{Path, PathBuf};

/// What the dialog is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Open,
    SaveAs,
}

impl DialogKind {
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Open => "Open file",
            Self::SaveAs => "Save as",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::SaveAs => "Save",
        }
    }
}

/// Open file dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDialog {
    pub kind: DialogKind,
    pub path: String,
}

impl FileDialog {
    /// Save As starts from the current file, Open from its directory.
    pub fn new(kind: DialogKind, current: Option<&Path>) -> Self {
        let path = match (kind, current) {
            (DialogKind::SaveAs, Some(path)) => path.display().to_string(),
            (DialogKind::Open, Some(path)) => path
                .parent()
                .map(|dir| format!("{}/", dir.display()))
                .unwrap_or_default(),
            (_, None) => String::new(),
        };
        Self { kind, path }
    }

    /// The chosen path, or `None` while the input is blank
    pub fn selection(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill() {
        let current = Path::new("/tmp/notes/todo.txt");

        let save_as = FileDialog::new(DialogKind::SaveAs, Some(current));
        assert_eq!(save_as.path, "/tmp/notes/todo.txt");

        let open = FileDialog::new(DialogKind::Open, Some(current));
        assert_eq!(open.path, "/tmp/notes/");

        assert_eq!(FileDialog::new(DialogKind::Open, None).path, "");
    }

    #[test]
    fn test_blank_selection_is_ignored() {
        let mut dialog = FileDialog::new(DialogKind::SaveAs, None);
        assert_eq!(dialog.selection(), None);

        dialog.path = "   ".into();
        assert_eq!(dialog.selection(), None);

        dialog.path = " /tmp/note.txt ".into();
        assert_eq!(dialog.selection(), Some(PathBuf::from("/tmp/note.txt")));
    }
}
