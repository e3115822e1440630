//! Keyboard shortcuts for the file commands.

/// File command triggered from a shortcut or the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCommand {
    Open,
    Save,
    SaveAs,
}

/// Modifier state of a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    pub logo: bool,
}

impl FileCommand {
    /// Map a key press to a command.
    ///
    /// Only Control+letter chords are recognised: `Ctrl+O`, `Ctrl+S` and
    /// `Ctrl+Shift+S`. Anything else is left to the text area.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.control || modifiers.alt || modifiers.logo {
            return None;
        }

        let mut chars = key.chars();
        let letter = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }

        match (letter, modifiers.shift) {
            ('s', false) => Some(Self::Save),
            ('s', true) => Some(Self::SaveAs),
            ('o', false) => Some(Self::Open),
            _ => None,
        }
    }
}
