//! Text Format Module
//!
//! The text widget only knows `\n`-separated lines and may drop a final
//! empty line when loading. [`TextFormat`] remembers how the file was laid
//! out on disk so text coming back from the widget is written the same way.
//!
//! Widget text is its lines joined with `\n`.

/// Line separator used by a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// `CrLf` as soon as the text holds a single `\r\n`
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }
}

/// On-disk layout of the document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat {
    pub line_ending: LineEnding,
    /// The widget dropped the file's final newline when loading it
    pub restore_final_newline: bool,
}

impl TextFormat {
    /// Detect the line ending of `text` and return it together with the
    /// `\n`-only text to load into the widget.
    pub fn detect(text: &str) -> (Self, String) {
        let line_ending = LineEnding::detect(text);
        let normalized = match line_ending {
            LineEnding::CrLf => text.replace("\r\n", "\n"),
            LineEnding::Lf => text.to_string(),
        };
        let format = Self {
            line_ending,
            restore_final_newline: false,
        };
        (format, normalized)
    }

    /// Record whether the widget kept the final newline of `loaded`.
    ///
    /// `rendered` is the widget's text right after loading.
    pub fn settle(&mut self, loaded: &str, rendered: &str) {
        self.restore_final_newline = loaded.ends_with('\n') && !rendered.ends_with('\n');
    }

    /// Turn the widget's text back into document text.
    pub fn from_widget(&self, rendered: &str) -> String {
        let mut text = rendered.to_string();
        if self.restore_final_newline {
            text.push('\n');
        }
        match self.line_ending {
            LineEnding::CrLf => text.replace('\n', "\r\n"),
            LineEnding::Lf => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a\r\nb"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_plain_text_passes_through() {
        let (mut format, loaded) = TextFormat::detect("hello");
        format.settle(&loaded, "hello");

        assert_eq!(format, TextFormat::default());
        assert_eq!(format.from_widget("hello!"), "hello!");
        assert_eq!(format.from_widget(""), "");
    }

    #[test]
    fn test_crlf_is_restored() {
        let (mut format, loaded) = TextFormat::detect("a\r\nb");
        assert_eq!(loaded, "a\nb");
        format.settle(&loaded, "a\nb");

        assert_eq!(format.from_widget("a\nbc"), "a\r\nbc");
    }

    #[test]
    fn test_final_newline_kept_by_widget() {
        let (mut format, loaded) = TextFormat::detect("hello\n");
        format.settle(&loaded, "hello\n");

        assert!(!format.restore_final_newline);
        assert_eq!(format.from_widget(">hello\n"), ">hello\n");
    }

    #[test]
    fn test_final_newline_dropped_by_widget() {
        let (mut format, loaded) = TextFormat::detect("x\r\ny\r\n");
        format.settle(&loaded, "x\ny");

        assert!(format.restore_final_newline);
        assert_eq!(format.from_widget(">x\ny"), ">x\r\ny\r\n");
    }
}
