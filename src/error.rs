//! Error types for reading drawing markup

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Errors that stop a whole document from being converted
///
/// Problems inside a drawing never surface here; unsupported elements are
/// dropped instead.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

impl ConvertError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = match self {
            ConvertError::Xml(err) => {
                let pos = err.pos();
                let len = source.chars().count();
                let start = char_offset(source, pos.row as usize, pos.col as usize)
                    .min(len.saturating_sub(1));
                let end = (start + 1).min(len);

                Report::build(ReportKind::Error, filename, start)
                    .with_message("invalid XML")
                    .with_label(
                        Label::new((filename, start..end))
                            .with_message(err.to_string())
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
            }
        };
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Character offset of a 1-based row/column position
fn char_offset(source: &str, row: usize, col: usize) -> usize {
    let preceding: usize = source
        .split('\n')
        .take(row.saturating_sub(1))
        .map(|line| line.chars().count() + 1)
        .sum();
    preceding + col.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_offset() {
        assert_eq!(char_offset("abc", 1, 1), 0);
        assert_eq!(char_offset("abc\ndef", 2, 3), 6);
        assert_eq!(char_offset("é\nx", 2, 1), 2);
    }

    #[test]
    fn test_format_reports_location() {
        let source = "<rect>\n</oval>";
        let err = ConvertError::from(roxmltree::Document::parse(source).unwrap_err());
        let report = err.format(source, "drawing.xml");
        assert!(report.contains("drawing.xml"));
        assert!(report.contains("invalid XML"));
    }
}
