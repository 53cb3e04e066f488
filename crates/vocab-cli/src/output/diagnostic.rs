//! Miette diagnostic wrapper for vocabulary parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;
use vocab::parser::ParseError;

/// A miette-compatible diagnostic for vocabulary parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid vocabulary: {message}")]
#[diagnostic(code(vocab::parse))]
pub struct VocabDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl VocabDiagnostic {
    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (offset, help) = match err {
            ParseError::Syntax { line, column, .. } => {
                (line_column_offset(content, *line, *column), None)
            }
            ParseError::MissingField { field } => {
                (0, Some(format!("add a top-level '{field}:' entry")))
            }
            ParseError::InvalidLocale { locale, .. } => (
                content.find(locale.as_str()).unwrap_or(0),
                Some("use a BCP-47 language tag such as 'en' or 'en-gb'".to_string()),
            ),
            ParseError::InvalidDeclaration { .. } => (
                content.find("declarations").unwrap_or(0),
                Some("each entry must name exactly one declaration or property".to_string()),
            ),
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        VocabDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convert a 1-based line and character column to a byte offset.
///
/// Columns count characters, so the column is mapped onto the byte index of
/// that character in the target line.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    let target = content.get(line_start..).and_then(|rest| rest.lines().next());
    let column_bytes = target.map_or(0, |text| {
        text.char_indices()
            .nth(column.saturating_sub(1))
            .map_or(text.len(), |(index, _)| index)
    });
    line_start + column_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_first_character() {
        assert_eq!(line_column_offset("abc\ndef", 1, 1), 0);
    }

    #[test]
    fn offset_on_later_line() {
        assert_eq!(line_column_offset("abc\ndef", 2, 2), 5);
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let content = "locale: fr\ndéclaration: é: x\n";
        let offset = line_column_offset(content, 2, 17);
        assert_eq!(&content[offset..], "x\n");
        assert!(content.is_char_boundary(line_column_offset(content, 2, 2)));
    }

    #[test]
    fn unknown_location_points_at_start() {
        assert_eq!(line_column_offset("abc", 0, 0), 0);
    }

    #[test]
    fn invalid_locale_points_at_locale() {
        let content = "namespace: org.acme\nlocale: not a locale\n";
        let err = ParseError::InvalidLocale {
            locale: "not a locale".to_string(),
            message: "bad".to_string(),
        };
        let diagnostic = VocabDiagnostic::from_parse_error(Path::new("acme.voc"), content, &err);
        assert_eq!(diagnostic.span.offset(), 28);
        assert!(diagnostic.message().contains("not a locale"));
    }
}
