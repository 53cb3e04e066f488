//! Parse error types for vocabulary documents.

use thiserror::Error;

/// An error that occurred while parsing a vocabulary document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not valid YAML or does not have the document shape.
    ///
    /// Line and column are 1-based; both are 0 when the location is unknown.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A required top-level field is absent or empty.
    #[error("a vocabulary must specify a {field}")]
    MissingField { field: &'static str },

    /// The locale is not a well-formed BCP-47 language tag.
    #[error("invalid locale '{locale}': {message}")]
    InvalidLocale { locale: String, message: String },

    /// A declaration or property entry does not name exactly one element.
    #[error("declaration {index}: {message}")]
    InvalidDeclaration { index: usize, message: String },
}
