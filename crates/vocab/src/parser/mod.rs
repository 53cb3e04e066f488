//! Vocabulary document parser.
//!
//! Vocabularies are authored as YAML documents with a `locale`, a `namespace`
//! and a list of `declarations`. This module deserializes that shape and
//! turns it into a [`Vocabulary`](crate::Vocabulary).

mod document;
pub mod error;
mod file;

pub use document::{DeclarationDocument, VocabularyDocument};
pub use error::ParseError;
pub use file::{normalize_locale, parse_vocabulary};
