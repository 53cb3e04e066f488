//! Error types for the vocabulary store.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors returned by [`VocabularyStore`](crate::VocabularyStore) operations.
///
/// Every error is fatal to the call that produced it and leaves the store
/// unchanged. Lookups never fail; they return `None` on a miss.
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// Empty contents were passed to `add_vocabulary`.
    #[error("vocabulary contents must not be empty")]
    InvalidArgument,

    /// A vocabulary with the same `namespace/locale` is already registered.
    #[error("vocabulary '{identifier}' has already been added")]
    DuplicateEntry { identifier: String },

    /// The contents could not be parsed into a vocabulary.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// File I/O error when reading a vocabulary file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `resolve_term` was asked about a namespace the model provider lacks.
    #[error("failed to find model file '{namespace}'")]
    UnknownModel { namespace: String },

    /// `resolve_term` was asked about a declaration the model file lacks.
    #[error("failed to find declaration '{declaration}' in '{namespace}'")]
    UnknownDeclaration {
        namespace: String,
        declaration: String,
    },

    /// `resolve_term` was asked about a property the declaration lacks.
    #[error("failed to find property '{property}' on '{declaration}' in '{namespace}'")]
    UnknownProperty {
        namespace: String,
        declaration: String,
        property: String,
    },
}

/// Maximum number of suggestions returned by [`compute_suggestions`].
const MAX_SUGGESTIONS: usize = 3;

/// Find candidate names close to `name`, nearest first.
///
/// A candidate qualifies when its Levenshtein distance to `name` is at most a
/// third of the name's length (minimum 1). Exact matches are excluded.
///
/// ```
/// use vocab::compute_suggestions;
///
/// let names = ["Truck", "Trailer", "Color"];
/// assert_eq!(compute_suggestions("Truk", &names), vec!["Truck"]);
/// assert!(compute_suggestions("Engine", &names).is_empty());
/// ```
pub fn compute_suggestions<S: AsRef<str>>(name: &str, candidates: &[S]) -> Vec<String> {
    let threshold = (name.chars().count() / 3).max(1);
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| *candidate != name)
        .map(|candidate| (strsim::levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
