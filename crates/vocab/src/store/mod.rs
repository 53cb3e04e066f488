//! The vocabulary store and its lookup and validation operations.
//!
//! [`VocabularyStore`] owns parsed vocabularies keyed by `namespace/locale`.
//! Term lookups generalize the requested locale one subtag at a time, and
//! validation cross-references every vocabulary against a
//! [`ModelProvider`](crate::ModelProvider).

mod error;
mod generator;
mod locale;
mod validation;
mod vocabulary_store;

pub use error::{VocabularyError, compute_suggestions};
pub use generator::{MissingTermGenerator, english_missing_term_generator};
pub use locale::{LocaleMatcher, LookupOptions, fallback_chain, find_vocabulary};
pub use validation::{ValidationResult, VocabularyReport};
pub use vocabulary_store::VocabularyStore;
