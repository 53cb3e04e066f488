pub mod parser;
pub mod store;
pub mod types;

pub use store::{
    LocaleMatcher, LookupOptions, MissingTermGenerator, ValidationResult, VocabularyError,
    VocabularyReport, VocabularyStore, compute_suggestions, english_missing_term_generator,
    fallback_chain, find_vocabulary,
};
pub use types::{
    Declaration, ModelDefinition, ModelFile, ModelProvider, ModelSet, TermKey, TermValidation,
    Vocabulary,
};
