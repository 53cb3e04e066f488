//! Core types: vocabulary documents, term keys and model definitions.

mod model;
mod term_key;
mod vocabulary;

pub use model::{Declaration, ModelDefinition, ModelFile, ModelProvider, ModelSet};
pub use term_key::TermKey;
pub use vocabulary::{TermValidation, Vocabulary};
