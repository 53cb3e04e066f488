//! Results of validating a store against a model provider.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{TermValidation, Vocabulary};

/// Term differences for one vocabulary whose namespace has a model file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyReport {
    pub locale: String,
    pub namespace: String,
    pub missing_terms: Vec<String>,
    pub additional_terms: Vec<String>,
}

impl VocabularyReport {
    pub(crate) fn new(vocabulary: &Vocabulary, terms: TermValidation) -> Self {
        Self {
            locale: vocabulary.locale().to_string(),
            namespace: vocabulary.namespace().to_string(),
            missing_terms: terms.missing_terms,
            additional_terms: terms.additional_terms,
        }
    }

    /// True if the vocabulary matches its model file exactly.
    pub fn is_complete(&self) -> bool {
        self.missing_terms.is_empty() && self.additional_terms.is_empty()
    }
}

/// Outcome of [`VocabularyStore::validate`](crate::VocabularyStore::validate).
///
/// Borrows the store's vocabularies for `additional_vocabularies`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult<'a> {
    /// Namespaces of model files that have no vocabulary at all.
    pub missing_vocabularies: Vec<String>,
    /// Vocabularies whose namespace has no model file.
    pub additional_vocabularies: Vec<&'a Vocabulary>,
    /// Per-vocabulary term differences, keyed by `namespace/locale`.
    pub vocabularies: BTreeMap<String, VocabularyReport>,
}

impl ValidationResult<'_> {
    /// True if nothing is missing or extraneous anywhere.
    pub fn is_valid(&self) -> bool {
        self.missing_vocabularies.is_empty()
            && self.additional_vocabularies.is_empty()
            && self.vocabularies.values().all(VocabularyReport::is_complete)
    }
}
