//! In-memory registry of vocabularies.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::Path;

use bon::Builder;

use crate::parser::parse_vocabulary;
use crate::store::error::VocabularyError;
use crate::store::generator::MissingTermGenerator;
use crate::store::locale::{LookupOptions, fallback_chain, find_vocabulary};
use crate::store::validation::{ValidationResult, VocabularyReport};
use crate::types::{ModelFile, ModelProvider, Vocabulary};

/// Registry of vocabularies keyed by `namespace/locale`.
///
/// The store exclusively owns its vocabularies. At most one vocabulary exists
/// per identifier; adding a second one fails rather than replacing the first.
/// Lookups return `None` on a miss and never fail.
///
/// # Example
///
/// ```
/// use vocab::{LookupOptions, VocabularyStore};
///
/// let mut store = VocabularyStore::new();
/// store.add_vocabulary(r#"
/// locale: en
/// namespace: org.acme@1.0.0
/// declarations:
///   - Truck: A road vehicle
/// "#).unwrap();
///
/// let voc = store
///     .get_vocabulary("org.acme@1.0.0", "en-GB", LookupOptions::lookup())
///     .unwrap();
/// assert_eq!(voc.identifier(), "org.acme@1.0.0/en");
///
/// let term = store.get_term("org.acme@1.0.0", "en-GB", "Truck", None);
/// assert_eq!(term.as_deref(), Some("A road vehicle"));
/// ```
#[derive(Debug, Builder)]
pub struct VocabularyStore {
    /// Fallback used by `get_term` when no vocabulary at any ancestor locale
    /// defines the term.
    missing_term_generator: Option<MissingTermGenerator>,

    /// Vocabularies indexed by identifier.
    #[builder(skip)]
    vocabularies: BTreeMap<String, Vocabulary>,
}

impl Default for VocabularyStore {
    fn default() -> Self {
        VocabularyStore::builder().build()
    }
}

impl VocabularyStore {
    /// Create an empty store without a missing term generator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_term_generator(&self) -> Option<MissingTermGenerator> {
        self.missing_term_generator
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Parse a vocabulary document and register it.
    ///
    /// Fails with [`VocabularyError::InvalidArgument`] on empty contents and
    /// with [`VocabularyError::DuplicateEntry`] when a vocabulary with the same
    /// namespace and locale is already registered. The store is unchanged on
    /// failure.
    pub fn add_vocabulary(&mut self, contents: &str) -> Result<&Vocabulary, VocabularyError> {
        if contents.trim().is_empty() {
            return Err(VocabularyError::InvalidArgument);
        }

        let vocabulary = parse_vocabulary(contents)?;
        match self.vocabularies.entry(vocabulary.identifier()) {
            Entry::Occupied(entry) => Err(VocabularyError::DuplicateEntry {
                identifier: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!(
                    identifier = %entry.key(),
                    terms = vocabulary.len(),
                    "registered vocabulary"
                );
                Ok(entry.insert(vocabulary))
            }
        }
    }

    /// Read a vocabulary file and register it.
    ///
    /// # Example
    ///
    /// ```ignore
    /// store.add_vocabulary_file("vocabularies/org.acme_en.voc")?;
    /// ```
    pub fn add_vocabulary_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<&Vocabulary, VocabularyError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| VocabularyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.add_vocabulary(&contents)
    }

    /// Remove the vocabulary for a namespace and locale, returning it.
    ///
    /// Removing an absent vocabulary is a no-op.
    pub fn remove_vocabulary(&mut self, namespace: &str, locale: &str) -> Option<Vocabulary> {
        let identifier = format!("{}/{}", namespace, locale.to_lowercase());
        let removed = self.vocabularies.remove(&identifier);
        if removed.is_some() {
            tracing::debug!(%identifier, "removed vocabulary");
        }
        removed
    }

    /// Remove every vocabulary.
    pub fn clear(&mut self) {
        self.vocabularies.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn len(&self) -> usize {
        self.vocabularies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabularies.is_empty()
    }

    /// All vocabularies, ordered by identifier.
    pub fn vocabularies(&self) -> impl Iterator<Item = &Vocabulary> {
        self.vocabularies.values()
    }

    pub fn vocabularies_for_namespace(&self, namespace: &str) -> Vec<&Vocabulary> {
        self.vocabularies
            .values()
            .filter(|v| v.namespace() == namespace)
            .collect()
    }

    /// Vocabularies whose locale equals `locale` once lowercased.
    pub fn vocabularies_for_locale(&self, locale: &str) -> Vec<&Vocabulary> {
        let locale = locale.to_lowercase();
        self.vocabularies
            .values()
            .filter(|v| v.locale() == locale)
            .collect()
    }

    /// Find the vocabulary for a namespace that best matches `locale`.
    ///
    /// The locale is lowercased and matched with [`find_vocabulary`].
    pub fn get_vocabulary(
        &self,
        namespace: &str,
        locale: &str,
        options: LookupOptions,
    ) -> Option<&Vocabulary> {
        let candidates = self.vocabularies_for_namespace(namespace);
        find_vocabulary(&locale.to_lowercase(), &candidates, options)
    }

    /// Look up a term, generalizing the locale until some vocabulary defines it.
    ///
    /// Each step does an exact-locale `get_vocabulary` and asks that vocabulary
    /// for the term; a vocabulary that exists but lacks the term, or defines it
    /// as an empty string, does not stop the search. When no ancestor locale has the term, the missing term
    /// generator (if configured) is consulted with the most general locale.
    pub fn get_term(
        &self,
        namespace: &str,
        locale: &str,
        declaration: &str,
        property: Option<&str>,
    ) -> Option<Cow<'_, str>> {
        let locale = locale.to_lowercase();
        let mut most_general = locale.as_str();
        for candidate in fallback_chain(&locale) {
            let term = self
                .get_vocabulary(namespace, candidate, LookupOptions::default())
                .and_then(|v| v.get_term(declaration, property))
                .filter(|term| !term.is_empty());
            if let Some(term) = term {
                return Some(Cow::Borrowed(term));
            }
            most_general = candidate;
        }

        let generator = self.missing_term_generator?;
        tracing::trace!(
            namespace,
            locale = most_general,
            declaration,
            ?property,
            "generating missing term"
        );
        generator(namespace, most_general, declaration, property).map(Cow::Owned)
    }

    /// Look up the term for a model element, following property inheritance.
    ///
    /// A property term is looked up on the declaration that owns the property,
    /// which may be a super type of `declaration`. Fails when the model does
    /// not define the namespace, declaration or property; returns `Ok(None)`
    /// when the model element exists but no vocabulary names it.
    pub fn resolve_term<P: ModelProvider>(
        &self,
        provider: &P,
        namespace: &str,
        locale: &str,
        declaration: &str,
        property: Option<&str>,
    ) -> Result<Option<Cow<'_, str>>, VocabularyError> {
        let model_file =
            provider
                .model_file(namespace)
                .ok_or_else(|| VocabularyError::UnknownModel {
                    namespace: namespace.to_string(),
                })?;
        let found = model_file.declaration(declaration).ok_or_else(|| {
            VocabularyError::UnknownDeclaration {
                namespace: namespace.to_string(),
                declaration: declaration.to_string(),
            }
        })?;

        let owner = match property {
            None => found,
            Some(property) => model_file
                .property_owner(&found.name, property)
                .ok_or_else(|| VocabularyError::UnknownProperty {
                    namespace: namespace.to_string(),
                    declaration: declaration.to_string(),
                    property: property.to_string(),
                })?,
        };

        Ok(self.get_term(model_file.namespace(), locale, &owner.name, property))
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Cross-reference every vocabulary against the provider's model files.
    ///
    /// Reports namespaces with no vocabulary, vocabularies with no model file,
    /// and term differences for every vocabulary that does have a model file.
    /// Mismatches are data, never errors.
    pub fn validate<P: ModelProvider>(&self, provider: &P) -> ValidationResult<'_> {
        let missing_vocabularies: Vec<String> = provider
            .model_files()
            .into_iter()
            .map(ModelFile::namespace)
            .filter(|namespace| !self.vocabularies().any(|v| v.namespace() == *namespace))
            .map(str::to_string)
            .collect();

        let additional_vocabularies: Vec<&Vocabulary> = self
            .vocabularies()
            .filter(|v| provider.model_file(v.namespace()).is_none())
            .collect();

        let mut vocabularies = BTreeMap::new();
        for vocabulary in self.vocabularies() {
            let Some(model_file) = provider.model_file(vocabulary.namespace()) else {
                continue;
            };
            let terms = vocabulary.validate(model_file);
            vocabularies.insert(
                vocabulary.identifier(),
                VocabularyReport::new(vocabulary, terms),
            );
        }

        tracing::debug!(
            missing = missing_vocabularies.len(),
            additional = additional_vocabularies.len(),
            checked = vocabularies.len(),
            "validated vocabularies"
        );

        ValidationResult {
            missing_vocabularies,
            additional_vocabularies,
            vocabularies,
        }
    }
}
