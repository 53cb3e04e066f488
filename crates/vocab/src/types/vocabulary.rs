use std::collections::{HashMap, HashSet};

use serde::{Serialize, Serializer};

use crate::parser::{DeclarationDocument, VocabularyDocument};
use crate::types::{ModelFile, TermKey};

/// The terms of one namespace in one locale.
///
/// Vocabularies are created by parsing a document (see
/// [`parse_vocabulary`](crate::parser::parse_vocabulary)) and are usually owned
/// by a [`VocabularyStore`](crate::VocabularyStore). The locale is stored
/// lowercased.
///
/// # Example
///
/// ```
/// use vocab::parser::parse_vocabulary;
///
/// let voc = parse_vocabulary(r#"
/// locale: en-GB
/// namespace: org.acme@1.0.0
/// declarations:
///   - Truck: A road vehicle
///     properties:
///       - weight: The weight of the truck
/// "#).unwrap();
///
/// assert_eq!(voc.identifier(), "org.acme@1.0.0/en-gb");
/// assert_eq!(voc.get_term("Truck", None), Some("A road vehicle"));
/// assert_eq!(voc.get_term("Truck", Some("weight")), Some("The weight of the truck"));
/// assert_eq!(voc.get_term("Truck", Some("colour")), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    namespace: String,
    locale: String,
    terms: HashMap<TermKey, String>,
    /// Keys in insertion order.
    order: Vec<TermKey>,
}

/// Differences between a vocabulary and the model file it describes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermValidation {
    /// Declarations and `Declaration.property` names the model defines but the
    /// vocabulary lacks.
    pub missing_terms: Vec<String>,
    /// Declarations and `Declaration.property` names the vocabulary defines but
    /// the model does not.
    pub additional_terms: Vec<String>,
}

impl TermValidation {
    pub fn is_empty(&self) -> bool {
        self.missing_terms.is_empty() && self.additional_terms.is_empty()
    }
}

impl Vocabulary {
    /// Create an empty vocabulary. The locale is lowercased.
    pub fn new(namespace: impl Into<String>, locale: &str) -> Self {
        Self {
            namespace: namespace.into(),
            locale: locale.to_lowercase(),
            terms: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The unique key of this vocabulary: `namespace/locale`.
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.namespace, self.locale)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The primary language subtag of the locale (`en` for `en-gb`).
    pub fn language(&self) -> &str {
        self.locale.split('-').next().unwrap_or(&self.locale)
    }

    /// Add a term. Returns false, leaving the vocabulary unchanged, if the key
    /// is already defined or if it names a property of a declaration that has
    /// no term yet.
    pub fn insert_term(&mut self, key: TermKey, term: impl Into<String>) -> bool {
        if self.terms.contains_key(&key) {
            return false;
        }
        if !key.is_declaration() && !self.contains_declaration(key.declaration_name()) {
            return false;
        }
        self.order.push(key.clone());
        self.terms.insert(key, term.into());
        true
    }

    pub fn contains_declaration(&self, declaration: &str) -> bool {
        self.terms.contains_key(&TermKey::declaration(declaration))
    }

    /// Look up the term for a declaration, or for one of its properties.
    pub fn get_term(&self, declaration: &str, property: Option<&str>) -> Option<&str> {
        self.terms
            .get(&TermKey::new(declaration, property))
            .map(String::as_str)
    }

    /// All terms in document order.
    pub fn terms(&self) -> impl Iterator<Item = (&TermKey, &str)> {
        self.order
            .iter()
            .filter_map(|key| self.terms.get(key).map(|term| (key, term.as_str())))
    }

    /// Names of the declarations this vocabulary has terms for, in document order.
    pub fn declaration_names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|key| key.is_declaration())
            .map(TermKey::declaration_name)
    }

    /// Property names with terms for a declaration, in document order.
    pub fn property_names<'a>(&'a self, declaration: &'a str) -> impl Iterator<Item = &'a str> {
        self.order
            .iter()
            .filter(move |key| key.declaration_name() == declaration)
            .filter_map(TermKey::property_name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Compare this vocabulary against the declarations of a model file.
    ///
    /// Declaration names are compared first. For every declaration present in
    /// both, own property names are compared and reported as
    /// `Declaration.property`.
    pub fn validate<F: ModelFile + ?Sized>(&self, model_file: &F) -> TermValidation {
        let model_names: HashSet<&str> = model_file
            .declarations()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        let vocabulary_names: Vec<&str> = self.declaration_names().collect();

        let mut result = TermValidation {
            missing_terms: model_file
                .declarations()
                .iter()
                .filter(|d| !self.contains_declaration(&d.name))
                .map(|d| d.name.clone())
                .collect(),
            additional_terms: vocabulary_names
                .iter()
                .filter(|name| !model_names.contains(*name))
                .map(|name| (*name).to_string())
                .collect(),
        };

        for declaration in model_file.declarations() {
            if !self.contains_declaration(&declaration.name) {
                continue;
            }
            let defined: Vec<&str> = self.property_names(&declaration.name).collect();
            result.missing_terms.extend(
                declaration
                    .properties
                    .iter()
                    .filter(|p| !defined.contains(&p.as_str()))
                    .map(|p| format!("{}.{}", declaration.name, p)),
            );
            result.additional_terms.extend(
                defined
                    .iter()
                    .filter(|p| !declaration.has_own_property(p))
                    .map(|p| format!("{}.{}", declaration.name, p)),
            );
        }

        result
    }

    /// Convert back into the document shape.
    ///
    /// Declarations keep their insertion order. Each property term is listed
    /// under the declaration it belongs to, whenever it was inserted.
    pub fn to_document(&self) -> VocabularyDocument {
        let mut declarations: Vec<DeclarationDocument> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (key, term) in self.terms() {
            let name = key.declaration_name();
            match key.property_name() {
                None => {
                    positions.insert(name, declarations.len());
                    declarations.push(DeclarationDocument::new(name, term));
                }
                Some(property) => {
                    let owner = positions
                        .get(name)
                        .and_then(|&index| declarations.get_mut(index));
                    if let Some(owner) = owner {
                        owner.push_property(property, term);
                    }
                }
            }
        }
        VocabularyDocument {
            locale: Some(self.locale.clone()),
            namespace: Some(self.namespace.clone()),
            declarations,
        }
    }

    /// Serialize to the YAML document format.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.to_document())
    }
}

impl Serialize for Vocabulary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}
