//! Model definitions that vocabularies are validated against.
//!
//! The store only needs a narrow view of a model: the namespaces it defines
//! and, per namespace, the declarations with their own property names. Callers
//! with a richer model representation implement [`ModelFile`] and
//! [`ModelProvider`] directly; [`ModelDefinition`] and [`ModelSet`] are plain
//! serde-loadable implementations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A declaration in a model file: a named type with its own properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub name: String,

    /// Name of the declaration this one extends, in the same model file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_type: Option<String>,

    /// Properties declared directly on this declaration (inherited ones excluded).
    #[serde(default)]
    pub properties: Vec<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_type: None,
            properties: Vec::new(),
        }
    }

    /// Builder-style helper to set the super type.
    pub fn extends(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    /// Builder-style helper to append an own property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.properties.push(property.into());
        self
    }

    pub fn has_own_property(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }
}

/// The declarations of a single model namespace.
pub trait ModelFile {
    fn namespace(&self) -> &str;

    fn declarations(&self) -> &[Declaration];

    /// Find a declaration by name.
    fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations().iter().find(|d| d.name == name)
    }

    /// Find the declaration that owns `property`, starting at `declaration` and
    /// walking its super types.
    ///
    /// Returns None when the declaration is unknown, the property is not
    /// defined anywhere in the chain, or the chain is cyclic.
    fn property_owner(&self, declaration: &str, property: &str) -> Option<&Declaration> {
        let mut current = self.declaration(declaration)?;
        for _ in 0..self.declarations().len() {
            if current.has_own_property(property) {
                return Some(current);
            }
            current = self.declaration(current.super_type.as_deref()?)?;
        }
        None
    }
}

/// Source of model files, keyed by namespace.
pub trait ModelProvider {
    type File: ModelFile;

    fn model_files(&self) -> Vec<&Self::File>;

    fn model_file(&self, namespace: &str) -> Option<&Self::File>;
}

/// A serde-loadable model file.
///
/// # Example
///
/// ```
/// use vocab::{ModelDefinition, ModelFile};
///
/// let model = ModelDefinition::from_yaml(r#"
/// namespace: org.acme@1.0.0
/// declarations:
///   - name: Vehicle
///     properties: [vin]
///   - name: Truck
///     superType: Vehicle
///     properties: [weight]
/// "#).unwrap();
///
/// assert_eq!(model.namespace(), "org.acme@1.0.0");
/// assert_eq!(model.property_owner("Truck", "vin").unwrap().name, "Vehicle");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub namespace: String,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl ModelDefinition {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    /// Parse a model definition from YAML (or JSON, which YAML accepts).
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }
}

impl ModelFile for ModelDefinition {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

/// A collection of model definitions, one per namespace.
#[derive(Clone, Debug, Default)]
pub struct ModelSet {
    files: BTreeMap<String, ModelDefinition>,
}

impl ModelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model definition, replacing any previous one for the same namespace.
    pub fn insert(&mut self, model: ModelDefinition) {
        self.files.insert(model.namespace.clone(), model);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<ModelDefinition> for ModelSet {
    fn from_iter<I: IntoIterator<Item = ModelDefinition>>(iter: I) -> Self {
        let mut set = Self::new();
        for model in iter {
            set.insert(model);
        }
        set
    }
}

impl ModelProvider for ModelSet {
    type File = ModelDefinition;

    fn model_files(&self) -> Vec<&ModelDefinition> {
        self.files.values().collect()
    }

    fn model_file(&self, namespace: &str) -> Option<&ModelDefinition> {
        self.files.get(namespace)
    }
}
