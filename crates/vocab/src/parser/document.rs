//! Serde representation of the vocabulary document format.
//!
//! ```yaml
//! locale: en-gb
//! namespace: org.acme@1.0.0
//! declarations:
//!   - Truck: A road vehicle used to carry goods
//!     properties:
//!       - weight: The weight of the truck in KG
//!   - Color: A colour
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// A whole vocabulary document as written by an author.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub declarations: Vec<DeclarationDocument>,
}

/// One entry of the `declarations` list.
///
/// The declaration name is the entry's only key besides `properties`, and its
/// value is the declaration's term. Each property is a single-key mapping from
/// property name to term.
///
/// Terms are kept as raw YAML values so that plain scalars such as `1.0` or
/// `true` survive the flattened entry; the parser turns them into text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationDocument {
    #[serde(flatten)]
    pub term: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<BTreeMap<String, Value>>,
}

impl DeclarationDocument {
    pub fn new(name: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            term: BTreeMap::from([(name.into(), Value::String(term.into()))]),
            properties: Vec::new(),
        }
    }

    pub fn push_property(&mut self, name: impl Into<String>, term: impl Into<String>) {
        self.properties
            .push(BTreeMap::from([(name.into(), Value::String(term.into()))]));
    }
}
