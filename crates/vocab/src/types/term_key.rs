use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Composite key addressing a single term in a vocabulary.
///
/// A key without a property addresses the declaration itself; a key with a
/// property addresses one of the declaration's properties.
///
/// # Example
///
/// ```
/// use vocab::TermKey;
///
/// let decl = TermKey::declaration("Truck");
/// let prop = TermKey::property("Truck", "weight");
///
/// assert_eq!(decl.to_string(), "Truck");
/// assert_eq!(prop.to_string(), "Truck.weight");
/// ```
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TermKey {
    declaration: String,
    property: Option<String>,
}

impl TermKey {
    /// Build a key from a declaration name and an optional property name.
    pub fn new(declaration: impl Into<String>, property: Option<&str>) -> Self {
        Self {
            declaration: declaration.into(),
            property: property.map(str::to_string),
        }
    }

    /// Key for the term of a declaration.
    pub fn declaration(name: impl Into<String>) -> Self {
        Self {
            declaration: name.into(),
            property: None,
        }
    }

    /// Key for the term of a property of a declaration.
    pub fn property(declaration: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
            property: Some(property.into()),
        }
    }

    pub fn declaration_name(&self) -> &str {
        &self.declaration
    }

    pub fn property_name(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// True if this key addresses a declaration rather than a property.
    pub fn is_declaration(&self) -> bool {
        self.property.is_none()
    }
}

impl Display for TermKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "{}.{}", self.declaration, property),
            None => write!(f, "{}", self.declaration),
        }
    }
}
