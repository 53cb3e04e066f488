//! Vocabulary document parser.

use icu_locale_core::Locale as LanguageTag;
use serde_yaml::Value;

use super::document::{DeclarationDocument, VocabularyDocument};
use super::error::ParseError;
use crate::types::{TermKey, Vocabulary};

/// Parse a YAML vocabulary document.
///
/// The locale must be a well-formed BCP-47 tag; it is lowercased in the
/// returned vocabulary. When a declaration appears more than once, the first
/// entry wins and later ones are ignored.
pub fn parse_vocabulary(input: &str) -> Result<Vocabulary, ParseError> {
    let document: VocabularyDocument = serde_yaml::from_str(input).map_err(|e| {
        let (line, column) = e
            .location()
            .map(|location| (location.line(), location.column()))
            .unwrap_or((0, 0));
        ParseError::Syntax {
            line,
            column,
            message: e.to_string(),
        }
    })?;

    let namespace = required(document.namespace, "namespace")?;
    let locale = normalize_locale(&required(document.locale, "locale")?)?;

    let mut vocabulary = Vocabulary::new(namespace, &locale);
    for (index, entry) in document.declarations.into_iter().enumerate() {
        let (name, term, properties) = split_declaration(index, entry)?;
        if vocabulary.contains_declaration(&name) {
            tracing::debug!(
                declaration = %name,
                "ignoring repeated declaration in vocabulary {}",
                vocabulary.identifier()
            );
            continue;
        }
        vocabulary.insert_term(TermKey::declaration(name.as_str()), term);
        for (property, property_term) in properties {
            vocabulary.insert_term(TermKey::property(name.as_str(), property), property_term);
        }
    }

    Ok(vocabulary)
}

/// Validate a BCP-47 language tag and lowercase it for indexing.
///
/// ```
/// use vocab::parser::normalize_locale;
///
/// assert_eq!(normalize_locale("en-GB").unwrap(), "en-gb");
/// assert!(normalize_locale("not a locale").is_err());
/// ```
pub fn normalize_locale(locale: &str) -> Result<String, ParseError> {
    locale
        .parse::<LanguageTag>()
        .map_err(|e| ParseError::InvalidLocale {
            locale: locale.to_string(),
            message: e.to_string(),
        })?;
    Ok(locale.to_lowercase())
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ParseError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ParseError::MissingField { field }),
    }
}

/// Split a declaration entry into its name, term and property terms.
fn split_declaration(
    index: usize,
    entry: DeclarationDocument,
) -> Result<(String, String, Vec<(String, String)>), ParseError> {
    let mut names = entry.term.into_iter();
    let (name, value) = match (names.next(), names.next()) {
        (Some(first), None) => first,
        (None, _) => {
            return Err(ParseError::InvalidDeclaration {
                index,
                message: "entry does not name a declaration".to_string(),
            });
        }
        (Some((first, _)), Some((second, _))) => {
            return Err(ParseError::InvalidDeclaration {
                index,
                message: format!("entry names more than one declaration: '{first}', '{second}'"),
            });
        }
    };
    if name.is_empty() {
        return Err(ParseError::InvalidDeclaration {
            index,
            message: "declaration name is empty".to_string(),
        });
    }
    let term = scalar_text(index, &name, value)?;

    let mut properties = Vec::with_capacity(entry.properties.len());
    for property in entry.properties {
        if property.len() != 1 {
            return Err(ParseError::InvalidDeclaration {
                index,
                message: format!(
                    "property entries of '{name}' must have exactly one name, found {}",
                    property.len()
                ),
            });
        }
        for (property, value) in property {
            if property.is_empty() {
                return Err(ParseError::InvalidDeclaration {
                    index,
                    message: format!("property of '{name}' has an empty name"),
                });
            }
            let term = scalar_text(index, &format!("{name}.{property}"), value)?;
            properties.push((property, term));
        }
    }

    Ok((name, term, properties))
}

/// The text of a scalar term. Numbers and booleans keep their written form and
/// an empty value is an empty term.
fn scalar_text(index: usize, element: &str, value: Value) -> Result<String, ParseError> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(ParseError::InvalidDeclaration {
                index,
                message: format!("term of '{element}' must be a scalar"),
            })
        }
    }
}
