//! Generators for terms that no vocabulary defines.

/// Produces a term when no vocabulary at any ancestor locale defines one.
///
/// Arguments are the namespace, the most general locale tried, the
/// declaration name and the optional property name.
pub type MissingTermGenerator = fn(&str, &str, &str, Option<&str>) -> Option<String>;

/// Derive an English term from element names.
///
/// A space is inserted before every uppercase letter and the first letter is
/// capitalized. Property terms read `<property> of the <Declaration>`.
///
/// ```
/// use vocab::english_missing_term_generator;
///
/// assert_eq!(
///     english_missing_term_generator("org.acme", "en", "PickupTruck", None).as_deref(),
///     Some("Pickup Truck"),
/// );
/// assert_eq!(
///     english_missing_term_generator("org.acme", "en", "Truck", Some("horsePower")).as_deref(),
///     Some("Horse Power of the Truck"),
/// );
/// ```
pub fn english_missing_term_generator(
    _namespace: &str,
    _locale: &str,
    declaration: &str,
    property: Option<&str>,
) -> Option<String> {
    let text = match property {
        Some(property) => format!("{property} of the{declaration}"),
        None => declaration.to_string(),
    };
    Some(camel_case_to_sentence(&text))
}

fn camel_case_to_sentence(text: &str) -> String {
    let mut sentence = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_uppercase() {
            sentence.push(' ');
        }
        sentence.push(c);
    }
    let trimmed = sentence.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronyms_are_spaced_per_letter() {
        assert_eq!(camel_case_to_sentence("VIN"), "V I N");
    }

    #[test]
    fn lowercase_declaration_is_capitalized() {
        assert_eq!(camel_case_to_sentence("truck"), "Truck");
    }

    #[test]
    fn empty_name_yields_empty_term() {
        assert_eq!(camel_case_to_sentence(""), "");
    }
}
