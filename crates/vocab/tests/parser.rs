//! Tests for the vocabulary document parser.

use vocab::{TermKey, Vocabulary};
use vocab::parser::{ParseError, parse_vocabulary};

// =========================================================================
// Document Shape
// =========================================================================

#[test]
fn parse_declarations_and_properties() {
    let voc = parse_vocabulary(
        r#"
locale: en-gb
namespace: org.acme@1.0.0
declarations:
  - Truck: A road vehicle used to carry goods
    properties:
      - weight: The weight of the truck in KG
      - horsePower: The horse power of the truck
  - Color: A colour
"#,
    )
    .unwrap();

    assert_eq!(voc.len(), 4);
    assert_eq!(
        voc.get_term("Truck", None),
        Some("A road vehicle used to carry goods")
    );
    assert_eq!(
        voc.get_term("Truck", Some("horsePower")),
        Some("The horse power of the truck")
    );
    assert_eq!(voc.get_term("Color", None), Some("A colour"));
    assert_eq!(voc.get_term("Color", Some("weight")), None);
    assert_eq!(voc.get_term("Engine", None), None);
}

#[test]
fn terms_iterate_in_document_order() {
    let voc = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - Zebra: Z
    properties:
      - stripes: S
  - Aardvark: A
"#,
    )
    .unwrap();

    let keys: Vec<String> = voc.terms().map(|(key, _)| key.to_string()).collect();
    assert_eq!(keys, ["Zebra", "Zebra.stripes", "Aardvark"]);
    let names: Vec<&str> = voc.declaration_names().collect();
    assert_eq!(names, ["Zebra", "Aardvark"]);
}

#[test]
fn first_repeated_declaration_wins() {
    let voc = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - Truck: First
  - Truck: Second
    properties:
      - weight: Ignored
"#,
    )
    .unwrap();

    assert_eq!(voc.get_term("Truck", None), Some("First"));
    assert_eq!(voc.get_term("Truck", Some("weight")), None);
    assert_eq!(voc.len(), 1);
}

#[test]
fn declarations_are_optional() {
    let voc = parse_vocabulary("locale: fr\nnamespace: org.acme\n").unwrap();
    assert!(voc.is_empty());
    assert_eq!(voc.identifier(), "org.acme/fr");
}

#[test]
fn term_keys_address_properties() {
    let voc = parse_vocabulary(
        "locale: en\nnamespace: n\ndeclarations:\n  - A: a\n    properties:\n      - b: ab\n",
    )
    .unwrap();
    let keys: Vec<&TermKey> = voc.terms().map(|(key, _)| key).collect();
    assert_eq!(keys, [&TermKey::declaration("A"), &TermKey::property("A", "b")]);
}

#[test]
fn plain_scalar_terms_keep_their_text() {
    let voc = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - Version: 1.0
  - Answer: 42
  - Enabled: true
    properties:
      - retries: 3
      - strict: false
  - Blank:
"#,
    )
    .unwrap();

    assert_eq!(voc.get_term("Version", None), Some("1.0"));
    assert_eq!(voc.get_term("Answer", None), Some("42"));
    assert_eq!(voc.get_term("Enabled", None), Some("true"));
    assert_eq!(voc.get_term("Enabled", Some("retries")), Some("3"));
    assert_eq!(voc.get_term("Enabled", Some("strict")), Some("false"));
    assert_eq!(voc.get_term("Blank", None), Some(""));
}

#[test]
fn nested_term_is_rejected() {
    let err = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - Truck: [A, truck]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::InvalidDeclaration { index: 0, .. }));
    insta::assert_snapshot!(err.to_string(), @"declaration 0: term of 'Truck' must be a scalar");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn invalid_yaml_is_syntax_error_with_location() {
    let err = parse_vocabulary("locale: en\nnamespace: [unclosed\n").unwrap_err();
    let ParseError::Syntax { line, .. } = err else {
        panic!("expected syntax error, got {err:?}");
    };
    assert!(line >= 2);
}

#[test]
fn missing_namespace_is_reported() {
    let err = parse_vocabulary("locale: en\ndeclarations: []\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingField { field: "namespace" }));
    insta::assert_snapshot!(err.to_string(), @"a vocabulary must specify a namespace");
}

#[test]
fn missing_locale_is_reported() {
    let err = parse_vocabulary("namespace: org.acme\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingField { field: "locale" }));
}

#[test]
fn blank_locale_is_missing() {
    let err = parse_vocabulary("locale: ''\nnamespace: org.acme\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingField { field: "locale" }));
}

#[test]
fn malformed_locale_is_rejected() {
    let err = parse_vocabulary("locale: not a locale\nnamespace: org.acme\n").unwrap_err();
    assert!(matches!(
        &err,
        ParseError::InvalidLocale { locale, .. } if locale == "not a locale"
    ));
}

#[test]
fn entry_with_two_declarations_is_rejected() {
    let err = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - Color: A colour
  - Truck: A truck
    Car: A car
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::InvalidDeclaration { index: 1, .. }));
}

#[test]
fn entry_without_declaration_name_is_rejected() {
    let err = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - properties:
      - weight: Weight
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::InvalidDeclaration { index: 0, .. }));
}

#[test]
fn property_entry_with_two_names_is_rejected() {
    let err = parse_vocabulary(
        r#"
locale: en
namespace: org.acme
declarations:
  - Truck: A truck
    properties:
      - weight: Weight
        colour: Colour
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::InvalidDeclaration { index: 0, .. }));
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn to_yaml_parses_back_to_same_vocabulary() {
    let voc = parse_vocabulary(
        r#"
locale: en-GB
namespace: org.acme@1.0.0
declarations:
  - Truck: A truck
    properties:
      - weight: Weight
  - Color: Colour
"#,
    )
    .unwrap();

    let yaml = voc.to_yaml().unwrap();
    assert!(yaml.contains("locale: en-gb"));
    assert_eq!(parse_vocabulary(&yaml).unwrap(), voc);
}

#[test]
fn properties_serialize_under_their_declaration() {
    let mut voc = Vocabulary::new("org.acme", "en");
    assert!(voc.insert_term(TermKey::declaration("A"), "a"));
    assert!(voc.insert_term(TermKey::declaration("B"), "b"));
    assert!(voc.insert_term(TermKey::property("A", "p"), "ap"));

    let yaml = voc.to_yaml().unwrap();
    let parsed = parse_vocabulary(&yaml).unwrap();
    assert_eq!(parsed.get_term("A", Some("p")), Some("ap"));
    assert_eq!(parsed.get_term("B", Some("p")), None);
    let names: Vec<&str> = parsed.declaration_names().collect();
    assert_eq!(names, ["A", "B"]);

    let json = serde_json::to_value(&voc).unwrap();
    assert_eq!(
        json["declarations"],
        serde_json::json!([{ "A": "a", "properties": [{ "p": "ap" }] }, { "B": "b" }])
    );
}

#[test]
fn property_without_declaration_is_not_inserted() {
    let mut voc = Vocabulary::new("org.acme", "en");
    assert!(!voc.insert_term(TermKey::property("A", "p"), "ap"));
    assert!(voc.is_empty());
    assert!(voc.to_document().declarations.is_empty());
}

#[test]
fn vocabulary_serializes_as_document() {
    let voc = parse_vocabulary(
        "locale: fr\nnamespace: org.acme\ndeclarations:\n  - Truck: Camion\n",
    )
    .unwrap();

    let json = serde_json::to_value(&voc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "locale": "fr",
            "namespace": "org.acme",
            "declarations": [{ "Truck": "Camion" }],
        })
    );
}
