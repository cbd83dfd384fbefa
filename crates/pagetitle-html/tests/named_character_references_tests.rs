//! Integration tests for named character reference lookup.

use pagetitle_html::tokenizer::named_character_references::{entity_count, lookup_entity};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
    assert_eq!(lookup_entity("ndash;"), Some("\u{2013}"));
    assert_eq!(lookup_entity("hellip;"), Some("\u{2026}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("copy"), Some("\u{00A9}"));
    // Not every entity has a legacy form
    assert_eq!(lookup_entity("hellip"), None);
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("Aacute;"), Some("\u{00C1}"));
    assert_eq!(lookup_entity("aacute;"), Some("\u{00E1}"));
    assert_eq!(lookup_entity("AACUTE;"), None);
}

#[test]
fn test_multi_code_point_entities() {
    assert_eq!(lookup_entity("fjlig;"), Some("fj"));
    assert_eq!(lookup_entity("NotEqualTilde;"), Some("\u{2242}\u{0338}"));
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_table_is_complete() {
    assert_eq!(entity_count(), 2231);
    assert_eq!(lookup_entity("zwnj;"), Some("\u{200C}"));
    assert_eq!(lookup_entity("AElig;"), Some("\u{00C6}"));
}
