//! Entity decoding for the three entity token kinds.
//!
//! Decoding never fails: anything that cannot be resolved becomes
//! U+FFFD REPLACEMENT CHARACTER.

use std::borrow::Cow;

use super::named_character_references::lookup_entity;
use super::token::Token;

/// U+FFFD REPLACEMENT CHARACTER
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Decode the digits of a numeric character reference in the given radix.
///
/// Overflow, surrogates and values above U+10FFFF all yield
/// [`REPLACEMENT_CHARACTER`].
#[must_use]
pub fn decode_numeric(digits: &str, radix: u32) -> char {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT_CHARACTER)
}

/// Decode a named reference payload such as `amp;`.
///
/// The lookup is exact; `AMP;` and `amp;` are different keys.
#[must_use]
pub fn decode_named(name: &str) -> Cow<'static, str> {
    lookup_entity(name).map_or_else(
        || Cow::Owned(REPLACEMENT_CHARACTER.to_string()),
        Cow::Borrowed,
    )
}

/// Decode an entity token.
///
/// Returns `None` for tokens that are not entities.
#[must_use]
pub fn decode_entity(token: &Token<'_>) -> Option<Cow<'static, str>> {
    match *token {
        Token::DecimalEntity(digits) => Some(Cow::Owned(decode_numeric(digits, 10).to_string())),
        Token::HexEntity(digits) => Some(Cow::Owned(decode_numeric(digits, 16).to_string())),
        Token::NamedEntity(name) => Some(decode_named(name)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_out_of_range_is_replaced() {
        assert_eq!(decode_numeric("1114112", 10), REPLACEMENT_CHARACTER);
        assert_eq!(decode_numeric("D800", 16), REPLACEMENT_CHARACTER);
        assert_eq!(decode_numeric("99999999999999999999", 10), REPLACEMENT_CHARACTER);
        assert_eq!(decode_numeric("10FFFF", 16), '\u{10FFFF}');
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        assert_eq!(decode_numeric("e9", 16), 'é');
        assert_eq!(decode_numeric("E9", 16), 'é');
    }

    #[test]
    fn named_lookup_is_exact() {
        assert_eq!(decode_named("amp;"), "&");
        assert_eq!(decode_named("AMP;"), "&");
        assert_eq!(decode_named("Amp;"), "\u{FFFD}");
        assert_eq!(decode_named("fjlig;"), "fj");
    }

    #[test]
    fn non_entities_are_not_decoded() {
        assert_eq!(decode_entity(&Token::Word("amp;")), None);
    }
}
