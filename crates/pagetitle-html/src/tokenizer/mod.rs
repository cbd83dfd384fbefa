//! Title tokenizer module.
//!
//! Splits raw, possibly malformed HTML into a flat stream of tokens using a
//! fixed list of match rules, and decodes the entity tokens it produces.

/// Entity decoding for numeric and named references.
pub mod character_reference;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// The ordered-alternative scanner.
pub mod scanner;
/// Token types produced by the scanner.
pub mod token;

pub use character_reference::{REPLACEMENT_CHARACTER, decode_entity};
pub use scanner::{TitleTokenizer, tokenize};
pub use token::{Lexeme, Token, TokenKind};
