//! Forgiving HTML title extraction for chat bots.
//!
//! # Scope
//!
//! This crate turns the first few kilobytes of an HTML document into a one
//! line title:
//! - **Tokenizer**: an ordered-alternative scanner that never fails and never
//!   skips input ([`tokenizer::scanner`])
//! - **Entity decoding**: decimal, hexadecimal and the full HTML5 named
//!   reference table, with U+FFFD for anything unresolvable
//! - **Title reducer**: a small state machine that renders the region
//!   between the first title tag and the next one ([`title`])
//! - **Truncation**: a character limit with an ellipsis ([`truncate`])
//!
//! `<b> <i> <u> <s>` inside the title are rewritten to the IRC formatting
//! codes `0x02`, `0x1D`, `0x1F` and `0x1E`.
//!
//! # Not Implemented
//!
//! - Tree construction or any validation of the markup
//! - Input split across several reads
//! - Pairing of opening and closing style tags
//!
//! # Example
//! ```
//! use pagetitle_html::parse_title;
//!
//! let html = "<html><head><title>Fish &amp; <b>Chips</b></title>";
//! assert_eq!(parse_title(html, None), "Fish & \x02Chips\x02");
//! assert_eq!(parse_title(html, Some(4)), "Fish...");
//! ```

/// IRC formatting codes for inline style tags.
pub mod style;
/// The title region state machine.
pub mod title;
/// Title tokenizer and entity decoding.
pub mod tokenizer;
/// Character-limit truncation.
pub mod truncate;

pub use style::StyleTag;
pub use title::{ReduceMode, TitleReducer, TitleState, extract_title, render_fragment};
pub use tokenizer::{Lexeme, TitleTokenizer, Token, TokenKind, tokenize};

/// Extract the title of `html` and bound it to `limit` characters.
///
/// Never fails: malformed markup is absorbed, an unterminated title yields
/// what was found, and a document without a title yields an empty string.
#[must_use]
pub fn parse_title(html: &str, limit: Option<usize>) -> String {
    truncate::truncate(&extract_title(html), limit)
}
