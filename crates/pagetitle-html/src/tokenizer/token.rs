use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// A single lexical unit of a title scan.
///
/// Every variant borrows from the scanned buffer. Entity variants carry only
/// the captured payload (`36` for `&#36;`, `2013` for `&#x2013;`, `amp;` for
/// `&amp;`), while tag variants carry the full tag syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token<'a> {
    /// One or more whitespace characters, verbatim.
    Whitespace(&'a str),

    /// An opening or closing `<title>` tag. The two forms are not told apart.
    TitleTag(&'a str),

    /// A run of characters other than `< > & " '` and whitespace.
    Word(&'a str),

    /// `&#NNN;` with the decimal digits as payload.
    DecimalEntity(&'a str),

    /// `&#xHHH;` with the hex digits as payload.
    HexEntity(&'a str),

    /// `&name;` with `name;` as payload. The trailing semicolon is kept
    /// because it is part of the named reference table keys.
    NamedEntity(&'a str),

    /// Any other `<...>` construct.
    OtherTag {
        /// The full tag text, brackets included.
        text: &'a str,
        /// The bare tag identifier, as written.
        tag_name: &'a str,
    },

    /// A single character no other rule accepted.
    Invalid(&'a str),
}

/// The kind of a [`Token`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum TokenKind {
    /// See [`Token::Whitespace`].
    Whitespace,
    /// See [`Token::TitleTag`].
    TitleTag,
    /// See [`Token::Word`].
    Word,
    /// See [`Token::DecimalEntity`].
    DecimalEntity,
    /// See [`Token::HexEntity`].
    HexEntity,
    /// See [`Token::NamedEntity`].
    NamedEntity,
    /// See [`Token::OtherTag`].
    OtherTag,
    /// See [`Token::Invalid`].
    Invalid,
}

impl<'a> Token<'a> {
    /// The kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Whitespace(_) => TokenKind::Whitespace,
            Self::TitleTag(_) => TokenKind::TitleTag,
            Self::Word(_) => TokenKind::Word,
            Self::DecimalEntity(_) => TokenKind::DecimalEntity,
            Self::HexEntity(_) => TokenKind::HexEntity,
            Self::NamedEntity(_) => TokenKind::NamedEntity,
            Self::OtherTag { .. } => TokenKind::OtherTag,
            Self::Invalid(_) => TokenKind::Invalid,
        }
    }

    /// The token's text: the verbatim match for whitespace, words, tags and
    /// invalid characters, the captured payload for entities.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match *self {
            Self::Whitespace(s)
            | Self::TitleTag(s)
            | Self::Word(s)
            | Self::DecimalEntity(s)
            | Self::HexEntity(s)
            | Self::NamedEntity(s)
            | Self::Invalid(s)
            | Self::OtherTag { text: s, .. } => s,
        }
    }

    /// The tag identifier of an [`Token::OtherTag`], `None` otherwise.
    #[must_use]
    pub const fn tag_name(&self) -> Option<&'a str> {
        match *self {
            Self::OtherTag { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OtherTag { tag_name, .. } => write!(f, "OtherTag({tag_name})"),
            other => write!(f, "{}({:?})", other.kind(), other.text()),
        }
    }
}

/// A [`Token`] together with the span of input it was matched from.
///
/// `raw` is always the exact matched text, so concatenating the `raw` of
/// every lexeme of a scan gives back the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lexeme<'a> {
    /// The classified token.
    #[serde(flatten)]
    pub token: Token<'a>,
    /// Byte offset of the match in the scanned buffer.
    pub start: usize,
    /// The matched text.
    pub raw: &'a str,
}

impl Lexeme<'_> {
    /// Byte offset just past the match.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.raw.len()
    }
}
