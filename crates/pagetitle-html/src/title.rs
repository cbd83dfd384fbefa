//! Title region reducer.
//!
//! Walks a token stream, finds the region between the first title tag and
//! the next one, and renders it to text:
//!
//! ```text
//!   Before --TitleTag--> Inside --TitleTag--> Done
//! ```
//!
//! Inside the region, entities are decoded, whitespace runs become a single
//! space, `<b> <i> <u> <s>` become IRC control codes and every other tag is
//! dropped. Opening and closing style tags are not paired; each occurrence
//! emits its code.

use strum_macros::Display;

use crate::style::StyleTag;
use crate::tokenizer::{Token, TitleTokenizer, decode_entity};

/// Where the reducer is relative to the title region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TitleState {
    /// No title tag seen yet; tokens are discarded.
    Before,
    /// Inside the title region; tokens are rendered.
    Inside,
    /// A second title tag was seen; the scan is over.
    Done,
}

/// How title tags are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ReduceMode {
    /// Render only the title region.
    #[default]
    Title,
    /// Render the whole input; title tags are dropped like other tags.
    Fragment,
}

/// Builds the rendered text one token at a time.
///
/// A reducer is scoped to a single extraction and is consumed by
/// [`TitleReducer::finish`].
#[derive(Debug, Clone)]
pub struct TitleReducer {
    mode: ReduceMode,
    state: TitleState,
    accumulator: String,
}

impl Default for TitleReducer {
    fn default() -> Self {
        Self::new(ReduceMode::Title)
    }
}

impl TitleReducer {
    /// Create a reducer. Fragment mode starts inside the region.
    #[must_use]
    pub const fn new(mode: ReduceMode) -> Self {
        let state = match mode {
            ReduceMode::Title => TitleState::Before,
            ReduceMode::Fragment => TitleState::Inside,
        };
        Self {
            mode,
            state,
            accumulator: String::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TitleState {
        self.state
    }

    /// Text rendered so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.accumulator
    }

    /// Feed one token and return the resulting state.
    ///
    /// Tokens fed after [`TitleState::Done`] are ignored.
    pub fn feed(&mut self, token: &Token<'_>) -> TitleState {
        match (self.state, token) {
            (TitleState::Before, Token::TitleTag(_)) => self.state = TitleState::Inside,
            (TitleState::Before | TitleState::Done, _) => {}
            (TitleState::Inside, Token::TitleTag(_)) => {
                if self.mode == ReduceMode::Title {
                    self.state = TitleState::Done;
                }
            }
            (TitleState::Inside, Token::OtherTag { tag_name, .. }) => {
                if let Some(style) = StyleTag::from_tag_name(tag_name) {
                    self.accumulator.push(style.control_code());
                }
            }
            (TitleState::Inside, Token::Whitespace(_)) => self.accumulator.push(' '),
            (TitleState::Inside, Token::Word(text) | Token::Invalid(text)) => {
                self.accumulator.push_str(text);
            }
            (
                TitleState::Inside,
                Token::DecimalEntity(_) | Token::HexEntity(_) | Token::NamedEntity(_),
            ) => {
                if let Some(decoded) = decode_entity(token) {
                    self.accumulator.push_str(&decoded);
                }
            }
        }
        self.state
    }

    /// Feed tokens until the stream ends or the region is closed, then
    /// return the rendered text.
    #[must_use]
    pub fn run<'a, I>(mut self, tokens: I) -> String
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        for token in tokens {
            if self.feed(&token) == TitleState::Done {
                break;
            }
        }
        self.finish()
    }

    /// Consume the reducer and return the rendered text.
    ///
    /// An unterminated region yields what was rendered so far, and a stream
    /// with no title tag yields an empty string.
    #[must_use]
    pub fn finish(self) -> String {
        self.accumulator
    }
}

/// Extract the title region of `html`, without truncation.
#[must_use]
pub fn extract_title(html: &str) -> String {
    TitleReducer::new(ReduceMode::Title)
        .run(TitleTokenizer::new(html).map(|lexeme| lexeme.token))
}

/// Render an entire HTML fragment to IRC-styled text.
#[must_use]
pub fn render_fragment(html: &str) -> String {
    TitleReducer::new(ReduceMode::Fragment)
        .run(TitleTokenizer::new(html).map(|lexeme| lexeme.token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_after_done_are_ignored() {
        let mut reducer = TitleReducer::default();
        assert_eq!(reducer.feed(&Token::TitleTag("<title>")), TitleState::Inside);
        assert_eq!(reducer.feed(&Token::Word("a")), TitleState::Inside);
        assert_eq!(reducer.feed(&Token::TitleTag("</title>")), TitleState::Done);
        assert_eq!(reducer.feed(&Token::Word("b")), TitleState::Done);
        assert_eq!(reducer.finish(), "a");
    }

    #[test]
    fn before_state_discards_everything() {
        let mut reducer = TitleReducer::default();
        let _ = reducer.feed(&Token::Word("ignored"));
        let _ = reducer.feed(&Token::NamedEntity("amp;"));
        assert_eq!(reducer.state(), TitleState::Before);
        assert_eq!(reducer.text(), "");
    }

    #[test]
    fn fragment_mode_never_finishes() {
        let mut reducer = TitleReducer::new(ReduceMode::Fragment);
        assert_eq!(reducer.feed(&Token::TitleTag("<title>")), TitleState::Inside);
        assert_eq!(reducer.feed(&Token::Word("x")), TitleState::Inside);
        assert_eq!(reducer.feed(&Token::TitleTag("</title>")), TitleState::Inside);
        assert_eq!(reducer.finish(), "x");
    }
}
