//! Ordered-alternative scanner over raw HTML text.
//!
//! At each position the rules below are tried in order and the first one that
//! matches consumes its text:
//!
//! 1. whitespace
//! 2. `<title ...>` / `</title>`
//! 3. word
//! 4. `&#NNN;`
//! 5. `&#xHHH;`
//! 6. `&name;`
//! 7. any other `<tag ...>`
//! 8. a single invalid character
//!
//! Rule 8 always matches, so the scanner never stalls and never skips input.

use super::token::{Lexeme, Token};

/// Lazily scans a buffer into [`Lexeme`]s.
///
/// The scanner is an [`Iterator`]; it borrows the buffer and performs no
/// allocation of its own.
#[derive(Debug, Clone)]
pub struct TitleTokenizer<'a> {
    /// The text being scanned
    input: &'a str,
    /// Byte offset of the next unscanned character
    position: usize,
}

impl<'a> TitleTokenizer<'a> {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Scan the whole buffer and collect the lexemes.
    #[must_use]
    pub fn into_lexemes(self) -> Vec<Lexeme<'a>> {
        self.collect()
    }

    /// Scan the whole buffer and collect only the tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.map(|lexeme| lexeme.token).collect()
    }
}

impl<'a> Iterator for TitleTokenizer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        let rest = &input[self.position..];
        let first = rest.chars().next()?;

        let (len, token) = match_whitespace(rest)
            .or_else(|| match_title_tag(rest))
            .or_else(|| match_word(rest))
            .or_else(|| match_decimal_entity(rest))
            .or_else(|| match_hex_entity(rest))
            .or_else(|| match_named_entity(rest))
            .or_else(|| match_other_tag(rest))
            .unwrap_or_else(|| {
                let len = first.len_utf8();
                (len, Token::Invalid(&rest[..len]))
            });

        let lexeme = Lexeme {
            token,
            start: self.position,
            raw: &rest[..len],
        };
        self.position += len;
        Some(lexeme)
    }
}

/// Scan `input` into a vector of tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    TitleTokenizer::new(input).into_tokens()
}

/// A successful rule match: consumed byte length and the token produced.
type Match<'a> = (usize, Token<'a>);

/// Whitespace for scanning purposes.
fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Word characters as used by entity names and tag names.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the longest prefix of `s` whose characters satisfy `pred`.
fn span_while(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Skip the `<`, the optional `/` and any whitespace that open every tag.
///
/// Returns the text after that prefix.
fn strip_tag_open(s: &str) -> Option<&str> {
    let after_lt = s.strip_prefix('<')?;
    let after_slash = after_lt.strip_prefix('/').unwrap_or(after_lt);
    Some(&after_slash[span_while(after_slash, is_whitespace)..])
}

/// Byte length of a tag that continues with `tail` once everything up to
/// and including the first `>` is consumed.
fn close_tag(s: &str, tail: &str) -> Option<usize> {
    let gt = tail.find('>')?;
    Some(s.len() - tail.len() + gt + 1)
}

fn match_whitespace(s: &str) -> Option<Match<'_>> {
    let len = span_while(s, is_whitespace);
    (len > 0).then(|| (len, Token::Whitespace(&s[..len])))
}

fn match_title_tag(s: &str) -> Option<Match<'_>> {
    let after_open = strip_tag_open(s)?;
    let name = after_open.get(..5)?;
    if !name.eq_ignore_ascii_case("title") {
        return None;
    }
    let len = close_tag(s, &after_open[5..])?;
    Some((len, Token::TitleTag(&s[..len])))
}

fn match_word(s: &str) -> Option<Match<'_>> {
    let len = span_while(s, |c| {
        !matches!(c, '<' | '>' | '&' | '"' | '\'') && !is_whitespace(c)
    });
    (len > 0).then(|| (len, Token::Word(&s[..len])))
}

fn match_decimal_entity(s: &str) -> Option<Match<'_>> {
    let body = s.strip_prefix("&#")?;
    let digits = span_while(body, |c| c.is_ascii_digit());
    if digits == 0 || !body[digits..].starts_with(';') {
        return None;
    }
    Some((2 + digits + 1, Token::DecimalEntity(&body[..digits])))
}

fn match_hex_entity(s: &str) -> Option<Match<'_>> {
    let body = s
        .strip_prefix("&#x")
        .or_else(|| s.strip_prefix("&#X"))?;
    let digits = span_while(body, |c| c.is_ascii_hexdigit());
    if digits == 0 || !body[digits..].starts_with(';') {
        return None;
    }
    Some((3 + digits + 1, Token::HexEntity(&body[..digits])))
}

fn match_named_entity(s: &str) -> Option<Match<'_>> {
    let body = s.strip_prefix('&')?;
    let name = span_while(body, is_word_char);
    if name == 0 || !body[name..].starts_with(';') {
        return None;
    }
    // Payload keeps the `;`.
    Some((1 + name + 1, Token::NamedEntity(&body[..=name])))
}

fn match_other_tag(s: &str) -> Option<Match<'_>> {
    let after_open = strip_tag_open(s)?;
    let name_len = span_while(after_open, |c| is_word_char(c) || c == '!');
    if name_len == 0 {
        return None;
    }
    let len = close_tag(s, &after_open[name_len..])?;
    Some((
        len,
        Token::OtherTag {
            text: &s[..len],
            tag_name: &after_open[..name_len],
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_tried_in_priority_order() {
        // `<title` must win over the generic tag rule.
        assert_eq!(
            match_title_tag("<TITLE lang=en>x"),
            Some((15, Token::TitleTag("<TITLE lang=en>")))
        );
        assert_eq!(
            tokenize("<title lang=en>"),
            vec![Token::TitleTag("<title lang=en>")]
        );
    }

    #[test]
    fn tag_without_closing_bracket_is_not_a_tag() {
        assert_eq!(match_other_tag("<b"), None);
        assert_eq!(match_title_tag("</title"), None);
        assert_eq!(
            tokenize("<b"),
            vec![Token::Invalid("<"), Token::Word("b")]
        );
    }

    #[test]
    fn span_while_respects_multibyte_characters() {
        assert_eq!(span_while("ééa", |c| c == 'é'), 4);
        assert_eq!(span_while("", char::is_alphanumeric), 0);
    }

    #[test]
    fn title_name_check_does_not_split_characters() {
        // Fewer than five bytes, or a boundary inside a multibyte character.
        assert_eq!(match_title_tag("<tit"), None);
        assert_eq!(match_title_tag("<titlé>"), None);
        assert_eq!(match_title_tag("<ééé>"), None);
    }
}
