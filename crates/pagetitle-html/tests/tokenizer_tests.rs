//! Integration tests for the title tokenizer.

use pagetitle_html::{Lexeme, TitleTokenizer, Token, TokenKind, tokenize};

/// Helper to scan a string and return the lexemes
fn lex(input: &str) -> Vec<Lexeme<'_>> {
    TitleTokenizer::new(input).into_lexemes()
}

/// Concatenate every matched span
fn reassemble(lexemes: &[Lexeme<'_>]) -> String {
    lexemes.iter().map(|lexeme| lexeme.raw).collect()
}

#[test]
fn test_title_tags() {
    assert_eq!(
        tokenize("<title>Hi</title>"),
        vec![
            Token::TitleTag("<title>"),
            Token::Word("Hi"),
            Token::TitleTag("</title>"),
        ]
    );
}

#[test]
fn test_title_tag_variants() {
    for tag in ["<TITLE>", "<Title data-x=\"1\">", "</ title >", "< title>", "</TiTlE>"] {
        assert_eq!(tokenize(tag), vec![Token::TitleTag(tag)], "{tag}");
    }
}

#[test]
fn test_title_prefix_counts_as_title_tag() {
    // Anything after the word "title" up to `>` belongs to the tag.
    assert_eq!(tokenize("<titlebar>"), vec![Token::TitleTag("<titlebar>")]);
}

#[test]
fn test_whitespace_is_kept_verbatim() {
    assert_eq!(
        tokenize("a \n\t b"),
        vec![Token::Word("a"), Token::Whitespace(" \n\t "), Token::Word("b")]
    );
}

#[test]
fn test_words_stop_at_special_characters() {
    assert_eq!(
        tokenize("Bob's \"x\""),
        vec![
            Token::Word("Bob"),
            Token::Invalid("'"),
            Token::Word("s"),
            Token::Whitespace(" "),
            Token::Invalid("\""),
            Token::Word("x"),
            Token::Invalid("\""),
        ]
    );
}

#[test]
fn test_entities() {
    assert_eq!(
        tokenize("&#36;&#x24;&#X24;&amp;"),
        vec![
            Token::DecimalEntity("36"),
            Token::HexEntity("24"),
            Token::HexEntity("24"),
            Token::NamedEntity("amp;"),
        ]
    );
}

#[test]
fn test_malformed_numeric_entity_is_split() {
    assert_eq!(
        tokenize("&#zz;"),
        vec![Token::Invalid("&"), Token::Word("#zz;")]
    );
}

#[test]
fn test_entity_without_semicolon_is_not_an_entity() {
    assert_eq!(
        tokenize("&amp &#38"),
        vec![
            Token::Invalid("&"),
            Token::Word("amp"),
            Token::Whitespace(" "),
            Token::Invalid("&"),
            Token::Word("#38"),
        ]
    );
}

#[test]
fn test_other_tags_capture_tag_name() {
    let tokens = tokenize("<a href=\"/x\">");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind(), TokenKind::OtherTag);
    assert_eq!(tokens[0].tag_name(), Some("a"));
    assert_eq!(tokens[0].text(), "<a href=\"/x\">");

    assert_eq!(tokenize("</ B >")[0].tag_name(), Some("B"));
    assert_eq!(tokenize("<br/>")[0].tag_name(), Some("br"));
    assert_eq!(tokenize("<!DOCTYPE html>")[0].tag_name(), Some("!DOCTYPE"));
    assert_eq!(tokenize("<!-- note -->")[0].tag_name(), Some("!"));
}

#[test]
fn test_stray_brackets_are_invalid() {
    assert_eq!(
        tokenize("< > <"),
        vec![
            Token::Invalid("<"),
            Token::Whitespace(" "),
            Token::Invalid(">"),
            Token::Whitespace(" "),
            Token::Invalid("<"),
        ]
    );
}

#[test]
fn test_unclosed_tag_falls_back() {
    assert_eq!(
        tokenize("<title"),
        vec![Token::Invalid("<"), Token::Word("title")]
    );
}

#[test]
fn test_lexeme_offsets_are_contiguous() {
    let lexemes = lex("<b>é &amp; x</b>");
    let mut expected_start = 0;
    for lexeme in &lexemes {
        assert_eq!(lexeme.start, expected_start);
        assert!(!lexeme.raw.is_empty());
        expected_start = lexeme.end();
    }
    assert_eq!(expected_start, "<b>é &amp; x</b>".len());
}

#[test]
fn test_spans_reconstruct_input() {
    let inputs = [
        "",
        "plain",
        "<title>Hello &amp; World</title>",
        "<<>>&&;;&#;&#x;&#xZZ;&;\"'",
        "<title>unterminated <b",
        "  \r\n\t<TITLE\n lang=en>\u{3000}日本語&nbsp;</title ",
        "<!doctype html><meta charset=utf-8><title>x</title><body>",
        "&#99999999999999999999999; &#xD800; &NotARealEntity;",
    ];
    for input in inputs {
        assert_eq!(reassemble(&lex(input)), input, "{input:?}");
    }
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::TitleTag.to_string(), "TitleTag");
    assert_eq!(Token::Word("hi").to_string(), "Word(\"hi\")");
    assert_eq!(
        Token::OtherTag {
            text: "<b>",
            tag_name: "b"
        }
        .to_string(),
        "OtherTag(b)"
    );
}

#[test]
fn test_lexeme_serializes_to_json() {
    let lexemes = lex("<b>hi");
    let json = serde_json::to_value(lexemes).unwrap();
    assert_eq!(json[0]["kind"], "OtherTag");
    assert_eq!(json[0]["value"]["tag_name"], "b");
    assert_eq!(json[0]["raw"], "<b>");
    assert_eq!(json[1]["kind"], "Word");
    assert_eq!(json[1]["value"], "hi");
    assert_eq!(json[1]["start"], 3);
}
