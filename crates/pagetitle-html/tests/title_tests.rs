//! Integration tests for title extraction, fragment rendering and truncation.

use pagetitle_html::{extract_title, parse_title, render_fragment};

const REPLACEMENT: &str = "\u{FFFD}";

#[test]
fn test_no_title() {
    assert_eq!(extract_title(""), "");
    assert_eq!(extract_title("<html><body>Hello</body></html>"), "");
    assert_eq!(extract_title("Title: not a tag"), "");
}

#[test]
fn test_simple_title() {
    assert_eq!(
        extract_title("<!DOCTYPE html><html><head><title>Example Domain</title></head>"),
        "Example Domain"
    );
}

#[test]
fn test_unterminated_title() {
    assert_eq!(extract_title("<title>Hello"), "Hello");
    assert_eq!(extract_title("<title>"), "");
}

#[test]
fn test_named_entity() {
    assert_eq!(
        extract_title("<title>Hello &amp; World</title>"),
        "Hello & World"
    );
    assert_eq!(extract_title("<title>&lt;tag&gt;</title>"), "<tag>");
}

#[test]
fn test_numeric_entities() {
    let title = extract_title("<title>Price: &#36;5 &#x2013; today</title>");
    assert_eq!(title, "Price: $5 \u{2013} today");
    assert_eq!(title.chars().nth(7), Some('$'));
    assert_eq!(title.chars().nth(10), Some('\u{2013}'));
    assert_eq!(extract_title("<title>&#X41;&#x62;</title>"), "Ab");
}

#[test]
fn test_unresolvable_entities_become_replacement_character() {
    assert_eq!(extract_title("<title>&zz;</title>"), REPLACEMENT);
    assert_eq!(extract_title("<title>&#xD800;</title>"), REPLACEMENT);
    assert_eq!(extract_title("<title>&#1114112;</title>"), REPLACEMENT);
    assert_eq!(
        extract_title("<title>&#99999999999999999999;</title>"),
        REPLACEMENT
    );
}

#[test]
fn test_malformed_numeric_entity_is_kept_literally() {
    // `&#zz;` matches no entity rule, so its characters pass through.
    assert_eq!(extract_title("<title>a &#zz; b</title>"), "a &#zz; b");
}

#[test]
fn test_style_tags() {
    assert_eq!(
        extract_title("<title>A <b>bold</b> word</title>"),
        "A \x02bold\x02 word"
    );
    assert_eq!(
        extract_title("<title><I>x</I><u>y</u><s>z</s></title>"),
        "\x1Dx\x1D\x1Fy\x1F\x1Ez\x1E"
    );
}

#[test]
fn test_style_tags_are_not_paired() {
    assert_eq!(extract_title("<title><b>a<b>b</title>"), "\x02a\x02b");
    assert_eq!(extract_title("<title>a</b></title>"), "a\x02");
}

#[test]
fn test_other_tags_are_dropped() {
    assert_eq!(
        extract_title("<title>a<span class=\"x\">b</span><!-- c -->d<br/></title>"),
        "abd"
    );
    assert_eq!(extract_title("<title><strong>x</strong></title>"), "x");
}

#[test]
fn test_second_title_tag_terminates() {
    assert_eq!(extract_title("<title>One<title>Two</title>"), "One");
    assert_eq!(
        extract_title("<svg><title>Icon</title></svg><title>Page</title>"),
        "Icon"
    );
}

#[test]
fn test_whitespace_runs_collapse_to_one_space() {
    assert_eq!(
        extract_title("<title>\n    Hello\t\t World  \n</title>"),
        " Hello World "
    );
}

#[test]
fn test_stray_characters_pass_through() {
    assert_eq!(
        extract_title("<title>Bob's \"Place\" > 3 & more</title>"),
        "Bob's \"Place\" > 3 & more"
    );
    assert_eq!(extract_title("<title>Hello <b"), "Hello <b");
}

#[test]
fn test_stray_less_than_swallows_up_to_next_bracket() {
    // `< 2</title>` scans as one generic tag named "2", so the title never
    // closes and ends at the stray bracket.
    assert_eq!(extract_title("<title>1 < 2</title>"), "1 ");
}

#[test]
fn test_case_insensitive_title_tags() {
    assert_eq!(extract_title("<TITLE lang=\"en\">X</Title >"), "X");
    assert_eq!(extract_title("<title>X</ title>"), "X");
}

#[test]
fn test_truncation() {
    assert_eq!(parse_title("<title>Hello World</title>", Some(5)), "Hello...");
    assert_eq!(parse_title("<title>Hello World</title>", None), "Hello World");
}

#[test]
fn test_no_ellipsis_within_limit() {
    assert_eq!(parse_title("<title>Hello</title>", Some(5)), "Hello");
    assert_eq!(parse_title("<title>Hi</title>", Some(350)), "Hi");
    assert_eq!(parse_title("no title here", Some(5)), "");
}

#[test]
fn test_truncation_counts_decoded_characters() {
    assert_eq!(
        parse_title("<title>&eacute;&eacute;&eacute;&eacute;</title>", Some(2)),
        "éé..."
    );
}

#[test]
fn test_idempotence() {
    let once = extract_title("<title>Rust &ndash; <b>fast</b>, <i>safe</i></title>");
    assert_eq!(once, "Rust \u{2013} \x02fast\x02, \x1Dsafe\x1D");
    let twice = extract_title(&format!("<title>{once}</title>"));
    assert_eq!(twice, once);
}

#[test]
fn test_fragment_rendering() {
    assert_eq!(
        render_fragment("<p>Fish &amp;\n<b>Chips</b></p>"),
        "Fish & \x02Chips\x02"
    );
    assert_eq!(render_fragment("<title>a</title> b"), "a b");
    assert_eq!(render_fragment("plain words here"), "plain words here");
}
