//! `--tokens` output: the lexeme stream of a document, for debugging the
//! scanner against real pages.

use owo_colors::OwoColorize;
use pagetitle_html::{Lexeme, TokenKind};

/// Render one lexeme per line as `offset kind raw`.
#[must_use]
pub fn render_listing(lexemes: &[Lexeme<'_>], color: bool) -> String {
    let mut listing = String::new();
    for lexeme in lexemes {
        let kind = lexeme.token.kind();
        let label = match lexeme.token.tag_name() {
            Some(tag_name) => format!("{kind}<{tag_name}>"),
            None => kind.to_string(),
        };
        let label = if color { paint(kind, &label) } else { label };
        listing.push_str(&format!("{:>6} {label} {:?}\n", lexeme.start, lexeme.raw));
    }
    listing
}

/// Render the lexemes as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(lexemes: &[Lexeme<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lexemes)
}

fn paint(kind: TokenKind, label: &str) -> String {
    match kind {
        TokenKind::TitleTag => label.green().bold().to_string(),
        TokenKind::OtherTag => label.cyan().to_string(),
        TokenKind::DecimalEntity | TokenKind::HexEntity | TokenKind::NamedEntity => {
            label.yellow().to_string()
        }
        TokenKind::Invalid => label.red().to_string(),
        TokenKind::Whitespace | TokenKind::Word => label.dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagetitle_html::TitleTokenizer;

    #[test]
    fn plain_listing() {
        let lexemes = TitleTokenizer::new("<title>a &amp;<b>").into_lexemes();
        assert_eq!(
            render_listing(&lexemes, false),
            concat!(
                "     0 TitleTag \"<title>\"\n",
                "     7 Word \"a\"\n",
                "     8 Whitespace \" \"\n",
                "     9 NamedEntity \"&amp;\"\n",
                "    14 OtherTag<b> \"<b>\"\n",
            )
        );
    }

    #[test]
    fn colored_listing_keeps_the_text() {
        let lexemes = TitleTokenizer::new("<title>").into_lexemes();
        let listing = render_listing(&lexemes, true);
        assert!(listing.contains("TitleTag"));
        assert!(listing.contains('\x1b'));
    }

    #[test]
    fn json_listing() {
        let lexemes = TitleTokenizer::new("&#36;").into_lexemes();
        let json: serde_json::Value = serde_json::from_str(&render_json(&lexemes).unwrap()).unwrap();
        assert_eq!(json[0]["kind"], "DecimalEntity");
        assert_eq!(json[0]["value"], "36");
        assert_eq!(json[0]["raw"], "&#36;");
    }
}
