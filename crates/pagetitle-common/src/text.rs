//! Byte-to-text decoding for fetched documents.

/// Decode `bytes` as UTF-8, dropping every invalid or truncated sequence.
///
/// Unlike [`String::from_utf8_lossy`] nothing is substituted, so a multibyte
/// character cut off by a read limit simply disappears.
#[must_use]
pub fn decode_utf8_ignoring_errors(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// The `charset` parameter of a `Content-Type` value, lower-cased.
#[must_use]
pub fn charset_of(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_ascii_lowercase())
    })
}

/// Whether a `Content-Type` value describes an HTML or XHTML document.
#[must_use]
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sequences_are_dropped() {
        assert_eq!(decode_utf8_ignoring_errors(b"ab\xFFcd"), "abcd");
        assert_eq!(decode_utf8_ignoring_errors(b"caf\xC3"), "caf");
        assert_eq!(decode_utf8_ignoring_errors("café".as_bytes()), "café");
        assert_eq!(decode_utf8_ignoring_errors(b""), "");
    }

    #[test]
    fn charset_parameter_is_found() {
        assert_eq!(
            charset_of("text/html; charset=UTF-8").as_deref(),
            Some("utf-8")
        );
        assert_eq!(
            charset_of("text/html;Charset=\"ISO-8859-1\"").as_deref(),
            Some("iso-8859-1")
        );
        assert_eq!(charset_of("text/html"), None);
    }

    #[test]
    fn html_content_types() {
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("application/xhtml+xml"));
        assert!(is_html_content_type("Text/HTML"));
        assert!(!is_html_content_type("image/png"));
        assert!(!is_html_content_type(""));
    }
}
