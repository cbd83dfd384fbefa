//! Character-limit truncation of rendered titles.

/// Appended when a title is cut.
pub const ELLIPSIS: &str = "...";

/// Bound `text` to `limit` characters.
///
/// `None` leaves the text untouched. With `Some(limit)`, text longer than
/// `limit` Unicode scalar values is cut to its first `limit` characters and
/// [`ELLIPSIS`] is appended; shorter text is returned unchanged.
///
/// # Example
/// ```
/// use pagetitle_html::truncate::truncate;
///
/// assert_eq!(truncate("Hello World", Some(5)), "Hello...");
/// assert_eq!(truncate("Hello", Some(5)), "Hello");
/// assert_eq!(truncate("Hello World", None), "Hello World");
/// ```
#[must_use]
pub fn truncate(text: &str, limit: Option<usize>) -> String {
    let Some(limit) = limit else {
        return text.to_owned();
    };
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Convert a signed limit where any negative value means "unlimited".
///
/// Plugin hosts pass `-1` for no limit.
#[must_use]
pub fn limit_from_signed(limit: i64) -> Option<usize> {
    usize::try_from(limit).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", Some(3)), "ééé...");
        assert_eq!(truncate("日本語", Some(3)), "日本語");
    }

    #[test]
    fn zero_limit_keeps_only_the_ellipsis() {
        assert_eq!(truncate("abc", Some(0)), "...");
        assert_eq!(truncate("", Some(0)), "");
    }

    #[test]
    fn negative_limits_mean_unlimited() {
        assert_eq!(limit_from_signed(-1), None);
        assert_eq!(limit_from_signed(0), Some(0));
        assert_eq!(limit_from_signed(350), Some(350));
    }
}
