//! Bot host output protocol.
//!
//! The host reads the plugin's stdout line by line. Lines starting with `:r `
//! are sent to the channel as replies, lines starting with one of the
//! `:log*` commands go to the host's log. Everything sent is a single line.

use std::io::{self, Write};

use strum_macros::Display;

/// Log commands understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogLevel {
    /// `:logd`
    #[strum(serialize = ":logd")]
    Debug,
    /// `:logi`
    #[strum(serialize = ":logi")]
    Info,
    /// `:logw`
    #[strum(serialize = ":logw")]
    Warning,
    /// `:loge`
    #[strum(serialize = ":loge")]
    Error,
}

/// Writes protocol lines for one plugin component.
pub struct HostOutput<W: Write> {
    out: W,
    component: &'static str,
}

impl<W: Write> HostOutput<W> {
    /// Create a writer that tags log lines with `component`.
    pub const fn new(out: W, component: &'static str) -> Self {
        Self { out, component }
    }

    /// Emit a host log line.
    pub fn log(&mut self, level: LogLevel, message: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{level} {}: {}",
            self.component,
            single_line(message)
        )
    }

    /// Emit a reply line.
    pub fn reply(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, ":r {}", single_line(text))
    }

    /// Recover the underlying writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Replace line breaks so `text` cannot spill into a second protocol line.
///
/// NUL is dropped as well; IRC cannot carry it.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('\0', "")
}

/// The reply text announcing a page title.
///
/// Pages without a usable title are announced by URL instead.
#[must_use]
pub fn title_reply(title: &str, final_url: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        format!("↑ Title :: Untitled - {final_url}")
    } else {
        format!("↑ Title :: {title}")
    }
}

/// The reply text for a failed fetch.
#[must_use]
pub fn error_reply(error: &dyn std::error::Error, url: &str) -> String {
    format!("{error} - ({url})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut HostOutput<Vec<u8>>) -> io::Result<()>) -> String {
        let mut host = HostOutput::new(Vec::new(), "pagetitle");
        f(&mut host).unwrap();
        String::from_utf8(host.into_inner()).unwrap()
    }

    #[test]
    fn log_lines_carry_level_and_component() {
        assert_eq!(
            written(|h| h.log(LogLevel::Error, "bad url")),
            ":loge pagetitle: bad url\n"
        );
        assert_eq!(
            written(|h| h.log(LogLevel::Debug, "x")),
            ":logd pagetitle: x\n"
        );
    }

    #[test]
    fn replies_are_single_lines() {
        assert_eq!(written(|h| h.reply("a\r\nb\nc\rd")), ":r a b c d\n");
    }

    #[test]
    fn nul_never_reaches_the_host() {
        let title = pagetitle_html::extract_title("<title>a&#0;b&#10;c</title>");
        assert_eq!(title, "a\0b\nc");
        assert_eq!(
            written(|h| h.reply(&title_reply(&title, "https://example.com/"))),
            ":r ↑ Title :: ab c\n"
        );
    }

    #[test]
    fn title_replies() {
        assert_eq!(
            title_reply(" Example \x02Domain\x02 ", "https://example.com/"),
            "↑ Title :: Example \x02Domain\x02"
        );
        assert_eq!(
            title_reply("", "https://example.com/"),
            "↑ Title :: Untitled - https://example.com/"
        );
        assert_eq!(
            title_reply("   ", "https://example.com/"),
            "↑ Title :: Untitled - https://example.com/"
        );
    }

    #[test]
    fn error_replies_name_the_url() {
        let error = io::Error::other("timed out");
        assert_eq!(
            error_reply(&error, "https://slow.example"),
            "timed out - (https://slow.example)"
        );
    }
}
