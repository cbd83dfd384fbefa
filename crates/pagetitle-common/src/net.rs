//! HTTP fetch for the title plugin.
//!
//! Provides a bounded, blocking GET that only accepts (X)HTML responses and
//! hands back at most a fixed number of bytes decoded as text. Title
//! extraction only needs the head of a document, so the rest of the body is
//! never read.

use std::io::Read;
use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::text::{charset_of, decode_utf8_ignoring_errors, is_html_content_type};
use crate::warning::warn_once;

/// User-Agent header sent with all requests.
const USER_AGENT: &str = concat!("pagetitle/", env!("CARGO_PKG_VERSION"));

/// Accept header sent with all requests.
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Accept-Language header sent with all requests.
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.5";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on the number of body bytes read: ten 4 KiB chunks.
pub const DEFAULT_MAX_BYTES: usize = 10 * 4096;

/// Limits applied to a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Timeout for the whole request, body included.
    pub timeout: Duration,
    /// Maximum number of body bytes read.
    pub max_bytes: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// The head of a fetched HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// The URL after redirects.
    pub final_url: String,
    /// The response `Content-Type`.
    pub content_type: String,
    /// At most `max_bytes` of the body, decoded as UTF-8 with invalid
    /// sequences dropped.
    pub body: String,
}

/// Reject anything that is not an `http://` or `https://` URL.
///
/// # Errors
///
/// Returns [`FetchError::UnsupportedScheme`] for any other URL.
pub fn check_scheme(url: &str) -> Result<(), FetchError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(FetchError::UnsupportedScheme(url.to_owned()))
    }
}

/// Fetch the head of an HTML document.
///
/// # Errors
///
/// Returns an error if the URL scheme is not http(s), the HTTP client cannot
/// be created, the request fails or times out, the response has a
/// non-success status, the content is not (X)HTML, or the body cannot be read.
pub fn fetch_page(url: &str, options: &FetchOptions) -> Result<FetchedPage, FetchError> {
    check_scheme(url)?;

    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(FetchError::Client)?;

    debug!(url, timeout = ?options.timeout, "fetching page");
    let response = client
        .get(url)
        .header(USER_AGENT_HEADER, USER_AGENT)
        .header(ACCEPT, ACCEPT_HTML)
        .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE)
        .send()
        .map_err(FetchError::from_request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    if !is_html_content_type(&content_type) {
        return Err(FetchError::NotHtml(content_type));
    }
    if let Some(charset) = charset_of(&content_type).filter(|c| c != "utf-8" && c != "utf8") {
        let _ = warn_once("net", &format!("charset {charset} is decoded as UTF-8"));
    }

    let final_url = response.url().to_string();
    let bytes = read_bounded(response, options.max_bytes)?;
    if bytes.len() == options.max_bytes {
        debug!(url = %final_url, max_bytes = options.max_bytes, "body cut at byte limit");
    }
    info!(url = %final_url, bytes = bytes.len(), "fetched page");

    Ok(FetchedPage {
        final_url,
        content_type,
        body: decode_utf8_ignoring_errors(&bytes),
    })
}

/// Read at most `max_bytes` from `reader`.
///
/// # Errors
///
/// Returns [`FetchError::Timeout`] or [`FetchError::Body`] if reading fails.
pub fn read_bounded(reader: impl Read, max_bytes: usize) -> Result<Vec<u8>, FetchError> {
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX);
    let mut bytes = Vec::with_capacity(max_bytes.min(DEFAULT_MAX_BYTES));
    let _ = reader
        .take(limit)
        .read_to_end(&mut bytes)
        .map_err(FetchError::from_body)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_http_urls_are_fetched() {
        assert!(check_scheme("http://example.com").is_ok());
        assert!(check_scheme("https://example.com/a?b").is_ok());
        assert!(matches!(
            check_scheme("ftp://example.com"),
            Err(FetchError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            fetch_page("file:///etc/passwd", &FetchOptions::default()),
            Err(FetchError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn reads_stop_at_the_byte_limit() {
        let body: &[u8] = b"<title>long document</title>";
        assert_eq!(read_bounded(body, 7).unwrap(), b"<title>");
        assert_eq!(read_bounded(body, 1000).unwrap(), body);
        assert!(read_bounded(body, 0).unwrap().is_empty());
    }
}
