//! Fetch error kinds.

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Why a page could not be fetched.
///
/// The `Display` text of every variant is suitable for showing to chat users.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL is not `http://` or `https://`.
    #[error("not an http url: {0}")]
    UnsupportedScheme(String),

    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS failure, refused connection, TLS failure and similar.
    #[error("connection failed: {0}")]
    Connect(#[source] reqwest::Error),

    /// The request or the body read took longer than the configured timeout.
    #[error("timed out")]
    Timeout,

    /// Any other request failure, such as a redirect loop.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    /// The response is not (X)HTML.
    #[error("not (X)HTML: {0}")]
    NotHtml(String),

    /// The body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] io::Error),
}

impl FetchError {
    /// Classify a `reqwest` failure into a connection, timeout or generic
    /// request error.
    #[must_use]
    pub fn from_request(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect(error)
        } else {
            Self::Request(error)
        }
    }

    /// Classify a failed body read.
    ///
    /// The blocking body reader reports a timeout as an `Other` I/O error
    /// wrapping a `reqwest::Error`, so the whole source chain is checked.
    #[must_use]
    pub fn from_body(error: io::Error) -> Self {
        if is_timed_out(&error) {
            Self::Timeout
        } else {
            Self::Body(error)
        }
    }
}

/// Whether `error`, its payload, or anything in the payload's source chain
/// is a timeout.
fn is_timed_out(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::TimedOut {
        return true;
    }
    // `io::Error::source` skips the payload itself, so start from `get_ref`.
    let mut current = error
        .get_ref()
        .map(|payload| payload as &(dyn StdError + 'static));
    while let Some(err) = current {
        if let Some(io_error) = err.downcast_ref::<io::Error>() {
            return is_timed_out(io_error);
        }
        if err
            .downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_timeout)
        {
            return true;
        }
        current = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_timeouts_are_timeouts() {
        let error = io::Error::new(io::ErrorKind::TimedOut, "slow");
        assert!(matches!(FetchError::from_body(error), FetchError::Timeout));

        let inner = io::Error::new(io::ErrorKind::TimedOut, "slow");
        let error = io::Error::other(inner);
        assert!(matches!(FetchError::from_body(error), FetchError::Timeout));

        let error = io::Error::new(io::ErrorKind::ConnectionReset, "reset");
        assert!(matches!(FetchError::from_body(error), FetchError::Body(_)));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FetchError::Timeout.to_string(), "timed out");
        assert_eq!(
            FetchError::Status(reqwest::StatusCode::NOT_FOUND).to_string(),
            "HTTP error: 404 Not Found"
        );
        assert_eq!(
            FetchError::NotHtml("image/png".to_owned()).to_string(),
            "not (X)HTML: image/png"
        );
    }
}
