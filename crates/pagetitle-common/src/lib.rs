//! Common utilities for the pagetitle plugin.
//!
//! This crate provides the I/O that surrounds title extraction:
//! - **Fetch** - bounded blocking HTTP GET of HTML documents
//! - **Text** - UTF-8 decoding that drops invalid sequences
//! - **Errors** - distinct, user-facing fetch failure kinds
//! - **Logging** - `tracing` setup and deduplicated warnings

pub mod error;
pub mod logging;
pub mod net;
pub mod text;
pub mod warning;

pub use error::FetchError;
pub use net::{FetchOptions, FetchedPage, fetch_page};
