//! Deduplicated warnings.
//!
//! A long-running host may invoke the same code path for every link posted
//! in a channel; each distinct warning is only emitted once per process.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable oddity (emits once per unique message).
///
/// Returns `true` if the warning was emitted by this call.
///
/// # Example
/// ```
/// use pagetitle_common::warning::warn_once;
///
/// assert!(warn_once("net", "charset shift_jis is decoded as UTF-8"));
/// assert!(!warn_once("net", "charset shift_jis is decoded as UTF-8"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        tracing::warn!(component, "{message}");
    }
    first_time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_deduplicated_per_component() {
        assert!(warn_once("test-a", "same message"));
        assert!(!warn_once("test-a", "same message"));
        assert!(warn_once("test-b", "same message"));
        assert!(warn_once("test-a", "other message"));
    }
}
