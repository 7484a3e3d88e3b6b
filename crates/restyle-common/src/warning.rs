//! Warnings with colored terminal output.
//!
//! Deduplicates messages so a problem that shows up repeatedly during one
//! run is reported once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("extract", "start marker `:root {` occurs 2 times; using the first");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if first_time(key) {
        eprintln!("{}", format!("[restyle {component}] ⚠ {message}").yellow());
    }
}

/// Record `key`, returning `true` if it had not been seen before.
fn first_time(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_is_recorded_once() {
        assert!(first_time("[test] marker occurs twice".to_string()));
        assert!(!first_time("[test] marker occurs twice".to_string()));
        // Same message from another component is a different warning
        assert!(first_time("[test-other] marker occurs twice".to_string()));
    }
}
