//! Parse warnings with colored terminal output.
//!
//! HTML parsing never fails on malformed input; it recovers and keeps going.
//! Components report what they recovered from through this module, which
//! deduplicates so a badly damaged document does not repeat the same
//! diagnostic on every occurrence.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Report a recovered parse problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML Preprocessor", "reserved code point U+FDD0 at position 12");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        let line = format!("[Wallaby {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Clear all recorded warnings (call when starting a new document)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
