//! Diagnostics with colored terminal output.
//!
//! Deduplicated warnings for legacy call patterns that are tolerated but
//! should be migrated. Each unique (component, message) pair prints once
//! per process.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI escape for yellow text.
const YELLOW: &str = "\x1b[33m";
/// ANSI escape resetting all attributes.
const RESET: &str = "\x1b[0m";

/// Pairs already reported, keyed by component and message.
static REPORTED: LazyLock<Mutex<HashSet<(String, String)>>> =
    LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about a tolerated legacy behavior.
///
/// Prints to stderr once per unique (component, message) pair; repeated
/// calls with the same pair are silent.
///
/// # Panics
///
/// Panics if the warning registry mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let fresh = REPORTED
        .lock()
        .unwrap()
        .insert((component.to_string(), message.to_string()));

    if fresh {
        eprintln!("{YELLOW}[Cassia {component}] ⚠ {message}{RESET}");
    }
}

/// Forget every recorded warning so it may print again.
///
/// # Panics
///
/// Panics if the warning registry mutex is poisoned.
pub fn clear_warnings() {
    REPORTED.lock().unwrap().clear();
}
