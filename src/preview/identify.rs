//! Best-effort lookup of the default-exported component's name.
//!
//! Cosmetic only: the name titles the preview document and labels the
//! mounted component in devtools. Mounting never depends on it, so anything
//! the two patterns miss simply falls back to [`DEFAULT_COMPONENT_NAME`].

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_COMPONENT_NAME: &str = "Component";

static DEFAULT_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+default\s+function\s+([A-Za-z_$][\w$]*)").expect("default function pattern compiles")
});

/// `export default Name` where the identifier ends the statement, so
/// `export default function () {}` and friends don't yield a keyword.
static DEFAULT_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)export\s+default\s+([A-Za-z_$][\w$]*)\s*;?\s*$").expect("default identifier pattern compiles")
});

/// Guess the component's display name.
#[must_use]
pub fn identify(source: &str) -> String {
    [&*DEFAULT_FUNCTION, &*DEFAULT_IDENTIFIER]
        .into_iter()
        .find_map(|pattern| pattern.captures(source))
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_COMPONENT_NAME.to_string(), |m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "identify_test.rs"]
mod tests;
