//! Static scan of the module specifiers a generated component imports.
//!
//! Used only for build-time diagnostics; the in-document loader resolves
//! imports on its own at render time.

use std::sync::LazyLock;

use regex::Regex;

/// `import x from 'p'`, `import { a } from "p"`, `export * from 'p'`,
/// side-effect `import 'p'`, and `require('p')`.
static SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)(?:^\s*(?:import|export)\s[^'"`;()<=]*?from\s*|^\s*import\s*|\brequire\s*\(\s*)['"]([^'"\n]+)['"]"#,
    )
    .expect("import specifier pattern compiles")
});

/// Module specifiers in first-occurrence order, deduplicated.
#[must_use]
pub fn scan_imports(source: &str) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    for caps in SPECIFIER.captures_iter(source) {
        let Some(path) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !paths.iter().any(|p| p == path) {
            paths.push(path.to_string());
        }
    }
    paths
}

#[cfg(test)]
#[path = "imports_test.rs"]
mod tests;
