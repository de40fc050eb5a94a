//! Preview sandbox: raw model output → isolated, zero-install preview.
//!
//! DESIGN
//! ======
//! Pure, synchronous string work with no I/O: extract the component source
//! from the model's reply, guess its display name, and compose a
//! self-contained HTML document that transpiles and mounts it in the browser
//! against a fixed registry of mocked imports. The only shared state is the
//! read-only [`registry::ModuleRegistry`], so concurrent builds are safe.
//!
//! Failures inside the generated component are never errors here. They are
//! reported inside the document by its compile and mount boundaries.

pub mod document;
pub mod extract;
pub mod identify;
pub mod imports;
pub mod registry;

use serde::Serialize;
use tracing::info;

pub use document::{PreviewBuilder, PreviewDocument, build};
pub use extract::{ExtractMethod, Extraction, extract};
pub use identify::identify;
pub use registry::{MockExport, MockModule, ModuleRegistry, Resolution};

/// Extracted source and its preview document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub code: String,
    pub html_preview: String,
}

/// Turn raw model output into extracted code plus a preview document.
#[must_use]
pub fn build_preview(generated_text: &str) -> Preview {
    let Extraction { source, method } = extract(generated_text);
    let component_name = identify(&source);
    let document = build(&source, &component_name);
    info!(
        component = %component_name,
        fenced = method == ExtractMethod::Fenced,
        code_start = %source.chars().take(100).collect::<String>(),
        "preview: built"
    );
    Preview { code: source, html_preview: document.into_string() }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
