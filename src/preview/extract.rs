//! Code extractor: isolate component source from raw model output.
//!
//! Models are told to return bare source, but frequently wrap it in a
//! markdown fence and add narration around it. The first fenced block wins;
//! a fence without a closing marker runs to end of input so truncated
//! replies still yield their code. No fence means the whole reply is taken
//! as source.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

/// Opening fence with an optional language tag, then everything up to the
/// next fence or end of input.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)```(?:tsx|typescript|jsx|javascript|react)?\s*([\s\S]*?)(?:```|\z)")
        .expect("fenced block pattern compiles")
});

/// How the source was isolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMethod {
    /// Interior of a markdown code fence.
    Fenced,
    /// No fence present; the trimmed input itself.
    Raw,
}

/// Extracted component source plus how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub source: String,
    pub method: ExtractMethod,
}

/// Extract component source from raw model output. Never fails.
#[must_use]
pub fn extract(raw: &str) -> Extraction {
    if let Some(interior) = FENCED_BLOCK.captures(raw).and_then(|c| c.get(1)) {
        let source = interior.as_str().trim().to_string();
        info!(source_len = source.len(), "extract: code extracted from fenced block");
        return Extraction { source, method: ExtractMethod::Fenced };
    }

    warn!(raw_len = raw.len(), "extract: no code fence found, using raw content");
    Extraction { source: raw.trim().to_string(), method: ExtractMethod::Raw }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
