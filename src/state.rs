//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional model client and per-call generation limits. The
//! preview registry is process-wide and read-only, so it is not stored here.

use std::sync::Arc;

use crate::llm::LlmChat;
use crate::services::generate::GenerateSettings;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub settings: GenerateSettings,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, settings: GenerateSettings) -> Self {
        Self { llm, settings }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
