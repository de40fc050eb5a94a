//! Generate service: prompt → model reply → preview.
//!
//! DESIGN
//! ======
//! One chat call per request. The system prompt pins the output contract
//! (single default-exported React + TypeScript component, Tailwind styling,
//! `lucide-react` icons, `@/components/ui/*` kit imports, no fences), and the
//! reply is handed to the preview sandbox, which never fails. Errors here are
//! only about reaching the model.

use std::fmt::Write;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{error, info};

use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};
use crate::preview::{Preview, build_preview};

pub const DEFAULT_DEVICE_TYPE: &str = "web";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("LLM error: {0}")]
    LlmError(#[from] LlmError),
    #[error("model returned an empty reply")]
    EmptyResponse,
}

impl ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::EmptyPrompt => "E_EMPTY_PROMPT",
            Self::LlmError(_) => "E_LLM_ERROR",
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::LlmError(e) if e.retryable()) || matches!(self, Self::EmptyResponse)
    }
}

/// Body of a generate request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default = "default_device_type")]
    pub device_type: String,
}

fn default_device_type() -> String {
    DEFAULT_DEVICE_TYPE.to_string()
}

/// Per-call limits taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSettings {
    pub max_tokens: u32,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self { max_tokens: crate::llm::config::DEFAULT_MAX_TOKENS }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Ask the model for a component and build its preview.
///
/// # Errors
///
/// Fails when no model is configured, the prompt is blank, the model call
/// fails, or the reply is empty.
pub async fn generate(
    llm: Option<&Arc<dyn LlmChat>>,
    settings: GenerateSettings,
    request: &GenerateRequest,
) -> Result<Preview, GenerateError> {
    let llm = llm.ok_or(GenerateError::LlmNotConfigured)?;
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }
    let device_type = device_context(&request.device_type);
    info!(prompt_len = prompt.len(), device_type, model = llm.model(), "generate: request received");

    let system = build_system_prompt(device_type);
    let messages = [Message::user(prompt)];
    let response = llm
        .chat(settings.max_tokens, &system, &messages)
        .await
        .inspect_err(|e| error!(error = %e, code = e.error_code(), "generate: generation failed"))?;

    if response.text.trim().is_empty() {
        error!(model = %response.model, stop_reason = %response.stop_reason, "generate: empty model reply");
        return Err(GenerateError::EmptyResponse);
    }

    let preview = build_preview(&response.text);
    info!(
        model = %response.model,
        stop_reason = %response.stop_reason,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        code_len = preview.code.len(),
        html_len = preview.html_preview.len(),
        "generate: preview built"
    );
    Ok(preview)
}

fn device_context(device_type: &str) -> &str {
    let trimmed = device_type.trim();
    if trimmed.is_empty() { DEFAULT_DEVICE_TYPE } else { trimmed }
}

// =============================================================================
// SYSTEM PROMPT
// =============================================================================

pub(crate) fn build_system_prompt(device_type: &str) -> String {
    let mut prompt = String::from(
        "You are an expert frontend developer specializing in React, TypeScript, and Tailwind CSS.\n\
         Generate a production-ready React component for the user's request.\n\n",
    );
    let _ = writeln!(prompt, "DEVICE CONTEXT: {device_type}");
    prompt.push_str(
        "Optimize the layout for this device type.\n\n\
         REQUIREMENTS:\n\
         1. Framework: React function components with hooks.\n\
         2. Language: TypeScript.\n\
         3. Styling: Tailwind CSS utility classes only. No external CSS files.\n\
         4. Icons: import them from `lucide-react` when needed.\n\
         5. UI kit: `@/components/ui/*` components (Button, Card, Input, Badge, ...) may be imported and exist.\n\
         6. Accessibility: semantic markup and ARIA attributes.\n\
         7. Quality: realistic text and data, modern design, responsive layout.\n\
         8. Output format:\n\
         \x20  - Return ONLY the raw source of one file.\n\
         \x20  - Do NOT wrap it in markdown code fences.\n\
         \x20  - Do NOT include explanations.\n\
         \x20  - Export the component as `default`.\n\n\
         EXAMPLE OUTPUT:\n\
         import React from 'react';\n\
         import { Button } from '@/components/ui/button';\n\n\
         export default function Hero() {\n\
         \x20 return (\n\
         \x20   <div className=\"bg-gradient-to-r from-blue-500 to-purple-600 text-white p-10 rounded-xl\">\n\
         \x20     <h1 className=\"text-4xl font-bold\">Hello World</h1>\n\
         \x20     <Button variant=\"secondary\" className=\"mt-4\">Click Me</Button>\n\
         \x20   </div>\n\
         \x20 );\n\
         }\n",
    );
    prompt
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
