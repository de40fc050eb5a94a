//! Component generation route.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;

use crate::error::ErrorCode;
use crate::llm::types::LlmError;
use crate::services::generate::{self as service, GenerateError, GenerateRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub code: String,
    pub html_preview: String,
    pub success: bool,
}

/// `POST /api/generate`: return component source and its preview document.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, GenerateFailure> {
    let Json(request) = payload?;
    let preview = service::generate(state.llm.as_ref(), state.settings, &request).await?;
    Ok(Json(GenerateResponse { code: preview.code, html_preview: preview.html_preview, success: true }))
}

/// A failed generate call rendered as `{ error, detail, retryable }`.
#[derive(Debug)]
pub enum GenerateFailure {
    /// The body was not a valid generate request.
    Rejected(JsonRejection),
    Service(GenerateError),
}

impl From<JsonRejection> for GenerateFailure {
    fn from(e: JsonRejection) -> Self {
        Self::Rejected(e)
    }
}

impl From<GenerateError> for GenerateFailure {
    fn from(e: GenerateError) -> Self {
        Self::Service(e)
    }
}

impl IntoResponse for GenerateFailure {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Rejected(rejection) => (
                rejection.status(),
                json!({ "error": "E_INVALID_REQUEST", "detail": rejection.body_text(), "retryable": false }),
            ),
            Self::Service(e) => (
                generate_error_to_status(e),
                json!({ "error": e.error_code(), "detail": e.to_string(), "retryable": e.retryable() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

pub(crate) fn generate_error_to_status(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::EmptyPrompt => StatusCode::BAD_REQUEST,
        GenerateError::LlmNotConfigured
        | GenerateError::LlmError(
            LlmError::ConfigParse(_) | LlmError::MissingApiKey { .. } | LlmError::HttpClientBuild(_),
        ) => StatusCode::INTERNAL_SERVER_ERROR,
        GenerateError::LlmError(_) | GenerateError::EmptyResponse => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
