//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A small JSON API: `/health` for liveness and `/api/generate` for turning a
//! prompt into component source plus its preview document. CORS admits the
//! configured front-end origin; every request is traced.

pub mod generate;

use axum::Json;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::{CorsOrigin, DEFAULT_CORS_ALLOW_ORIGIN, ServerConfig};
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/generate", post(generate::generate))
        .layer(cors_layer(&config.cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let allow_origin = match origin {
        CorsOrigin::Any => AllowOrigin::from(Any),
        CorsOrigin::Exact(value) => match HeaderValue::from_str(value) {
            Ok(header) => AllowOrigin::exact(header),
            Err(e) => {
                warn!(origin = %value, error = %e, "invalid CORS origin; using default");
                AllowOrigin::exact(HeaderValue::from_static(DEFAULT_CORS_ALLOW_ORIGIN))
            }
        },
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
