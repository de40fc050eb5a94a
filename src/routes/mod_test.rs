use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn health_reports_ok() {
    let Json(body) = health().await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[test]
fn app_builds_with_default_config() {
    let _router = app(test_helpers::test_app_state(), &ServerConfig::default());
}

#[test]
fn cors_layer_accepts_any_and_exact_origins() {
    let _any = cors_layer(&CorsOrigin::Any);
    let _exact = cors_layer(&CorsOrigin::Exact("https://studio.example.com".into()));
}

#[test]
fn cors_layer_falls_back_on_invalid_origin() {
    let _fallback = cors_layer(&CorsOrigin::Exact("bad\norigin".into()));
}
