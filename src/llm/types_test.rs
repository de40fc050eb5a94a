use super::*;
use crate::error::ErrorCode;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_codes_are_stable() {
    let cases = [
        (LlmError::ConfigParse("bad".into()), "E_CONFIG_PARSE"),
        (LlmError::MissingApiKey { var: "KEY".into() }, "E_MISSING_API_KEY"),
        (LlmError::ApiRequest("timeout".into()), "E_API_REQUEST"),
        (LlmError::ApiResponse { status: 500, body: "oops".into() }, "E_API_RESPONSE"),
        (LlmError::ApiParse("json".into()), "E_API_PARSE"),
        (LlmError::HttpClientBuild("tls".into()), "E_HTTP_CLIENT_BUILD"),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code);
    }
}

// =============================================================================
// LlmError::retryable
// =============================================================================

#[test]
fn retryable_request_failures_and_server_statuses() {
    assert!(LlmError::ApiRequest("conn refused".into()).retryable());
    assert!(LlmError::ApiResponse { status: 429, body: "rate limited".into() }.retryable());
    assert!(LlmError::ApiResponse { status: 503, body: "unavailable".into() }.retryable());
}

#[test]
fn not_retryable_client_errors() {
    assert!(!LlmError::ApiResponse { status: 400, body: "bad request".into() }.retryable());
    assert!(!LlmError::ApiResponse { status: 401, body: "unauthorized".into() }.retryable());
    assert!(!LlmError::ApiParse("json".into()).retryable());
    assert!(!LlmError::MissingApiKey { var: "KEY".into() }.retryable());
}

#[test]
fn missing_api_key_message_names_var() {
    let err = LlmError::MissingApiKey { var: "OPENROUTER_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var OPENROUTER_API_KEY not set");
}

// =============================================================================
// Message
// =============================================================================

#[test]
fn message_constructors_set_roles() {
    assert_eq!(Message::system("s").role, "system");
    let user = Message::user("make a hero");
    assert_eq!(user.role, "user");
    assert_eq!(user.content, "make a hero");
}

#[test]
fn message_serializes_as_role_and_content() {
    let json = serde_json::to_value(Message::user("hi")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));
}
