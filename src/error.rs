//! Machine-readable error codes shared by service-level error enums.

/// Stable error code + retry hint for an error surfaced over HTTP.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
