// ABOUTME: Defines all error types for the issue-guard library using thiserror.
// ABOUTME: IO, JSON, and hook failures are unified under GuardError.

/// Top-level error type for the issue-guard library.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hook error: {0}")]
    Hook(#[source] anyhow::Error),
}
