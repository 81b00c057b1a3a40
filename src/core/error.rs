/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced at the edges of the calculation core.
///
/// The arithmetic itself never fails; these cover the boundaries around it
/// (configuration, JSON input, document edits that reference a missing row).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Line item lookup by key failed
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}
