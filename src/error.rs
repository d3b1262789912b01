use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Shorthand for an [`PlannerError::InvalidRequest`] with a formatted message
    pub fn invalid(message: impl Into<String>) -> Self {
        PlannerError::InvalidRequest(message.into())
    }

    /// Whether the error was caused by caller input rather than the environment
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            PlannerError::InvalidRequest(_) | PlannerError::NotFound(_)
        )
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::InvalidRequest(_) => "INVALID_REQUEST",
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Io(_) => "IO_ERROR",
            PlannerError::NotFound(_) => "NOT_FOUND",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "request_error": self.is_request_error()
            }
        })
    }
}
