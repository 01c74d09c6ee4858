use thiserror::Error;

/// Request-level failures. None of these affect other requests or the catalog.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DispatchError {
    /// Whether the caller sent a bad request (as opposed to a server fault)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DispatchError::MissingArgument(_) | DispatchError::InvalidArgument { .. }
        )
    }
}
