use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KanbanError {
    /// Classify a non-success response status from the board service.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            404 => Self::NotFound(detail),
            401 | 403 => Self::AccessDenied(detail),
            400 => Self::InvalidRequest(detail),
            500..=599 => Self::Server(detail),
            _ => Self::Internal(format!("HTTP {}: {}", status, detail)),
        }
    }

    /// Whether this error came back from (or failed to reach) the board service,
    /// as opposed to being rejected locally.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Connection(_)
                | Self::NotFound(_)
                | Self::AccessDenied(_)
                | Self::InvalidRequest(_)
                | Self::Server(_)
        )
    }

    /// Short title shown on a user-facing notification.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::NotFound(_) => "Not Found",
            Self::AccessDenied(_) => "Access Denied",
            Self::InvalidRequest(_) | Self::Validation(_) => "Invalid Request",
            Self::Server(_) => "Server Error",
            Self::Serialization(_) | Self::Internal(_) => "Error",
        }
    }

    /// Message shown on a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Connection(_) => "Unable to connect to the server. Please check your internet connection and try again.".to_string(),
            Self::NotFound(_) => "The requested resource was not found.".to_string(),
            Self::AccessDenied(_) => "You do not have permission to perform this action.".to_string(),
            Self::InvalidRequest(_) => "The request was invalid. Please check your input and try again.".to_string(),
            Self::Server(_) => "The server encountered an error. Please try again later.".to_string(),
            Self::Validation(msg) | Self::Serialization(msg) | Self::Internal(msg) => msg.clone(),
        }
    }
}
