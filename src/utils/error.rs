use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdviceError {
    #[error("Advice request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Advice service returned HTTP {status}")]
    StatusError { status: StatusCode },

    #[error("Advice service reported failure: {message}")]
    ServiceError { message: String },

    #[error("A submission is already in flight for this session")]
    SubmissionInFlight,
}

impl AdviceError {
    /// Every remote failure collapses into the same retry prompt; local
    /// config and input problems keep their specific message.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdviceError::ApiError(_)
            | AdviceError::StatusError { .. }
            | AdviceError::ServiceError { .. }
            | AdviceError::SerializationError(_) => {
                "Failed to generate your survival protocol. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdviceError>;
