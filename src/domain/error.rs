use std::io;

use thiserror::Error;

use crate::domain::response::Requirement;
use crate::ports::SubmissionError;

/// Library-wide error type for rsvp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A date-time value could not be interpreted as an instant.
    #[error("Invalid instant '{value}': {reason}")]
    InvalidInstant { value: String, reason: String },

    /// No collector URL configured for submissions.
    #[error("No submission endpoint configured. Set gateway.url or RSVP_GATEWAY_URL.")]
    GatewayNotConfigured,

    /// The collector could not be reached or rejected the submission.
    #[error("Submission failed: {0}")]
    Gateway(#[from] SubmissionError),

    /// The response is missing required answers.
    #[error("Response is incomplete: {}", describe_missing(.0))]
    ResponseIncomplete(Vec<Requirement>),

    /// Command-line input rejected.
    #[error("{0}")]
    InvalidInput(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ResponseIncomplete(_) => 2,
            _ => 1,
        }
    }
}

fn describe_missing(missing: &[Requirement]) -> String {
    missing.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}
