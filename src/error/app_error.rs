use std::process::ExitCode;
use thiserror::Error;
use tracing::error;

use crate::service::validation::FormReport;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        #[source]
        source: figment::Error,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Malformed submission: {message}")]
    MalformedSubmission {
        message: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Submission rejected: {} field(s) failed validation", .0.error_count())]
    Rejected(FormReport),
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    pub fn malformed(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedSubmission {
            message: message.into(),
            source,
        }
    }

    /// Log the error with structured context and return the matching exit code.
    pub fn report(&self) -> ExitCode {
        error!(error = ?self, "{}", self);
        ExitCode::from(u8::from(self))
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::ConfigurationError {
            message: "Failed to read configuration".to_string(),
            source: e,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::malformed("Submission is not a valid sign-in form", e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::io("Could not write to the output", e)
    }
}

impl From<&AppError> for u8 {
    fn from(e: &AppError) -> Self {
        match e {
            AppError::Rejected(_) => 1,
            AppError::MalformedSubmission { .. } => 2,
            AppError::ConfigurationError { .. } | AppError::InvalidConfig(_) => 3,
            AppError::Io { .. } => 4,
        }
    }
}
