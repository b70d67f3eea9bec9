use std::io;

use thiserror::Error;

/// Library-wide error type for formsmith operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Page template failed to load or render.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Form generation failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }
}

/// Failure of a form generation request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request could not be sent or timed out.
    #[error("Completion request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("Completion service error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The model declined to produce a form.
    #[error("Completion refused: {0}")]
    Refused(String),

    /// The response carried no message content.
    #[error("Completion response contained no form")]
    EmptyResponse,

    /// The response could not be coerced to the form schema.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },
}

impl GatewayError {
    pub(crate) fn parse<S: Into<String>>(what: &str, details: S) -> Self {
        GatewayError::Parse { what: what.to_string(), details: details.into() }
    }
}
