//! # Assistant Error Types
//!
//! Failures of the upstream call. None of these reach the user: the
//! [`ReportAssistant`](crate::ReportAssistant) logs them and answers with a
//! fixed sentence instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// No API key was configured.
    #[error("API key not configured")]
    MissingCredential,

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The endpoint could not be reached.
    #[error("Cannot reach text-generation service at {0}")]
    Connection(String),

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Text-generation service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    ResponseParsing(String),
}

pub type AssistantResult<T> = Result<T, AssistantError>;
