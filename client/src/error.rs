//! Error types for the todo API client.
//!
//! # Design
//! The server answers 404 and 400 with a plain-text message, so those two
//! statuses get dedicated variants that carry it. Any other unexpected status
//! lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned 400; the payload failed validation.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
