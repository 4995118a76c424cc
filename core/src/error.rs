//! Error types for the todo API client.
//!
//! # Design
//! The backend answers most mistakes with HTTP 200 and an `{"error": ...}`
//! body, so `Rejected` is separate from `HttpError`, which only covers
//! non-2xx statuses. `IndexOutOfRange` never reaches the network: it is raised
//! locally when an index does not exist in the last-fetched list.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods, transports and `TodoList`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The server accepted the request but answered with an error payload.
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, timeout...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The index does not address an item in the last-fetched list.
    #[error("no todo at position {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
