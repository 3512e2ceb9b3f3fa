//! Error types for the alumnos API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so hosts driving `AlumnosClient`
//! directly can tell a missing record from an unexpected status. All other
//! non-2xx responses land in `HttpError` with the raw status code and body.
//! `AlumnosService` never returns these; it reports them and substitutes a
//! fallback.

use thiserror::Error;

/// Errors returned by `AlumnosClient` build/parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the requested alumno.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection, timeout, TLS).
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
