//! Developer-facing error reporting.

use crate::error::ApiError;

/// Receives every error `AlumnosService` swallows.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, operation: &str, error: &ApiError);
}

/// Emits each reported error as a `tracing` error event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, operation: &str, error: &ApiError) {
        tracing::error!(operation, error = %error, "alumnos request failed");
    }
}
