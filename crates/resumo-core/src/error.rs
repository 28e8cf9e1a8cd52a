//! Digest source error types.
//!
//! These error types represent failures when fetching the history digest
//! from a backend. Defined in `resumo-core` so the history store can
//! classify failures without string matching.

use thiserror::Error;

/// Errors that can occur when fetching the history digest.
///
/// `Clone` so scripted test sources can replay outcomes.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// A network error occurred (connection refused, DNS failure, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The backend returned an error response.
    #[error("backend error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The response decoded but carried no digest field.
    #[error("response carried no digest")]
    MissingDigest,
}

impl SourceError {
    /// Returns `true` if retrying the same request cannot help.
    pub fn is_permanent(&self) -> bool {
        matches!(self, SourceError::Decode(_) | SourceError::MissingDigest)
    }
}
