//! Core trait definition for history digest sources.
//!
//! This async trait is implemented by the `resumo-sources` crate for the
//! real HTTP backend and for scripted test doubles.

use async_trait::async_trait;

use crate::error::SourceError;

/// Trait for backends that produce the raw history digest text.
///
/// A call resolves exactly once, with either the full digest text or a
/// transport error. Timeouts and retries are the implementation's business;
/// the store only sequences whole calls.
#[async_trait]
pub trait DigestSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the current digest text.
    async fn fetch_digest(&self) -> Result<String, SourceError>;
}
