//! Mock digest source for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use resumo_core::error::SourceError;
use resumo_core::traits::DigestSource;

/// A mock digest source for exercising consumers without a backend.
///
/// Replays a scripted list of outcomes, one per call; once the script is
/// exhausted the last outcome repeats.
pub struct MockDigestSource {
    /// Outcome returned for each call, in order.
    outcomes: Mutex<Vec<Result<String, SourceError>>>,
    /// Number of calls made.
    call_count: AtomicU32,
}

impl MockDigestSource {
    /// Create a mock source with the given outcome script.
    pub fn new(outcomes: Vec<Result<String, SourceError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes),
            call_count: AtomicU32::new(0),
        }
    }

    /// Create a mock that always returns the same digest text.
    pub fn with_fixed_digest(digest: &str) -> Self {
        Self::new(vec![Ok(digest.to_string())])
    }

    /// Create a mock that always fails with the given error.
    pub fn with_failure(error: SourceError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Get the number of calls made to this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DigestSource for MockDigestSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_digest(&self) -> Result<String, SourceError> {
        let call = self.call_count.fetch_add(1, Ordering::Relaxed) as usize;
        let outcomes = self.outcomes.lock().unwrap();
        match outcomes.get(call.min(outcomes.len().saturating_sub(1))) {
            Some(outcome) => outcome.clone(),
            None => Err(SourceError::Network("mock script is empty".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_digest() {
        let source = MockDigestSource::with_fixed_digest("1 - Maria\nSem histórico");
        assert_eq!(source.name(), "mock");

        let digest = source.fetch_digest().await.unwrap();
        assert!(digest.contains("Maria"));
        assert_eq!(source.call_count(), 1);

        // The single entry repeats on later calls.
        let digest = source.fetch_digest().await.unwrap();
        assert!(digest.contains("Maria"));
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn scripted_outcomes_replay_in_order() {
        let source = MockDigestSource::new(vec![
            Ok("1 - Maria\nAno: 2023 | Dia: 1 | Idioma: ingles → 45 / 50".to_string()),
            Err(SourceError::Timeout(10)),
            Ok(String::new()),
        ]);

        assert!(source.fetch_digest().await.is_ok());
        assert!(matches!(
            source.fetch_digest().await.unwrap_err(),
            SourceError::Timeout(10)
        ));
        assert_eq!(source.fetch_digest().await.unwrap(), "");
        // Exhausted scripts repeat the last entry.
        assert_eq!(source.fetch_digest().await.unwrap(), "");
        assert_eq!(source.call_count(), 4);
    }

    #[tokio::test]
    async fn fixed_failure() {
        let source = MockDigestSource::with_failure(SourceError::Network("down".into()));
        assert!(matches!(
            source.fetch_digest().await.unwrap_err(),
            SourceError::Network(_)
        ));
    }

    #[tokio::test]
    async fn empty_script_reports_a_network_error() {
        let source = MockDigestSource::new(Vec::new());
        let err = source.fetch_digest().await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
    }
}
