//! HTTP digest source for the grading backend.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use resumo_core::error::SourceError;
use resumo_core::traits::DigestSource;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_DIGEST_PATH: &str = "/resumo_historico/";
const DEFAULT_TIMEOUT_SECS: u64 = 10; // The digest endpoint is a local summary, not a slow report

/// Digest source backed by the grading backend's HTTP API.
pub struct HttpDigestSource {
    base_url: String,
    digest_path: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpDigestSource {
    pub fn new(base_url: &str) -> Self {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };

        Self {
            base_url: base.trim_end_matches('/').to_string(),
            digest_path: DEFAULT_DIGEST_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            client: build_client(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Replace the digest endpoint path.
    pub fn with_digest_path(mut self, path: &str) -> Self {
        self.digest_path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        self
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self.client = build_client(secs);
        self
    }

    /// Full URL of the digest endpoint.
    pub fn digest_url(&self) -> String {
        format!("{}{}", self.base_url, self.digest_path)
    }
}

fn build_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .expect("failed to build HTTP client")
}

/// Response envelope of the digest endpoint. The backend always wraps
/// the digest text in a `resumo` field.
#[derive(Deserialize)]
struct DigestEnvelope {
    #[serde(default)]
    resumo: Option<String>,
}

#[async_trait]
impl DigestSource for HttpDigestSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(url = %self.digest_url()))]
    async fn fetch_digest(&self) -> Result<String, SourceError> {
        let response = self
            .client
            .get(self.digest_url())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    SourceError::Network(format!(
                        "backend not reachable at {}. Is it running?",
                        self.base_url
                    ))
                } else {
                    SourceError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Status { status, message });
        }

        let envelope: DigestEnvelope = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(format!("failed to parse response: {e}")))?;

        envelope.resumo.ok_or(SourceError::MissingDigest)
    }
}
