//! Backend configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::http::HttpDigestSource;

/// Top-level resumo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumoConfig {
    /// Base URL of the grading backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the history digest endpoint.
    #[serde(default = "default_digest_path")]
    pub digest_path: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
fn default_digest_path() -> String {
    "/resumo_historico/".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ResumoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            digest_path: default_digest_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ResumoConfig {
    /// Build the HTTP digest source this configuration describes.
    pub fn source(&self) -> HttpDigestSource {
        HttpDigestSource::new(&self.base_url)
            .with_digest_path(&self.digest_path)
            .with_timeout(self.timeout_secs)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `resumo.toml` in the current directory
/// 2. `~/.config/resumo/config.toml`
///
/// Environment variable override: `RESUMO_BASE_URL`.
pub fn load_config() -> Result<ResumoConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ResumoConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("resumo.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ResumoConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ResumoConfig::default(),
    };

    if let Ok(url) = std::env::var("RESUMO_BASE_URL") {
        config.base_url = url;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("resumo"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ResumoConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.digest_path, "/resumo_historico/");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
base_url = "http://grading.escola.local:9000"
digest_path = "/historico/digesto"
timeout_secs = 30
"#;
        let config: ResumoConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "http://grading.escola.local:9000");
        assert_eq!(config.digest_path, "/historico/digesto");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: ResumoConfig = toml::from_str(r#"base_url = "http://10.0.0.5:8000""#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.digest_path, "/resumo_historico/");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn source_factory_uses_the_configured_endpoint() {
        let config = ResumoConfig {
            base_url: "http://10.0.0.5:8000/".to_string(),
            digest_path: "digesto".to_string(),
            timeout_secs: 5,
        };
        let source = config.source();
        assert_eq!(source.digest_url(), "http://10.0.0.5:8000/digesto");
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumo.toml");
        std::fs::write(&path, r#"base_url = "http://127.0.0.1:8123""#).unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8123");
    }

    #[test]
    fn missing_explicit_path_fails() {
        let err = load_config_from(Some(Path::new("/nonexistent/resumo.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resumo.toml");
        std::fs::write(&path, "base_url = [not toml").unwrap();

        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
