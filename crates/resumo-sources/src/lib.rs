//! resumo-sources — History digest sources.
//!
//! Implements the `DigestSource` trait for the HTTP grading backend, and
//! provides a scripted mock source for exercising consumers without a
//! running backend.

pub mod config;
pub mod http;
pub mod mock;

pub use config::{load_config, load_config_from, ResumoConfig};
pub use http::HttpDigestSource;
pub use mock::MockDigestSource;
