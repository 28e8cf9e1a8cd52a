//! resumo-core — Digest parsing, filtering, and history state.
//!
//! This crate defines the fundamental data model and the pure engine that
//! the entire resumo system builds on: the parser that turns the backend's
//! textual history digest into records, the query filters over those
//! records, and the refreshable store that holds the latest snapshot.

pub mod error;
pub mod model;
pub mod parser;
pub mod query;
pub mod store;
pub mod traits;
