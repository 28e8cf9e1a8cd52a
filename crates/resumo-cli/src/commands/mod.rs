//! Subcommand implementations.

pub mod parse;
pub mod search;
