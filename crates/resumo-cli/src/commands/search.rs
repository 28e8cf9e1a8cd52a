//! The `resumo search` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use resumo_core::store::{HistoryStore, RefreshOutcome};
use resumo_sources::config::load_config_from;

use crate::output;

pub async fn execute(
    student: Option<String>,
    date: Option<String>,
    base_url: Option<String>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    // Load config, then apply flag overrides
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(url) = base_url {
        config.base_url = url;
    }
    tracing::debug!(base_url = %config.base_url, "using grading backend");

    let store = HistoryStore::new(Arc::new(config.source()));
    if let Some(student) = student {
        store.set_identifier_query(student);
    }
    store.set_exact_date(date);

    let outcome = store
        .refresh()
        .await
        .context("failed to fetch history digest")?;

    if outcome == RefreshOutcome::NoData {
        eprintln!("Backend sent an empty digest; no history to show.");
        return Ok(());
    }

    let view = store.view();
    if let Some(at) = view.fetched_at {
        eprintln!(
            "{} attempts fetched at {} ({} shown)",
            view.records.len(),
            at.format("%Y-%m-%d %H:%M:%S UTC"),
            view.visible.len()
        );
    }

    output::print_records(&view.visible, &format)
}
