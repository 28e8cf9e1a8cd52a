//! The `resumo parse` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use resumo_core::parser::parse_digest;
use resumo_core::query::{self, FilterState};

use crate::output;

pub fn execute(
    file: PathBuf,
    student: Option<String>,
    date: Option<String>,
    format: String,
) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read digest file: {}", file.display()))?;

    let records = parse_digest(&text);
    let filters = FilterState {
        identifier_query: student.unwrap_or_default(),
        exact_date: date,
    };
    let visible = query::filter(&records, &filters);

    eprintln!("{} attempts parsed ({} shown)", records.len(), visible.len());

    output::print_records(&visible, &format)
}
