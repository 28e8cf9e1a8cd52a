//! Record filtering.
//!
//! Filters narrow a parsed snapshot without mutating it: each function
//! returns a fresh vector in the snapshot's order. Identifier and date
//! filters are independent and combine as a logical AND, so applying
//! them in either order gives the same result.

use serde::{Deserialize, Serialize};

use crate::model::AttemptRecord;

/// The active search criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring matched against the student identifier.
    /// Empty means no identifier filter.
    #[serde(default)]
    pub identifier_query: String,
    /// Exact display date a record must carry, e.g. `"2023 - Dia 1 (ingles)"`.
    /// `None` means no date filter.
    #[serde(default)]
    pub exact_date: Option<String>,
}

impl FilterState {
    /// True when no criterion is set and every record passes.
    pub fn is_empty(&self) -> bool {
        self.identifier_query.is_empty() && self.exact_date.is_none()
    }
}

/// Keep records whose student identifier contains `query`,
/// case-insensitively. An empty query keeps everything.
pub fn filter_by_identifier(records: &[AttemptRecord], query: &str) -> Vec<AttemptRecord> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.student_id.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Keep records whose display date equals `date` exactly. `None` keeps
/// everything; there is no fuzzy or partial date matching.
pub fn filter_by_date(records: &[AttemptRecord], date: Option<&str>) -> Vec<AttemptRecord> {
    match date {
        Some(date) => records
            .iter()
            .filter(|record| record.display_date == date)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

/// Apply both criteria of `filters`.
pub fn filter(records: &[AttemptRecord], filters: &FilterState) -> Vec<AttemptRecord> {
    let by_identifier = filter_by_identifier(records, &filters.identifier_query);
    filter_by_date(&by_identifier, filters.exact_date.as_deref())
}
