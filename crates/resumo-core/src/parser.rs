//! History digest parser.
//!
//! The grading backend reports exam history as one loosely structured text
//! block: student header lines, a no-history marker, and attempt detail
//! lines, interleaved. This module turns that block into ordered
//! [`AttemptRecord`]s. Parsing is total; lines that fit no rule are
//! dropped, never surfaced as errors.

use regex::Regex;

use crate::model::AttemptRecord;

/// Matches a student header line, e.g. `"12 - Maria Silva"`.
const HEADER_PATTERN: &str = r"^(\d+)\s*-\s*(.+)$";

/// Matches an attempt detail anywhere in a line, e.g.
/// `"Ano: 2023 | Dia: 1 | Idioma: ingles → 45 / 50"`.
const DETAIL_PATTERN: &str = r"Ano: (\d+) \| Dia: (\d+) \| Idioma: (\w+) → (\d+) / (\d+)";

/// Marker the backend emits for students with no recorded attempts.
const NO_HISTORY_MARKER: &str = "Sem histórico";

/// Parse the backend history digest into attempt records.
///
/// Detail lines attach to the most recent header line; the no-history
/// marker closes the current student block, as does a header whose name
/// is blank. A line is classified by the first rule it matches, in the
/// order header, marker, detail. Detail lines with no student in scope,
/// with numbers that do not fit their fields, or with an impossible
/// score are dropped silently.
///
/// Records come out in source line order, never grouped by student.
pub fn parse_digest(text: &str) -> Vec<AttemptRecord> {
    let Ok(header_re) = Regex::new(HEADER_PATTERN) else {
        return Vec::new();
    };
    let Ok(detail_re) = Regex::new(DETAIL_PATTERN) else {
        return Vec::new();
    };

    let (_, records) = text.lines().fold(
        (None::<String>, Vec::new()),
        |(current, mut records), line| {
            if let Some(caps) = header_re.captures(line) {
                // Capture 1 is the backend's list index; only the name matters.
                // A header with a blank name closes the block and opens none.
                let student = caps[2].trim();
                if student.is_empty() {
                    return (None, records);
                }
                return (Some(student.to_string()), records);
            }

            if line.contains(NO_HISTORY_MARKER) {
                return (None, records);
            }

            if let Some(caps) = detail_re.captures(line) {
                match &current {
                    Some(student) => {
                        if let Some(record) = attempt_from_captures(student, &caps) {
                            records.push(record);
                        }
                    }
                    None => {
                        tracing::trace!("dropping detail line with no student in scope: {line}");
                    }
                }
            }

            (current, records)
        },
    );

    records
}

/// Build a record from a detail line's captures. `None` when a numeric
/// field does not fit its type or the score violates
/// `correct <= total, total > 0`.
fn attempt_from_captures(student: &str, caps: &regex::Captures<'_>) -> Option<AttemptRecord> {
    let year: u16 = caps[1].parse().ok()?;
    let day: u8 = caps[2].parse().ok()?;
    let language = &caps[3];
    let correct: u32 = caps[4].parse().ok()?;
    let total: u32 = caps[5].parse().ok()?;

    if total == 0 || correct > total {
        tracing::trace!("dropping detail line with impossible score {correct}/{total}");
        return None;
    }

    Some(AttemptRecord::new(student, year, day, language, correct, total))
}
