//! Core data model types for resumo.
//!
//! These are the fundamental types the rest of the resumo system uses to
//! represent parsed exam attempts and grading outcomes.

use serde::{Deserialize, Serialize};

/// One exam attempt extracted from the backend's history digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Student display name or identifier from the enclosing header line.
    pub student_id: String,
    /// Exam year (e.g. 2023).
    pub exam_year: u16,
    /// Exam day within that year's schedule.
    pub exam_day: u8,
    /// Language the exam was taken in, spelled as in the digest.
    pub language: String,
    /// Questions answered correctly.
    pub correct_count: u32,
    /// Total questions in the exam. Always at least `correct_count`.
    pub total_count: u32,
    /// Canonical exam label, e.g. `"2023 - Dia 1 (ingles)"`. Derived from
    /// the facet fields; date filters compare against this string.
    pub display_date: String,
}

impl AttemptRecord {
    /// Build a record, deriving `display_date` from the exam facet.
    pub fn new(
        student_id: impl Into<String>,
        exam_year: u16,
        exam_day: u8,
        language: impl Into<String>,
        correct_count: u32,
        total_count: u32,
    ) -> Self {
        let language = language.into();
        let display_date = display_date(exam_year, exam_day, &language);
        Self {
            student_id: student_id.into(),
            exam_year,
            exam_day,
            language,
            correct_count,
            total_count,
            display_date,
        }
    }

    /// Share of questions answered correctly, as a percentage.
    /// Zero when the exam had no questions.
    pub fn percentage(&self) -> f64 {
        score_percentage(self.correct_count, self.total_count)
    }
}

/// Format the canonical exam label.
///
/// A pure function of the facet: equal `(year, day, language)` always
/// produce equal strings, so label equality stands in for facet equality.
pub fn display_date(year: u16, day: u8, language: &str) -> String {
    format!("{year} - Dia {day} ({language})")
}

/// Outcome of grading one freshly submitted exam, as reported by the
/// grading collaborator. The core never produces these; it consumes them
/// to know the history went stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingResult {
    /// Student the submission belongs to.
    pub student_id: String,
    /// Questions answered correctly.
    pub correct_count: u32,
    /// Total questions in the exam.
    pub total_count: u32,
}

impl GradingResult {
    /// Share of questions answered correctly, as a percentage.
    pub fn percentage(&self) -> f64 {
        score_percentage(self.correct_count, self.total_count)
    }
}

fn score_percentage(correct: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_format() {
        assert_eq!(display_date(2023, 1, "ingles"), "2023 - Dia 1 (ingles)");
        assert_eq!(display_date(2024, 2, "espanhol"), "2024 - Dia 2 (espanhol)");
    }

    #[test]
    fn display_date_depends_only_on_facet() {
        let a = AttemptRecord::new("Maria", 2023, 1, "ingles", 45, 50);
        let b = AttemptRecord::new("Joao", 2023, 1, "ingles", 10, 50);
        assert_eq!(a.display_date, b.display_date);

        let c = AttemptRecord::new("Maria", 2023, 2, "ingles", 45, 50);
        assert_ne!(a.display_date, c.display_date);
    }

    #[test]
    fn percentage_guards_zero_total() {
        let record = AttemptRecord::new("Maria", 2023, 1, "ingles", 45, 50);
        assert!((record.percentage() - 90.0).abs() < f64::EPSILON);

        let grading = GradingResult {
            student_id: "Maria".into(),
            correct_count: 0,
            total_count: 0,
        };
        assert_eq!(grading.percentage(), 0.0);
    }

    #[test]
    fn attempt_record_serde_roundtrip() {
        let record = AttemptRecord::new("Maria Silva", 2023, 1, "ingles", 45, 50);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AttemptRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
        assert_eq!(deserialized.display_date, "2023 - Dia 1 (ingles)");
    }
}
