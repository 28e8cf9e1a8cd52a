//! Record rendering for the terminal.

use anyhow::Result;

use resumo_core::model::AttemptRecord;

/// Print records to stdout in the requested format.
pub fn print_records(records: &[AttemptRecord], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(records)?);
            Ok(())
        }
        "table" => {
            if records.is_empty() {
                println!("No attempts found.");
            } else {
                println!("{}", render_table(records));
            }
            Ok(())
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }
}

fn render_table(records: &[AttemptRecord]) -> comfy_table::Table {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Student", "Exam", "Score", "%"]);

    for record in records {
        table.add_row(vec![
            Cell::new(&record.student_id),
            Cell::new(&record.display_date),
            Cell::new(format!("{} / {}", record.correct_count, record.total_count)),
            Cell::new(format!("{:.0}%", record.percentage())),
        ]);
    }

    table
}
