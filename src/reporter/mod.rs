//! Report generation. Where the teacher renders a student/teacher schedule,
//! this renders an assignment set against the instance it was solved for:
//! feasibility, objective value, violations, and a per-curriculum breakdown.

mod json;
mod markdown;
mod text;

pub use json::*;
pub use markdown::*;
pub use text::*;

use crate::error::Result;
use crate::types::{Assignment, Instance};
use std::fs;
use std::path::Path;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Text,
}

/// Generates every requested format and writes each to `output_dir`.
pub fn generate_reports(
    instance: &Instance,
    assignments: &[Assignment],
    output_dir: &Path,
    formats: &[OutputFormat],
) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    let (feasible, violations) = crate::constraint::check(instance, assignments);
    let objective = crate::constraint::objective(instance, assignments);

    for format in formats {
        match format {
            OutputFormat::Json => {
                let json = generate_json_report(instance, assignments, feasible, &violations, objective)?;
                fs::write(output_dir.join("schedule.json"), json)?;
            }
            OutputFormat::Markdown => {
                let md = generate_markdown_report(instance, assignments, feasible, &violations, objective);
                fs::write(output_dir.join("schedule.md"), md)?;
            }
            OutputFormat::Text => {
                let txt = generate_text_report(instance, assignments, feasible, &violations, objective);
                fs::write(output_dir.join("schedule.txt"), txt)?;
            }
        }
    }

    Ok(())
}
