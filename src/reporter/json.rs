use crate::error::Result;
use crate::types::{Assignment, Instance};
use serde::Serialize;

/// JSON report of an assignment set: the raw assignments plus the
/// feasibility/objective summary computed from the shared kernel.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub assignments: &'a [Assignment],
    pub feasible: bool,
    pub violations: &'a [String],
    pub objective: f64,
}

pub fn generate_json_report(
    _instance: &Instance,
    assignments: &[Assignment],
    feasible: bool,
    violations: &[String],
    objective: f64,
) -> Result<String> {
    let report = JsonReport {
        assignments,
        feasible,
        violations,
        objective,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Summary-only JSON, for quick machine consumption.
#[derive(Serialize)]
pub struct JsonSummary {
    pub total_sections: usize,
    pub total_assignments: usize,
    pub unassigned_count: usize,
    pub feasible: bool,
    pub objective: f64,
}

pub fn generate_json_summary(instance: &Instance, assignments: &[Assignment], feasible: bool, objective: f64) -> Result<String> {
    let summary = JsonSummary {
        total_sections: instance.sections().len(),
        total_assignments: assignments.len(),
        unassigned_count: instance.sections().len().saturating_sub(assignments.len()),
        feasible,
        objective,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
