use crate::types::{Assignment, Instance};
use std::collections::BTreeMap;

/// Markdown report of an assignment set.
pub fn generate_markdown_report(
    instance: &Instance,
    assignments: &[Assignment],
    feasible: bool,
    violations: &[String],
    objective: f64,
) -> String {
    let mut lines = vec!["# Timetable Report".to_string(), String::new()];

    lines.push("## Summary\n".to_string());
    lines.push("| Metric | Value |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| Total Sections | {} |", instance.sections().len()));
    lines.push(format!("| Total Assignments | {} |", assignments.len()));
    lines.push(format!(
        "| Unassigned | {} |",
        instance.sections().len().saturating_sub(assignments.len())
    ));
    lines.push(format!("| Objective | {:.2} |", objective));
    lines.push(String::new());

    if feasible {
        lines.push("## Feasibility: PASSED\n".to_string());
    } else {
        lines.push("## Feasibility: FAILED\n".to_string());
        for v in violations {
            lines.push(format!("- {}", v));
        }
        lines.push(String::new());
    }

    lines.push("## Course Sections\n".to_string());

    let mut by_course: BTreeMap<&str, Vec<&Assignment>> = BTreeMap::new();
    for a in assignments {
        if let Some(section) = instance.section(a.section_id) {
            by_course.entry(section.course_name.as_str()).or_default().push(a);
        }
    }

    for (course, course_assignments) in &by_course {
        lines.push(format!("### {}\n", course));
        lines.push("| Period | Room | Teacher | Enrolled |".to_string());
        lines.push("|--------|------|---------|----------|".to_string());

        for a in course_assignments {
            let room = instance.room(a.room_id).map(|r| r.name.clone()).unwrap_or_else(|| "?".to_string());
            let teacher = instance
                .teacher(a.teacher_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "?".to_string());
            let total = instance
                .section(a.section_id)
                .map(|s| s.total_students())
                .unwrap_or(0);
            let capacity = instance.room(a.room_id).map(|r| r.capacity).unwrap_or(0);

            lines.push(format!("| {} | {} | {} | {}/{} |", a.period, room, teacher, total, capacity));
        }
        lines.push(String::new());
    }

    let unassigned: Vec<_> = instance
        .sections()
        .iter()
        .filter(|s| !assignments.iter().any(|a| a.section_id == s.id))
        .collect();
    if !unassigned.is_empty() {
        lines.push("## Unassigned Sections\n".to_string());
        lines.push("| Section | Course |".to_string());
        lines.push("|---------|--------|".to_string());
        for section in unassigned {
            lines.push(format!("| {} | {} |", section.id, section.course_name));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    #[test]
    fn unassigned_sections_are_listed() {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", 10, &["Algebra".to_string()]).unwrap();
        inst.add_room("R1", 20, &[Period(1)]).unwrap();
        inst.add_teacher("T1", &["Algebra".to_string()], &[Period(1)]).unwrap();
        inst.create_course_sections().unwrap();

        let report = generate_markdown_report(&inst, &[], false, &["nothing assigned".to_string()], 0.0);
        assert!(report.contains("Unassigned Sections"));
        assert!(report.contains("Algebra"));
    }
}
