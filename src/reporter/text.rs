use crate::types::{Assignment, Instance};
use colored::Colorize;
use std::collections::BTreeMap;

/// Plain text report, colored for a terminal.
pub fn generate_text_report(
    instance: &Instance,
    assignments: &[Assignment],
    feasible: bool,
    violations: &[String],
    objective: f64,
) -> String {
    let mut lines = Vec::new();

    lines.push("=".repeat(60));
    lines.push("               TIMETABLE REPORT".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());

    lines.push("-".repeat(40));
    lines.push("STATISTICS".to_string());
    lines.push("-".repeat(40));
    lines.push(format!("  Sections:      {}", instance.sections().len()));
    lines.push(format!("  Assignments:   {}", assignments.len()));
    lines.push(format!(
        "  Unassigned:    {}",
        instance.sections().len().saturating_sub(assignments.len())
    ));
    lines.push(format!("  Objective:     {:.2}", objective));
    lines.push(String::new());

    lines.push("-".repeat(40));
    if feasible {
        lines.push("FEASIBILITY: PASSED".green().to_string());
    } else {
        lines.push("FEASIBILITY: FAILED".red().to_string());
        for v in violations {
            lines.push(format!("  ! {}", v));
        }
    }
    lines.push("-".repeat(40));
    lines.push(String::new());

    let mut by_course: BTreeMap<&str, Vec<&Assignment>> = BTreeMap::new();
    for a in assignments {
        if let Some(section) = instance.section(a.section_id) {
            by_course.entry(section.course_name.as_str()).or_default().push(a);
        }
    }

    lines.push("COURSE SECTIONS".to_string());
    lines.push("-".repeat(40));

    for (course, course_assignments) in &by_course {
        lines.push(format!("\n{} ({} sections)", course.bold(), course_assignments.len()));

        for a in course_assignments {
            let room = instance.room(a.room_id).map(|r| r.name.as_str()).unwrap_or("?");
            let teacher = instance.teacher(a.teacher_id).map(|t| t.name.as_str()).unwrap_or("?");
            let total = instance
                .section(a.section_id)
                .map(|s| s.total_students())
                .unwrap_or(0);
            let capacity = instance.room(a.room_id).map(|r| r.capacity).unwrap_or(0);
            let fill_pct = if capacity > 0 {
                total as f64 / capacity as f64 * 100.0
            } else {
                0.0
            };
            let indicator = if fill_pct >= 90.0 {
                "*".red()
            } else if fill_pct >= 70.0 {
                "*".yellow()
            } else {
                "*".green()
            };
            lines.push(format!(
                "  {} {} | {} | {} | {}/{} {}",
                indicator,
                a.period,
                room,
                teacher,
                total,
                capacity,
                format!("({:.0}%)", fill_pct).dimmed()
            ));
        }
    }

    lines.push(String::new());
    lines.push("=".repeat(60));

    lines.join("\n")
}

/// Prints a short summary to stdout, the way the teacher's CLI does after
/// a solve.
pub fn print_summary(instance: &Instance, assignments: &[Assignment], feasible: bool, objective: f64) {
    println!();
    if feasible {
        println!("{}", "Timetable is feasible".green().bold());
    } else {
        println!("{}", "Timetable has constraint violations".red().bold());
    }
    println!();
    println!("  Sections:    {}", instance.sections().len());
    println!("  Assignments: {}", assignments.len());
    println!("  Objective:   {:.2}", objective);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    #[test]
    fn report_mentions_course_and_feasibility() {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", 10, &["Algebra".to_string()]).unwrap();
        inst.add_room("R1", 20, &[Period(1)]).unwrap();
        inst.add_teacher("T1", &["Algebra".to_string()], &[Period(1)]).unwrap();
        inst.create_course_sections().unwrap();

        let section_id = inst.sections()[0].id;
        let room_id = inst.rooms()[0].id;
        let teacher_id = inst.teachers()[0].id;
        let assignments = vec![Assignment::new(section_id, Period(1), room_id, teacher_id)];

        let (feasible, violations) = crate::constraint::check(&inst, &assignments);
        let objective = crate::constraint::objective(&inst, &assignments);
        let report = generate_text_report(&inst, &assignments, feasible, &violations, objective);

        assert!(report.contains("Algebra"));
        assert!(report.contains("FEASIBILITY"));
    }
}
