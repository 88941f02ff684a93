//! Depth-first, fail-first exact search (§4.6). No counterpart in the
//! source exists for this solver specifically, but its shape — precompute
//! candidates, order by constrainedness, recurse with undo — mirrors the
//! used-set bookkeeping `grasp.py`'s `_is_candidate_feasible` does inline.

use crate::constraint::{candidate_triples, Candidate, UsedSets};
use crate::types::{Assignment, Instance, SectionId};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct BacktrackingResult {
    pub found: bool,
    pub assignments: Vec<Assignment>,
    pub elapsed_seconds: f64,
}

/// Orders sections by ascending candidate-set size, then recurses depth
/// first, trying each candidate in enumeration order and undoing on
/// backtrack. Stops at the first complete solution or when `time_limit`
/// elapses (checked at every recursion entry).
pub fn solve(instance: &Instance, time_limit_secs: f64) -> BacktrackingResult {
    let start = Instant::now();
    let time_limit = Duration::from_secs_f64(time_limit_secs.max(0.0));

    let mut per_section: Vec<(SectionId, Vec<Candidate>)> = instance
        .sections()
        .iter()
        .map(|s| (s.id, candidate_triples(instance, s.id)))
        .collect();
    per_section.sort_by_key(|(_, candidates)| candidates.len());

    let mut used = UsedSets::default();
    let mut assignments: Vec<Assignment> = Vec::with_capacity(per_section.len());

    let found = recurse(instance, &per_section, 0, &mut used, &mut assignments, start, time_limit);

    BacktrackingResult {
        found,
        assignments,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    }
}

fn recurse(
    instance: &Instance,
    per_section: &[(SectionId, Vec<Candidate>)],
    depth: usize,
    used: &mut UsedSets,
    assignments: &mut Vec<Assignment>,
    start: Instant,
    time_limit: Duration,
) -> bool {
    if start.elapsed() >= time_limit {
        return false;
    }
    if depth == per_section.len() {
        return true;
    }

    let (section_id, candidates) = &per_section[depth];
    for &candidate in candidates {
        if !used.can_place(instance, *section_id, candidate) {
            continue;
        }
        let (period, room_id, teacher_id) = candidate;
        used.place(instance, *section_id, candidate);
        assignments.push(Assignment::new(*section_id, period, room_id, teacher_id));

        if recurse(instance, per_section, depth + 1, used, assignments, start, time_limit) {
            return true;
        }

        assignments.pop();
        used.unplace(instance, *section_id, candidate);

        if start.elapsed() >= time_limit {
            return false;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    #[test]
    fn two_sections_one_room_finds_distinct_periods() {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", 100, &["A".to_string(), "B".to_string()])
            .unwrap();
        inst.add_room("R1", 100, &[Period(1), Period(2)]).unwrap();
        inst.add_teacher("T1", &["A".to_string()], &[Period(1), Period(2)])
            .unwrap();
        inst.add_teacher("T2", &["B".to_string()], &[Period(1), Period(2)])
            .unwrap();
        inst.create_course_sections().unwrap();

        let result = solve(&inst, 1.0);
        assert!(result.found);
        assert_eq!(result.assignments.len(), 2);
        assert_ne!(result.assignments[0].period, result.assignments[1].period);
    }

    #[test]
    fn capacity_infeasible_instance_fails() {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", 100, &["A".to_string()]).unwrap();
        inst.add_room("R1", 50, &[Period(1)]).unwrap();
        inst.add_teacher("T1", &["A".to_string()], &[Period(1)]).unwrap();
        inst.create_course_sections().unwrap();

        let result = solve(&inst, 1.0);
        assert!(!result.found);
    }
}
