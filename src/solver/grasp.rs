//! Greedy Randomized Adaptive Search Procedure (§4.7), grounded in
//! `grasp.py`'s `GRASPTimetabling`. The per-candidate cost function, RCL
//! construction, and 1-move/exchange local search are ported as-is; the
//! Python version's trick of temporarily swapping `instance.assignments`
//! to reuse `check_hard_constraints`/`calculate_objective` is replaced by
//! passing the candidate assignment set directly, per the pure-function
//! kernel design.

use crate::constraint::{self, candidate_triples, repair_assignments, Candidate};
use crate::types::{Assignment, Instance, Period, SectionId, SolverConfig};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use super::Solution;

pub fn solve<R: Rng>(instance: &Instance, config: &SolverConfig, rng: &mut R) -> Solution {
    let mut best: Option<Solution> = None;

    for _ in 0..config.max_iterations {
        let constructed = construct_solution(instance, config, rng);
        let mut solution = evaluate_solution(instance, constructed, rng);
        if solution.feasible {
            solution = local_search(instance, solution, config, rng);
        }
        if best.as_ref().map_or(true, |b| solution.is_better_than(b)) {
            best = Some(solution);
        }
    }

    best.unwrap_or(Solution {
        assignments: Vec::new(),
        feasible: instance.sections().is_empty(),
        violations: Vec::new(),
        cost: 0.0,
    })
}

fn construct_solution<R: Rng>(instance: &Instance, config: &SolverConfig, rng: &mut R) -> Vec<Assignment> {
    let mut sections: Vec<SectionId> = instance.sections().iter().map(|s| s.id).collect();
    sections.shuffle(rng);

    let mut partial: Vec<Assignment> = Vec::with_capacity(sections.len());
    for section_id in sections {
        let candidates = generate_candidates(instance, section_id, &partial);
        let (period, room_id, teacher_id) = if candidates.is_empty() {
            random_assignment(instance, section_id, &partial, rng)
        } else {
            select_from_rcl(candidates, config.alpha, rng)
        };
        partial.push(Assignment::new(section_id, period, room_id, teacher_id));
    }
    partial
}

fn generate_candidates(
    instance: &Instance,
    section_id: SectionId,
    partial: &[Assignment],
) -> Vec<(Candidate, f64)> {
    let Some(section) = instance.section(section_id) else {
        return Vec::new();
    };
    let qualified = instance.qualified_teachers_for(&section.course_name);
    let mut out = Vec::new();

    for &period in instance.periods() {
        for room in instance.rooms() {
            for &teacher_id in &qualified {
                if constraint::is_candidate_feasible(instance, section_id, period, room.id, teacher_id, partial) {
                    let cost = evaluate_candidate(instance, section_id, period, room.id, teacher_id);
                    out.push(((period, room.id, teacher_id), cost));
                }
            }
        }
    }
    out
}

/// Cost of placing `section_id` at `(period, room_id, teacher_id)`: a
/// penalty for a non-preferred period (when the course has any preference
/// naming a specific period at all), a penalty for wasted room capacity,
/// and a bonus (negative cost) for every matching preference.
fn evaluate_candidate(
    instance: &Instance,
    section_id: SectionId,
    period: Period,
    room_id: crate::types::RoomId,
    teacher_id: crate::types::TeacherId,
) -> f64 {
    let section = instance.section(section_id).expect("candidate section must exist");
    let room = instance.room(room_id).expect("candidate room must exist");
    let mut cost = 0.0;

    let preferred_periods: BTreeSet<Period> = instance
        .preferences()
        .iter()
        .filter(|p| p.course_name == section.course_name)
        .filter_map(|p| p.period)
        .collect();
    if !preferred_periods.is_empty() && !preferred_periods.contains(&period) {
        cost += 1.0;
    }

    if room.capacity > 0 {
        let wasted = (room.capacity - section.total_students()) as f64 / room.capacity as f64;
        cost += wasted * 0.5;
    }

    for pref in instance.preferences() {
        if pref.course_name != section.course_name {
            continue;
        }
        if let Some(p) = pref.period {
            if p != period {
                continue;
            }
        }
        if let Some(room_name) = &pref.room_name {
            if instance.find_room_by_name(room_name) != Some(room_id) {
                continue;
            }
        }
        if let Some(teacher_name) = &pref.teacher_name {
            if instance.find_teacher_by_name(teacher_name) != Some(teacher_id) {
                continue;
            }
        }
        cost -= pref.value;
    }

    cost
}

fn select_from_rcl<R: Rng>(mut candidates: Vec<(Candidate, f64)>, alpha: f64, rng: &mut R) -> Candidate {
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
    let min_cost = candidates.first().unwrap().1;
    let max_cost = candidates.last().unwrap().1;
    let threshold = min_cost + alpha * (max_cost - min_cost);
    let rcl: Vec<Candidate> = candidates
        .into_iter()
        .filter(|(_, cost)| *cost <= threshold)
        .map(|(c, _)| c)
        .collect();
    *rcl.choose(rng).unwrap()
}

fn random_assignment<R: Rng>(
    instance: &Instance,
    section_id: SectionId,
    partial: &[Assignment],
    rng: &mut R,
) -> Candidate {
    let section = instance.section(section_id).expect("section must exist");
    let mut qualified = instance.qualified_teachers_for(&section.course_name);
    qualified.shuffle(rng);
    let mut periods: Vec<Period> = instance.periods().iter().copied().collect();
    periods.shuffle(rng);
    let mut room_ids: Vec<crate::types::RoomId> = instance.rooms().iter().map(|r| r.id).collect();
    room_ids.shuffle(rng);

    for &period in &periods {
        for &room_id in &room_ids {
            for &teacher_id in &qualified {
                if constraint::is_candidate_feasible(instance, section_id, period, room_id, teacher_id, partial) {
                    return (period, room_id, teacher_id);
                }
            }
        }
    }

    (
        *periods.choose(rng).expect("instance must have at least one period"),
        *room_ids.choose(rng).expect("instance must have at least one room"),
        *qualified.choose(rng).expect("instance must have at least one teacher"),
    )
}

fn evaluate_solution<R: Rng>(instance: &Instance, assignments: Vec<Assignment>, rng: &mut R) -> Solution {
    let (feasible, violations) = constraint::check(instance, &assignments);
    if feasible {
        let cost = -constraint::objective(instance, &assignments);
        return Solution {
            assignments,
            feasible,
            violations,
            cost,
        };
    }

    let mut repaired = assignments;
    let repaired_feasible = repair_assignments(instance, &mut repaired, rng);
    let (feasible, violations) = constraint::check(instance, &repaired);
    debug_assert_eq!(feasible, repaired_feasible);
    let mut cost = -constraint::objective(instance, &repaired);
    if !feasible {
        cost += 1000.0 * violations.len() as f64;
    }
    Solution {
        assignments: repaired,
        feasible,
        violations,
        cost,
    }
}

fn local_search<R: Rng>(
    instance: &Instance,
    mut solution: Solution,
    config: &SolverConfig,
    rng: &mut R,
) -> Solution {
    for _ in 0..config.max_local_search_iterations {
        let mut neighbors = swap_neighbors(instance, &solution.assignments);
        neighbors.extend(exchange_neighbors(&solution.assignments, rng));

        let mut improved = false;
        for neighbor_assignments in neighbors {
            let neighbor = evaluate_solution(instance, neighbor_assignments, rng);
            if neighbor.is_better_than(&solution) {
                solution = neighbor;
                improved = true;
                break;
            }
        }
        if !improved {
            break;
        }
    }
    solution
}

fn swap_neighbors(instance: &Instance, assignments: &[Assignment]) -> Vec<Vec<Assignment>> {
    let mut out = Vec::new();

    for (idx, a) in assignments.iter().enumerate() {
        let Some(section) = instance.section(a.section_id) else {
            continue;
        };

        for &period in instance.periods() {
            if period != a.period {
                let mut neighbor = assignments.to_vec();
                neighbor[idx].period = period;
                out.push(neighbor);
            }
        }
        for room in instance.rooms() {
            if room.id != a.room_id {
                let mut neighbor = assignments.to_vec();
                neighbor[idx].room_id = room.id;
                out.push(neighbor);
            }
        }
        for teacher_id in instance.qualified_teachers_for(&section.course_name) {
            if teacher_id != a.teacher_id {
                let mut neighbor = assignments.to_vec();
                neighbor[idx].teacher_id = teacher_id;
                out.push(neighbor);
            }
        }
    }
    out
}

fn exchange_neighbors<R: Rng>(assignments: &[Assignment], rng: &mut R) -> Vec<Vec<Assignment>> {
    let n = assignments.len();
    if n < 2 {
        return Vec::new();
    }
    let sample_size = n.min(20);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    let sampled = &indices[..sample_size];

    let mut out = Vec::new();
    for i in 0..sampled.len() {
        for j in (i + 1)..sampled.len() {
            let (i1, i2) = (sampled[i], sampled[j]);

            let mut swap_period = assignments.to_vec();
            swap_period[i1].period = assignments[i2].period;
            swap_period[i2].period = assignments[i1].period;
            out.push(swap_period);

            let mut swap_room = assignments.to_vec();
            swap_room[i1].room_id = assignments[i2].room_id;
            swap_room[i2].room_id = assignments[i1].room_id;
            out.push(swap_room);
        }
    }
    out
}
