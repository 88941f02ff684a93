//! Post-hoc repair (§4.9): reassigns infeasible sections in place until a
//! fixpoint or the pass cap is hit. Shared by GRASP and the genetic
//! algorithm, grounded in the source's `_repair_assignments`, which scans
//! for conflicting sections and retries each with a shuffled candidate
//! order rather than giving up on the whole individual.

use super::{candidate_triples, is_candidate_feasible};
use crate::types::{Assignment, Instance, SectionId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Repairs `assignments` in place, returning `true` if the result is fully
/// feasible. Caps at `4 * sections.len()` passes (a design choice recorded
/// separately) so a pathologically over-constrained instance cannot spin
/// forever.
pub fn repair_assignments<R: Rng>(
    instance: &Instance,
    assignments: &mut Vec<Assignment>,
    rng: &mut R,
) -> bool {
    let max_passes = (instance.sections().len() as u32 * 4).max(1);

    for _ in 0..max_passes {
        let conflicting = conflicting_sections(instance, assignments);
        if conflicting.is_empty() {
            return true;
        }

        for section_id in conflicting {
            assignments.retain(|a| a.section_id != section_id);

            let mut candidates = candidate_triples(instance, section_id);
            candidates.shuffle(rng);

            if let Some((period, room_id, teacher_id)) = candidates
                .into_iter()
                .find(|&(period, room_id, teacher_id)| {
                    is_candidate_feasible(instance, section_id, period, room_id, teacher_id, assignments)
                })
            {
                assignments.push(Assignment::new(section_id, period, room_id, teacher_id));
            }
        }
    }

    conflicting_sections(instance, assignments).is_empty()
}

/// Section ids that are either unplaced or whose placement conflicts with
/// some other placement, in `assignments` order.
fn conflicting_sections(instance: &Instance, assignments: &[Assignment]) -> Vec<SectionId> {
    let mut bad: Vec<SectionId> = Vec::new();

    for section in instance.sections() {
        let Some(a) = assignments.iter().find(|a| a.section_id == section.id) else {
            bad.push(section.id);
            continue;
        };
        let others: Vec<Assignment> = assignments
            .iter()
            .copied()
            .filter(|o| o.section_id != section.id)
            .collect();
        if !is_candidate_feasible(instance, section.id, a.period, a.room_id, a.teacher_id, &others) {
            bad.push(section.id);
        }
    }
    bad
}
