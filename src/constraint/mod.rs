//! The shared evaluation and repair kernel (§4.2, §4.9). These are pure
//! functions over an explicit assignment set, per the design note that
//! replaces the source's trick of temporarily swapping `instance.assignments`
//! in and out: no global mutation, no aliasing hazards between solvers.

mod repair;

pub use repair::repair_assignments;

use crate::types::{Assignment, Instance, Period, RoomId, SectionId, TeacherId};
use std::collections::HashSet;

/// Evaluates I1-I7 against `assignments`, in order. Every violation is a
/// separate human-readable message; an empty list means feasible.
pub fn check(instance: &Instance, assignments: &[Assignment]) -> (bool, Vec<String>) {
    let mut violations = Vec::new();

    // I1: coverage - at most one assignment per section.
    let mut seen_sections: HashSet<SectionId> = HashSet::new();
    for a in assignments {
        if !seen_sections.insert(a.section_id) {
            violations.push(format!(
                "I1 violated: section {} has more than one assignment",
                a.section_id
            ));
        }
    }

    for a in assignments {
        let Some(section) = instance.section(a.section_id) else {
            violations.push(format!("unknown section {}", a.section_id));
            continue;
        };
        let Some(room) = instance.room(a.room_id) else {
            violations.push(format!("unknown room for section {}", a.section_id));
            continue;
        };
        let Some(teacher) = instance.teacher(a.teacher_id) else {
            violations.push(format!("unknown teacher for section {}", a.section_id));
            continue;
        };

        // I2: qualification.
        if !teacher.is_qualified_for(&section.course_name) {
            violations.push(format!(
                "I2 violated: teacher {} is not qualified for {} (section {})",
                teacher.name, section.course_name, a.section_id
            ));
        }

        // I3: availability.
        if !room.availability.contains(&a.period) || !teacher.availability.contains(&a.period) {
            violations.push(format!(
                "I3 violated: section {} placed at {} outside room/teacher availability",
                a.section_id, a.period
            ));
        }

        // I4: capacity.
        if room.capacity < section.total_students() {
            violations.push(format!(
                "I4 violated: room {} (cap {}) too small for section {} ({} students)",
                room.name,
                room.capacity,
                a.section_id,
                section.total_students()
            ));
        }
    }

    // I5/I6/I7: pairwise overlap checks among placed assignments.
    for i in 0..assignments.len() {
        for j in (i + 1)..assignments.len() {
            let a = &assignments[i];
            let b = &assignments[j];
            if a.period != b.period {
                continue;
            }
            if a.teacher_id == b.teacher_id {
                violations.push(format!(
                    "I5 violated: teacher {} double-booked at {} (sections {}, {})",
                    a.teacher_id, a.period, a.section_id, b.section_id
                ));
            }
            if a.room_id == b.room_id {
                violations.push(format!(
                    "I6 violated: room {} double-booked at {} (sections {}, {})",
                    a.room_id, a.period, a.section_id, b.section_id
                ));
            }
            if let (Some(sa), Some(sb)) = (instance.section(a.section_id), instance.section(b.section_id)) {
                if sa.shares_curriculum_with(sb) {
                    violations.push(format!(
                        "I7 violated: sections {} and {} share a curriculum at {}",
                        a.section_id, b.section_id, a.period
                    ));
                }
            }
        }
    }

    (violations.is_empty(), violations)
}

/// Σ over `assignments` of the value of the first matching preference,
/// by preference-list order (P2). Null fields in a preference act as
/// wildcards (the resolved reading of the source's two inconsistent
/// matching rules).
pub fn objective(instance: &Instance, assignments: &[Assignment]) -> f64 {
    assignments
        .iter()
        .map(|a| matching_preference_value(instance, a))
        .sum()
}

fn matching_preference_value(instance: &Instance, a: &Assignment) -> f64 {
    let Some(section) = instance.section(a.section_id) else {
        return 0.0;
    };
    let room_name = instance.room(a.room_id).map(|r| r.name.as_str());
    let teacher_name = instance.teacher(a.teacher_id).map(|t| t.name.as_str());

    for pref in instance.preferences() {
        if pref.course_name != section.course_name {
            continue;
        }
        if let Some(p) = pref.period {
            if p != a.period {
                continue;
            }
        }
        if let Some(room) = &pref.room_name {
            if Some(room.as_str()) != room_name {
                continue;
            }
        }
        if let Some(teacher) = &pref.teacher_name {
            if Some(teacher.as_str()) != teacher_name {
                continue;
            }
        }
        return pref.value;
    }
    0.0
}

/// Fast feasibility predicate evaluating I2-I7 of one candidate placement
/// against the already-placed set `others` (which must not itself contain
/// a conflicting entry for `section_id`). Used by every constructive and
/// local-search routine.
pub fn is_candidate_feasible(
    instance: &Instance,
    section_id: SectionId,
    period: Period,
    room_id: RoomId,
    teacher_id: TeacherId,
    others: &[Assignment],
) -> bool {
    let Some(section) = instance.section(section_id) else {
        return false;
    };
    let Some(room) = instance.room(room_id) else {
        return false;
    };
    let Some(teacher) = instance.teacher(teacher_id) else {
        return false;
    };

    if !teacher.is_qualified_for(&section.course_name) {
        return false;
    }
    if room.capacity < section.total_students() {
        return false;
    }
    if !room.availability.contains(&period) || !teacher.availability.contains(&period) {
        return false;
    }

    for other in others {
        if other.section_id == section_id || other.period != period {
            continue;
        }
        if other.teacher_id == teacher_id || other.room_id == room_id {
            return false;
        }
        if let Some(other_section) = instance.section(other.section_id) {
            if section.shares_curriculum_with(other_section) {
                return false;
            }
        }
    }

    true
}

/// Candidate triple enumerated by the reduction and constructive layers.
pub type Candidate = (Period, RoomId, TeacherId);

/// All (period, room, teacher) triples that could in principle host
/// `section_id`, ignoring other sections' placements (§4.3's per-section
/// candidate set, reused by backtracking/GRASP/GA construction).
pub fn candidate_triples(instance: &Instance, section_id: SectionId) -> Vec<Candidate> {
    let Some(section) = instance.section(section_id) else {
        return Vec::new();
    };
    let qualified = instance.qualified_teachers_for(&section.course_name);
    let mut out = Vec::new();
    for room in instance.rooms() {
        if room.capacity < section.total_students() {
            continue;
        }
        for &teacher_id in &qualified {
            let Some(teacher) = instance.teacher(teacher_id) else {
                continue;
            };
            for period in room.availability.intersection(&teacher.availability) {
                out.push((*period, room.id, teacher_id));
            }
        }
    }
    out
}

/// Tracks the three used-sets shared by backtracking and the coloring
/// driver: `(room, period)`, `(teacher, period)`, `(curriculum, period)`.
#[derive(Debug, Default)]
pub struct UsedSets {
    pub room_period: HashSet<(RoomId, Period)>,
    pub teacher_period: HashSet<(TeacherId, Period)>,
    pub curriculum_period: HashSet<(crate::types::CurriculumId, Period)>,
}

impl UsedSets {
    pub fn can_place(&self, instance: &Instance, section_id: SectionId, candidate: Candidate) -> bool {
        let (period, room_id, teacher_id) = candidate;
        if self.room_period.contains(&(room_id, period)) {
            return false;
        }
        if self.teacher_period.contains(&(teacher_id, period)) {
            return false;
        }
        let Some(section) = instance.section(section_id) else {
            return false;
        };
        section
            .curriculum_ids()
            .iter()
            .all(|cid| !self.curriculum_period.contains(&(*cid, period)))
    }

    pub fn place(&mut self, instance: &Instance, section_id: SectionId, candidate: Candidate) {
        let (period, room_id, teacher_id) = candidate;
        self.room_period.insert((room_id, period));
        self.teacher_period.insert((teacher_id, period));
        if let Some(section) = instance.section(section_id) {
            for cid in section.curriculum_ids() {
                self.curriculum_period.insert((cid, period));
            }
        }
    }

    pub fn unplace(&mut self, instance: &Instance, section_id: SectionId, candidate: Candidate) {
        let (period, room_id, teacher_id) = candidate;
        self.room_period.remove(&(room_id, period));
        self.teacher_period.remove(&(teacher_id, period));
        if let Some(section) = instance.section(section_id) {
            for cid in section.curriculum_ids() {
                self.curriculum_period.remove(&(cid, period));
            }
        }
    }
}
