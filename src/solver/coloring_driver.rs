//! Maps a graph coloring onto concrete (period, room, teacher) assignments
//! (§4.5). A color `c` is interpreted literally as period `c` — the
//! instance's periods are expected to be labeled the same way a coloring
//! numbers its colors (1, 2, …), consistent with the textual input format's
//! `Turno <int>` tokens.

use crate::coloring::{dsatur_coloring, rlf_coloring};
use crate::constraint::UsedSets;
use crate::graph::{build_conflict_graph, VertexKind};
use crate::types::{Assignment, Instance, Period};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Dsatur,
    Rlf,
}

/// Colors the instance's conflict graph, then greedily pairs each colored
/// section with a room and teacher. Writes the result into
/// `instance.assignments` in place, per the external-interface contract.
/// Sections with no feasible (room, teacher) pair in their assigned period
/// are left unassigned; no backtracking happens at this stage.
pub fn solve<R: Rng>(instance: &mut Instance, heuristic: Heuristic, rng: &mut R) {
    let graph = build_conflict_graph(instance);
    let coloring = match heuristic {
        Heuristic::Dsatur => dsatur_coloring(&graph, rng),
        Heuristic::Rlf => rlf_coloring(&graph, rng),
    };

    let mut used = UsedSets::default();
    let mut assignments: Vec<Assignment> = Vec::new();

    for section in instance.sections() {
        let Some(vertex) = graph.index_of(VertexKind::Section(section.id)) else {
            continue;
        };
        let period = Period(coloring.colors[vertex]);
        if !instance.periods().contains(&period) {
            continue;
        }

        let qualified = instance.qualified_teachers_for(&section.course_name);

        'rooms: for room in instance.rooms() {
            if room.capacity < section.total_students() || !room.availability.contains(&period) {
                continue;
            }
            for &teacher_id in &qualified {
                let Some(teacher) = instance.teacher(teacher_id) else {
                    continue;
                };
                if !teacher.availability.contains(&period) {
                    continue;
                }
                let candidate = (period, room.id, teacher_id);
                if used.can_place(instance, section.id, candidate) {
                    used.place(instance, section.id, candidate);
                    assignments.push(Assignment::new(section.id, period, room.id, teacher_id));
                    break 'rooms;
                }
            }
        }
    }

    instance.assignments = assignments;
}
