//! Instance → conflict graph reduction (§4.3), grounded in the source's
//! `timetabling_to_graph`. The offsetting scheme it used to keep vertex ids
//! distinct per kind (`room_offset = 10000`, …) is replaced here by the
//! `VertexKind` tagged enum, per the design note that calls the offset
//! trick a coding convenience rather than something worth porting.

use super::{Graph, VertexKind};
use crate::types::Instance;

/// Builds the typed conflict graph for `instance`. Edges:
/// - Section ↔ each of its curriculums.
/// - Section ↔ Section when they share a curriculum (I7).
/// - Section ↔ Section when their combined enrollment exceeds the largest
///   room (no room could ever hold both at once).
/// - Teacher ↔ Section when the teacher is qualified for the section's course.
/// - Room ↔ Period and Teacher ↔ Period for every available period
///   (informational only — coloring never touches them).
pub fn build_conflict_graph(instance: &Instance) -> Graph {
    let mut g = Graph::new();

    for curriculum in instance.curriculums() {
        g.add_vertex(VertexKind::Curriculum(curriculum.id));
    }
    for room in instance.rooms() {
        g.add_vertex(VertexKind::Room(room.id));
    }
    for teacher in instance.teachers() {
        g.add_vertex(VertexKind::Teacher(teacher.id));
    }
    for period in instance.periods() {
        g.add_vertex(VertexKind::Period(*period));
    }
    for section in instance.sections() {
        g.add_vertex(VertexKind::Section(section.id));
    }

    for section in instance.sections() {
        let svid = g.add_vertex(VertexKind::Section(section.id));
        for cid in section.curriculum_ids() {
            let cvid = g.add_vertex(VertexKind::Curriculum(cid));
            g.add_edge(svid, cvid);
        }
    }

    let sections = instance.sections();
    for i in 0..sections.len() {
        for j in (i + 1)..sections.len() {
            let (s1, s2) = (&sections[i], &sections[j]);
            if s1.shares_curriculum_with(s2) {
                let v1 = g.add_vertex(VertexKind::Section(s1.id));
                let v2 = g.add_vertex(VertexKind::Section(s2.id));
                g.add_edge(v1, v2);
            }
        }
    }

    let max_capacity = instance.max_room_capacity();
    for i in 0..sections.len() {
        for j in (i + 1)..sections.len() {
            let (s1, s2) = (&sections[i], &sections[j]);
            if s1.total_students() + s2.total_students() > max_capacity {
                let v1 = g.add_vertex(VertexKind::Section(s1.id));
                let v2 = g.add_vertex(VertexKind::Section(s2.id));
                g.add_edge(v1, v2);
            }
        }
    }

    for teacher in instance.teachers() {
        let tvid = g.add_vertex(VertexKind::Teacher(teacher.id));
        for section in instance.sections() {
            if teacher.is_qualified_for(&section.course_name) {
                let svid = g.add_vertex(VertexKind::Section(section.id));
                g.add_edge(tvid, svid);
            }
        }
    }

    for room in instance.rooms() {
        let rvid = g.add_vertex(VertexKind::Room(room.id));
        for period in &room.availability {
            let pvid = g.add_vertex(VertexKind::Period(*period));
            g.add_edge(rvid, pvid);
        }
    }

    for teacher in instance.teachers() {
        let tvid = g.add_vertex(VertexKind::Teacher(teacher.id));
        for period in &teacher.availability {
            let pvid = g.add_vertex(VertexKind::Period(*period));
            g.add_edge(tvid, pvid);
        }
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Period;

    #[test]
    fn sharing_curriculum_creates_section_edge() {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", 10, &["A".to_string(), "B".to_string()])
            .unwrap();
        inst.add_room("R1", 20, &[Period(1), Period(2)]).unwrap();
        inst.add_teacher("T1", &["A".to_string()], &[Period(1), Period(2)])
            .unwrap();
        inst.add_teacher("T2", &["B".to_string()], &[Period(1), Period(2)])
            .unwrap();
        inst.create_course_sections().unwrap();

        let graph = build_conflict_graph(&inst);
        let secs = inst.sections();
        assert_eq!(secs.len(), 2);
        let v1 = graph.index_of(VertexKind::Section(secs[0].id)).unwrap();
        let v2 = graph.index_of(VertexKind::Section(secs[1].id)).unwrap();
        assert!(graph.neighbors(v1).contains(&v2));
    }
}
