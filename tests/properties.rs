//! Property-based tests for P3 (section splitting), P5 (coloring
//! correctness), and P6 (candidate-feasibility consistency).

use cb_ctt_solver::coloring::{dsatur_coloring, greedy_coloring, rlf_coloring};
use cb_ctt_solver::constraint::{candidate_triples, is_candidate_feasible};
use cb_ctt_solver::graph::{Graph, VertexKind};
use cb_ctt_solver::types::{CurriculumId, Instance, Period};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_graph(num_vertices: usize, edge_seed: u64, edge_density: f64) -> Graph {
    let mut graph = Graph::new();
    let vertices: Vec<usize> = (0..num_vertices)
        .map(|i| graph.add_vertex(VertexKind::Curriculum(CurriculumId(i as u32))))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(edge_seed);
    for i in 0..num_vertices {
        for j in (i + 1)..num_vertices {
            if rng.gen_bool(edge_density) {
                graph.add_edge(vertices[i], vertices[j]);
            }
        }
    }
    graph
}

fn assert_proper_coloring(graph: &Graph, coloring: &cb_ctt_solver::coloring::Coloring) {
    for v in 0..graph.len() {
        for &n in graph.neighbors(v) {
            if n > v {
                assert_ne!(coloring.colors[v], coloring.colors[n], "adjacent vertices {v} and {n} share a color");
            }
        }
    }
}

proptest! {
    /// P5: DSATUR, RLF, and greedy never assign the same color to adjacent vertices.
    #[test]
    fn p5_colorings_are_proper(num_vertices in 1usize..12, edge_seed in any::<u64>(), density in 0.0f64..1.0) {
        let graph = random_graph(num_vertices, edge_seed, density);

        let mut rng1 = ChaCha8Rng::seed_from_u64(edge_seed);
        let dsatur = dsatur_coloring(&graph, &mut rng1);
        assert_proper_coloring(&graph, &dsatur);

        let mut rng2 = ChaCha8Rng::seed_from_u64(edge_seed.wrapping_add(1));
        let rlf = rlf_coloring(&graph, &mut rng2);
        assert_proper_coloring(&graph, &rlf);

        let mut rng3 = ChaCha8Rng::seed_from_u64(edge_seed.wrapping_add(2));
        let greedy = greedy_coloring(&graph, None, true, &mut rng3);
        assert_proper_coloring(&graph, &greedy);
    }

    /// P3: section splitting preserves total student count and respects max capacity.
    #[test]
    fn p3_section_splitting_preserves_totals(
        num_students in 1u32..500,
        room_capacity in 10u32..200,
    ) {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", num_students, &["A".to_string()]).unwrap();
        inst.add_room("R1", room_capacity, &[Period(1)]).unwrap();
        inst.add_teacher("T1", &["A".to_string()], &[Period(1)]).unwrap();
        inst.create_course_sections().unwrap();

        let total: u32 = inst.sections().iter().map(|s| s.total_students()).sum();
        prop_assert_eq!(total, num_students);
        for section in inst.sections() {
            prop_assert!(section.total_students() <= room_capacity);
        }
    }

    /// P6: a candidate reported feasible by `is_candidate_feasible` keeps the
    /// whole assignment set feasible once placed alongside the others.
    #[test]
    fn p6_candidate_feasibility_is_consistent(
        num_students in 1u32..80,
        room_capacity in 80u32..150,
    ) {
        let mut inst = Instance::new();
        inst.add_curriculum("C1", num_students, &["A".to_string(), "B".to_string()]).unwrap();
        inst.add_room("R1", room_capacity, &[Period(1), Period(2)]).unwrap();
        inst.add_teacher("T1", &["A".to_string()], &[Period(1), Period(2)]).unwrap();
        inst.add_teacher("T2", &["B".to_string()], &[Period(1), Period(2)]).unwrap();
        inst.create_course_sections().unwrap();

        let section_a = inst.sections().iter().find(|s| s.course_name == "A").unwrap().id;
        let section_b = inst.sections().iter().find(|s| s.course_name == "B").unwrap().id;

        let candidates_a = candidate_triples(&inst, section_a);
        prop_assume!(!candidates_a.is_empty());
        let (period_a, room_a, teacher_a) = candidates_a[0];
        let placed = vec![cb_ctt_solver::types::Assignment::new(section_a, period_a, room_a, teacher_a)];

        for &(period_b, room_b, teacher_b) in &candidate_triples(&inst, section_b) {
            if is_candidate_feasible(&inst, section_b, period_b, room_b, teacher_b, &placed) {
                let mut combined = placed.clone();
                combined.push(cb_ctt_solver::types::Assignment::new(section_b, period_b, room_b, teacher_b));
                let (feasible, violations) = cb_ctt_solver::constraint::check(&inst, &combined);
                prop_assert!(feasible, "{:?}", violations);
            }
        }
    }
}
