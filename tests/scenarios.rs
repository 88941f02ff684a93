//! Integration tests for the six concrete scenarios plus P1/P2/P4/P7.

use cb_ctt_solver::coloring::{dsatur_coloring, rlf_coloring};
use cb_ctt_solver::constraint;
use cb_ctt_solver::graph::build_conflict_graph;
use cb_ctt_solver::solver::{backtracking, genetic, grasp};
use cb_ctt_solver::types::{Assignment, Instance, Period, SolverConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn two_sections_one_room() -> Instance {
    let mut inst = Instance::new();
    inst.add_curriculum("C1", 100, &["A".to_string(), "B".to_string()]).unwrap();
    inst.add_room("R1", 100, &[Period(1), Period(2)]).unwrap();
    inst.add_teacher("T1", &["A".to_string()], &[Period(1), Period(2)]).unwrap();
    inst.add_teacher("T2", &["B".to_string()], &[Period(1), Period(2)]).unwrap();
    inst.create_course_sections().unwrap();
    inst
}

/// Scenario 1: two sections competing for one room, distinct periods required.
#[test]
fn scenario_two_sections_one_room() {
    let inst = two_sections_one_room();
    assert_eq!(inst.sections().len(), 2);

    let result = backtracking::solve(&inst, 1.0);
    assert!(result.found);
    assert_eq!(result.assignments.len(), 2);
    assert_ne!(result.assignments[0].period, result.assignments[1].period);

    let (feasible, violations) = constraint::check(&inst, &result.assignments);
    assert!(feasible, "{:?}", violations);
}

/// Scenario 2: infeasible by capacity — every solver reports it.
#[test]
fn scenario_infeasible_by_capacity() {
    let mut inst = Instance::new();
    inst.add_curriculum("C1", 100, &["A".to_string()]).unwrap();
    inst.add_room("R1", 50, &[Period(1)]).unwrap();
    inst.add_teacher("T1", &["A".to_string()], &[Period(1)]).unwrap();
    inst.create_course_sections().unwrap();
    assert_eq!(inst.sections()[0].total_students(), 100);

    let bt = backtracking::solve(&inst, 1.0);
    assert!(!bt.found);

    let config = SolverConfig {
        max_iterations: 5,
        max_local_search_iterations: 5,
        ..SolverConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let grasp_solution = grasp::solve(&inst, &config, &mut rng);
    assert!(!grasp_solution.feasible);
    assert!(grasp_solution.violations.iter().any(|v| v.to_lowercase().contains("capacity")));

    let ga_config = SolverConfig {
        population_size: 6,
        generations: 5,
        ..config
    };
    let mut rng2 = ChaCha8Rng::seed_from_u64(ga_config.seed);
    let ga_solution = genetic::solve(&inst, &ga_config, &mut rng2);
    assert!(!ga_solution.feasible);
}

/// Scenario 3: curriculum overlap forces distinct periods for the shared course.
#[test]
fn scenario_curriculum_overlap() {
    let mut inst = Instance::new();
    inst.add_curriculum("C1", 20, &["A".to_string(), "B".to_string()]).unwrap();
    inst.add_curriculum("C2", 20, &["B".to_string(), "C".to_string()]).unwrap();
    inst.add_room("R1", 50, &[Period(1), Period(2), Period(3)]).unwrap();
    inst.add_teacher(
        "T1",
        &["A".to_string(), "B".to_string(), "C".to_string()],
        &[Period(1), Period(2), Period(3)],
    )
    .unwrap();
    inst.create_course_sections().unwrap();
    assert_eq!(inst.sections().len(), 3);

    let result = backtracking::solve(&inst, 1.0);
    assert!(result.found);

    let section_a = inst.sections().iter().find(|s| s.course_name == "A").unwrap().id;
    let section_b = inst.sections().iter().find(|s| s.course_name == "B").unwrap().id;
    let section_c = inst.sections().iter().find(|s| s.course_name == "C").unwrap().id;
    let period_of = |sid| result.assignments.iter().find(|a| a.section_id == sid).unwrap().period;

    assert_ne!(period_of(section_a), period_of(section_b));
    assert_ne!(period_of(section_b), period_of(section_c));
}

/// Scenario 4: DSATUR on K4 uses exactly 4 colors.
#[test]
fn scenario_dsatur_on_k4() {
    use cb_ctt_solver::graph::{Graph, VertexKind};
    use cb_ctt_solver::types::CurriculumId;

    let mut graph = Graph::new();
    let vertices: Vec<usize> = (0..4).map(|i| graph.add_vertex(VertexKind::Curriculum(CurriculumId(i)))).collect();
    for i in 0..4 {
        for j in (i + 1)..4 {
            graph.add_edge(vertices[i], vertices[j]);
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let coloring = dsatur_coloring(&graph, &mut rng);
    assert_eq!(coloring.classes.len(), 4);
}

/// Scenario 5: RLF on K3,3 uses exactly 2 colors, one per side.
#[test]
fn scenario_rlf_on_bipartite() {
    use cb_ctt_solver::graph::{Graph, VertexKind};
    use cb_ctt_solver::types::{CurriculumId, RoomId};

    let mut graph = Graph::new();
    let left: Vec<usize> = (0..3).map(|i| graph.add_vertex(VertexKind::Curriculum(CurriculumId(i)))).collect();
    let right: Vec<usize> = (0..3).map(|i| graph.add_vertex(VertexKind::Room(RoomId(i)))).collect();
    for &l in &left {
        for &r in &right {
            graph.add_edge(l, r);
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let coloring = rlf_coloring(&graph, &mut rng);
    assert_eq!(coloring.classes.len(), 2);
}

/// Scenario 6: with alpha=0 (pure greedy), GRASP picks the higher-value period.
#[test]
fn scenario_preference_driven_objective() {
    let mut inst = Instance::new();
    inst.add_curriculum("C1", 10, &["A".to_string()]).unwrap();
    inst.add_room("R1", 20, &[Period(1), Period(2)]).unwrap();
    inst.add_teacher("T1", &["A".to_string()], &[Period(1), Period(2)]).unwrap();
    inst.create_course_sections().unwrap();
    inst.add_preference("A", Some(Period(1)), Some("R1".to_string()), Some("T1".to_string()), 10.0).unwrap();
    inst.add_preference("A", Some(Period(2)), Some("R1".to_string()), Some("T1".to_string()), 1.0).unwrap();

    let config = SolverConfig {
        alpha: 0.0,
        max_iterations: 1,
        max_local_search_iterations: 0,
        ..SolverConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let solution = grasp::solve(&inst, &config, &mut rng);

    assert!(solution.feasible);
    assert_eq!(solution.assignments.len(), 1);
    assert_eq!(solution.assignments[0].period, Period(1));
    assert_eq!(constraint::objective(&inst, &solution.assignments), 10.0);
}

/// P1: any solver's feasible=true assignment set genuinely satisfies I1-I7.
#[test]
fn p1_feasible_flag_implies_no_violations() {
    let inst = two_sections_one_room();
    let result = backtracking::solve(&inst, 1.0);
    assert!(result.found);
    let (feasible, violations) = constraint::check(&inst, &result.assignments);
    assert!(feasible && violations.is_empty());
}

/// P2: the objective sums the first matching preference value per assignment.
#[test]
fn p2_objective_sums_first_matching_preference() {
    let mut inst = Instance::new();
    inst.add_curriculum("C1", 10, &["A".to_string()]).unwrap();
    inst.add_room("R1", 20, &[Period(1)]).unwrap();
    inst.add_teacher("T1", &["A".to_string()], &[Period(1)]).unwrap();
    inst.create_course_sections().unwrap();
    inst.add_preference("A", Some(Period(1)), None, None, 3.0).unwrap();
    inst.add_preference("A", Some(Period(1)), Some("R1".to_string()), None, 7.0).unwrap();

    let section_id = inst.sections()[0].id;
    let assignments = vec![Assignment::new(section_id, Period(1), inst.rooms()[0].id, inst.teachers()[0].id)];
    assert_eq!(constraint::objective(&inst, &assignments), 3.0);
}

/// P4: fixed seed + identical input yields identical output, across GRASP and GA.
#[test]
fn p4_determinism_across_repeated_runs() {
    let inst = two_sections_one_room();
    let config = SolverConfig::default();

    let mut rng1 = ChaCha8Rng::seed_from_u64(config.seed);
    let a = grasp::solve(&inst, &config, &mut rng1);
    let mut rng2 = ChaCha8Rng::seed_from_u64(config.seed);
    let b = grasp::solve(&inst, &config, &mut rng2);
    assert_eq!(a.assignments, b.assignments);
    assert_eq!(a.cost, b.cost);

    let ga_config = SolverConfig {
        population_size: 8,
        generations: 5,
        ..config
    };
    let mut rng3 = ChaCha8Rng::seed_from_u64(ga_config.seed);
    let c = genetic::solve(&inst, &ga_config, &mut rng3);
    let mut rng4 = ChaCha8Rng::seed_from_u64(ga_config.seed);
    let d = genetic::solve(&inst, &ga_config, &mut rng4);
    assert_eq!(c.assignments, d.assignments);
}

/// P7: repairing an already-feasible assignment set leaves it unchanged.
#[test]
fn p7_repair_is_idempotent_on_feasible_input() {
    let inst = two_sections_one_room();
    let result = backtracking::solve(&inst, 1.0);
    assert!(result.found);

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut assignments = result.assignments.clone();
    let feasible = constraint::repair_assignments(&inst, &mut assignments, &mut rng);

    assert!(feasible);
    assert_eq!(assignments, result.assignments);
}
