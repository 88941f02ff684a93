//! Benchmarks DSATUR, RLF, and GRASP against a generated mid-size instance.
//! Run with `cargo bench --features bench-support`.

use cb_ctt_solver::graph::build_conflict_graph;
use cb_ctt_solver::solver::{coloring_driver, grasp};
use cb_ctt_solver::testutil::{generate_random_instance, GeneratorParams};
use cb_ctt_solver::types::SolverConfig;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn mid_size_params() -> GeneratorParams {
    GeneratorParams {
        num_courses: 20,
        num_curriculums: 12,
        num_rooms: 8,
        num_teachers: 15,
        num_periods: 10,
        ..GeneratorParams::default()
    }
}

fn bench_conflict_graph_reduction(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let instance = generate_random_instance(&mid_size_params(), &mut rng);

    c.bench_function("build_conflict_graph", |b| {
        b.iter(|| build_conflict_graph(&instance));
    });
}

fn bench_dsatur_driver(c: &mut Criterion) {
    let mut gen_rng = ChaCha8Rng::seed_from_u64(2);
    let instance = generate_random_instance(&mid_size_params(), &mut gen_rng);

    c.bench_function("dsatur_driver_solve", |b| {
        b.iter(|| {
            let mut inst = instance.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            coloring_driver::solve(&mut inst, coloring_driver::Heuristic::Dsatur, &mut rng);
        });
    });
}

fn bench_rlf_driver(c: &mut Criterion) {
    let mut gen_rng = ChaCha8Rng::seed_from_u64(3);
    let instance = generate_random_instance(&mid_size_params(), &mut gen_rng);

    c.bench_function("rlf_driver_solve", |b| {
        b.iter(|| {
            let mut inst = instance.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            coloring_driver::solve(&mut inst, coloring_driver::Heuristic::Rlf, &mut rng);
        });
    });
}

fn bench_grasp(c: &mut Criterion) {
    let mut gen_rng = ChaCha8Rng::seed_from_u64(4);
    let instance = generate_random_instance(&mid_size_params(), &mut gen_rng);
    let config = SolverConfig {
        max_iterations: 20,
        max_local_search_iterations: 20,
        ..SolverConfig::default()
    };

    c.bench_function("grasp_solve", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            grasp::solve(&instance, &config, &mut rng);
        });
    });
}

criterion_group!(benches, bench_conflict_graph_reduction, bench_dsatur_driver, bench_rlf_driver, bench_grasp);
criterion_main!(benches);
