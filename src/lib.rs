//! Curriculum-based course timetabling solver core.
//!
//! The crate reduces a timetabling instance to a conflict graph, colors it
//! with greedy/DSATUR/RLF heuristics or an exact time-limited backtracking
//! search, and polishes feasible-but-suboptimal solutions with GRASP or a
//! memetic genetic algorithm. All four solvers share one evaluation kernel
//! (`constraint`) so "feasible" and "good" mean the same thing everywhere.
//!
//! # Example
//!
//! ```no_run
//! use cb_ctt_solver::parser::load_instance_from_dir;
//! use cb_ctt_solver::solver::backtracking::solve;
//! use cb_ctt_solver::types::SolverConfig;
//! use std::path::Path;
//!
//! let mut instance = load_instance_from_dir(Path::new("./data/demo")).unwrap();
//! instance.create_course_sections().unwrap();
//! let config = SolverConfig::default();
//! let result = solve(&instance, config.time_limit_secs);
//! println!("found: {}", result.found);
//! ```

pub mod coloring;
pub mod constraint;
pub mod error;
pub mod graph;
pub mod parser;
pub mod reporter;
pub mod solver;
pub mod types;

#[cfg(any(test, feature = "bench-support"))]
pub mod testutil;

pub use error::{Result, SchedulerError};
