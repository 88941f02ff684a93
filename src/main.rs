use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::process::ExitCode;

use cb_ctt_solver::parser::{load_config_or_default, load_instance_from_dir, load_instance_snapshot, save_instance_snapshot};
use cb_ctt_solver::reporter::{generate_reports, print_summary, OutputFormat};
use cb_ctt_solver::solver::{backtracking, coloring_driver, genetic, grasp};

#[derive(Parser)]
#[command(name = "cb-ctt-solver")]
#[command(about = "Curriculum-based course timetabling solver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Algorithm {
    Backtracking,
    Dsatur,
    Rlf,
    Grasp,
    Genetic,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a timetabling instance and write an updated snapshot plus reports.
    Solve {
        /// Directory containing curriculums.txt/rooms.txt/teachers.txt[/preferences.txt]
        #[arg(short, long)]
        data: PathBuf,

        /// Search/metaheuristic to run.
        #[arg(short, long, value_enum, default_value_t = Algorithm::Grasp)]
        algorithm: Algorithm,

        /// Optional config.toml overriding solver defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Where to write the solved instance snapshot (JSON).
        #[arg(short, long, default_value = "./output/instance.json")]
        snapshot: PathBuf,

        /// Output directory for reports.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all.
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress progress output, print a JSON summary only.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check hard-constraint feasibility of an already-solved snapshot.
    Check {
        /// Path to an instance snapshot JSON written by `solve`.
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Show every violation, not just the feasibility verdict.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render reports from an already-solved snapshot.
    Report {
        /// Path to an instance snapshot JSON written by `solve`.
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Output directory for reports.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all.
        #[arg(short, long, default_value = "all")]
        format: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            data,
            algorithm,
            config,
            snapshot,
            output,
            format,
            quiet,
        } => run_solve(&data, algorithm, config.as_deref(), &snapshot, &output, &format, quiet),
        Commands::Check { snapshot, verbose } => run_check(&snapshot, verbose),
        Commands::Report { snapshot, output, format } => run_report(&snapshot, &output, &format),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}

fn run_solve(
    data: &PathBuf,
    algorithm: Algorithm,
    config_path: Option<&std::path::Path>,
    snapshot: &PathBuf,
    output: &PathBuf,
    format: &str,
    quiet: bool,
) -> Result<ExitCode> {
    let mut instance = load_instance_from_dir(data).context("failed to load instance data")?;
    instance.create_course_sections().context("failed to split courses into sections")?;

    let config = match config_path {
        Some(path) => load_config_or_default(path),
        None => cb_ctt_solver::types::SolverConfig::default(),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    if !quiet {
        println!(
            "Loaded {} curriculums, {} rooms, {} teachers, {} sections",
            instance.curriculums().len(),
            instance.rooms().len(),
            instance.teachers().len(),
            instance.sections().len()
        );
        println!("Solving with {:?}...\n", algorithm);
    }

    let (feasible, objective) = match algorithm {
        Algorithm::Backtracking => {
            let result = backtracking::solve(&instance, config.time_limit_secs);
            instance.assignments = result.assignments;
            (result.found, instance.calculate_objective())
        }
        Algorithm::Dsatur => {
            coloring_driver::solve(&mut instance, coloring_driver::Heuristic::Dsatur, &mut rng);
            let (feasible, _) = instance.check_hard_constraints();
            (feasible, instance.calculate_objective())
        }
        Algorithm::Rlf => {
            coloring_driver::solve(&mut instance, coloring_driver::Heuristic::Rlf, &mut rng);
            let (feasible, _) = instance.check_hard_constraints();
            (feasible, instance.calculate_objective())
        }
        Algorithm::Grasp => {
            let solution = grasp::solve(&instance, &config, &mut rng);
            instance.assignments = solution.assignments;
            (solution.feasible, instance.calculate_objective())
        }
        Algorithm::Genetic => {
            let solution = genetic::solve(&instance, &config, &mut rng);
            instance.assignments = solution.assignments;
            (solution.feasible, instance.calculate_objective())
        }
    };

    if let Some(parent) = snapshot.parent() {
        std::fs::create_dir_all(parent)?;
    }
    save_instance_snapshot(&instance, snapshot).context("failed to write instance snapshot")?;

    let formats = parse_formats(format);
    generate_reports(&instance, &instance.assignments, output, &formats)?;

    if quiet {
        let summary = cb_ctt_solver::reporter::generate_json_summary(&instance, &instance.assignments, feasible, objective)?;
        println!("{}", summary);
    } else {
        print_summary(&instance, &instance.assignments, feasible, objective);
        println!("Snapshot written to: {}", snapshot.display().to_string().green());
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(ExitCode::from(if feasible { 0 } else { 2 }))
}

fn run_check(snapshot: &PathBuf, verbose: bool) -> Result<ExitCode> {
    let instance = load_instance_snapshot(snapshot).context("failed to load instance snapshot")?;
    let (feasible, violations) = instance.check_hard_constraints();

    if feasible {
        println!("{}", "Feasible".green().bold());
    } else {
        println!("{}", "Infeasible".red().bold());
        if verbose {
            for v in &violations {
                println!("  - {}", v);
            }
        } else {
            println!("  {} violation(s); rerun with --verbose for detail", violations.len());
        }
    }

    Ok(ExitCode::from(if feasible { 0 } else { 1 }))
}

fn run_report(snapshot: &PathBuf, output: &PathBuf, format: &str) -> Result<ExitCode> {
    let instance = load_instance_snapshot(snapshot).context("failed to load instance snapshot")?;
    let formats = parse_formats(format);
    generate_reports(&instance, &instance.assignments, output, &formats)?;
    println!("Reports written to: {}", output.display().to_string().green());
    Ok(ExitCode::from(0))
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format.eq_ignore_ascii_case("all") {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }
    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}
