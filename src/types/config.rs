use serde::{Deserialize, Serialize};

/// Tunables for the metaheuristic solvers, loaded from an optional
/// `config.toml` next to the instance data (see `parser::load_config_or_default`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// GRASP's RCL randomization parameter: 0 = pure greedy, 1 = pure random.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// GRASP iteration budget.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// GRASP local-search iteration budget per constructed solution.
    #[serde(default = "default_max_local_search_iterations")]
    pub max_local_search_iterations: u32,
    /// Genetic algorithm population size.
    #[serde(default = "default_population_size")]
    pub population_size: u32,
    /// Genetic algorithm generation budget.
    #[serde(default = "default_generations")]
    pub generations: u32,
    /// Genetic algorithm mutation probability.
    #[serde(default = "default_p_m")]
    pub p_m: f64,
    /// Genetic algorithm crossover probability.
    #[serde(default = "default_p_c")]
    pub p_c: f64,
    /// Genetic algorithm tournament-selection sample size.
    #[serde(default = "default_tournament_size")]
    pub tournament_size: u32,
    /// Backtracking solver wall-clock budget.
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: f64,
    /// Seed for the single seedable RNG shared by a solver instance (§5).
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_alpha() -> f64 {
    0.3
}

fn default_max_iterations() -> u32 {
    100
}

fn default_max_local_search_iterations() -> u32 {
    50
}

fn default_population_size() -> u32 {
    50
}

fn default_generations() -> u32 {
    100
}

fn default_p_m() -> f64 {
    0.1
}

fn default_p_c() -> f64 {
    0.8
}

fn default_tournament_size() -> u32 {
    3
}

fn default_time_limit_secs() -> f64 {
    1.0
}

fn default_seed() -> u64 {
    42
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            max_iterations: default_max_iterations(),
            max_local_search_iterations: default_max_local_search_iterations(),
            population_size: default_population_size(),
            generations: default_generations(),
            p_m: default_p_m(),
            p_c: default_p_c(),
            tournament_size: default_tournament_size(),
            time_limit_secs: default_time_limit_secs(),
            seed: default_seed(),
        }
    }
}
