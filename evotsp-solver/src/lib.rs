mod config;
mod evolution;
mod operators;
mod population;
mod runner;

pub use config::Config;
pub use evolution::Evolution;
pub use operators::{crossover, mutate};
pub use population::{init_population, select};
pub use runner::Solver;

use anyhow::Result;
use serde_json::{Map, Value};

use evotsp_challenge::{Challenge, Solution};

pub fn solve_challenge(
    challenge: &Challenge,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<Solution> {
    Solver::solve_challenge_instance(challenge, hyperparameters)
}
