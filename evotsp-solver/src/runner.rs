use anyhow::Result;
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde_json::{Map, Value};

use evotsp_challenge::{Challenge, Solution};

use crate::config::Config;
use crate::evolution::Evolution;

pub struct Solver;

impl Solver {
    pub fn solve_challenge_instance(
        challenge: &Challenge,
        hyperparameters: &Option<Map<String, Value>>,
    ) -> Result<Solution> {
        challenge.validate()?;
        let params = Config::initialize(hyperparameters);
        params.validate()?;

        let mut rng = SmallRng::from_seed(StdRng::from_seed(challenge.seed).gen());
        let ga = Evolution::new(challenge, params);
        let (route, distance) = ga.run(&mut rng);
        Ok(Solution { route, distance })
    }
}
