use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct Config {
    pub population_size: usize,
    pub mutation_rate: f64,
    pub generations: usize,
    /// Print a progress line every this many generations. 0 disables tracing.
    pub trace_every: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.01,
            generations: 300,
            trace_every: 0,
        }
    }
}

impl Config {
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> Self {
        let base_params = Self::default();
        let Some(map) = hyperparameters else {
            return base_params;
        };

        let mut merged_params = serde_json::to_value(base_params).expect("Config serializable");
        if let Value::Object(ref mut obj) = merged_params {
            for (k, v) in map {
                obj.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(merged_params).unwrap_or_else(|_| Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.population_size < 4 || self.population_size % 2 != 0 {
            return Err(anyhow!(
                "population_size must be even and at least 4, got {}",
                self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(anyhow!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.generations == 0 {
            return Err(anyhow!("generations must be at least 1"));
        }
        Ok(())
    }
}
