use std::collections::HashSet;

use anyhow::{anyhow, Result};
use rand::{
    rngs::{SmallRng, StdRng},
    Rng, SeedableRng,
};
use serde::{Deserialize, Serialize};

/// Tolerance when comparing a reported tour distance against its
/// recomputation from the city coordinates.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// A closed tour and its length. An empty route with distance 0 is the
/// degenerate "no tour" result for instances with fewer than 3 cities;
/// callers distinguish it from a zero-length tour by checking for an
/// empty route.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Solution {
    pub route: Vec<usize>,
    pub distance: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub num_cities: usize,
    pub city_positions: Vec<(f64, f64)>,
    pub start_city: Option<usize>,
}

impl Challenge {
    pub fn generate_instance(
        seed: &[u8; 32],
        num_cities: usize,
        start_city: Option<usize>,
    ) -> Result<Self> {
        if num_cities < 3 {
            return Err(anyhow!("Number of cities must be at least 3"));
        }
        if let Some(start) = start_city {
            if start >= num_cities {
                return Err(anyhow!(
                    "Start city ({}) is out of range for {} cities",
                    start,
                    num_cities
                ));
            }
        }
        let mut rng = SmallRng::from_seed(StdRng::from_seed(seed.clone()).gen());

        // Integer grid so duplicate positions can be rejected exactly.
        let mut city_positions: Vec<(f64, f64)> = Vec::with_capacity(num_cities);
        let mut seen: HashSet<(i32, i32)> = HashSet::with_capacity(num_cities);
        while city_positions.len() < num_cities {
            let pos = (rng.gen_range(0..=1000), rng.gen_range(0..=1000));
            if seen.contains(&pos) {
                continue;
            }
            seen.insert(pos);
            city_positions.push((pos.0 as f64, pos.1 as f64));
        }

        Ok(Self {
            seed: seed.clone(),
            num_cities,
            city_positions,
            start_city,
        })
    }

    /// Wraps externally supplied coordinates, e.g. from an interactive
    /// session. Fewer than 3 cities is accepted here; solvers report the
    /// degenerate empty solution for such instances.
    pub fn from_cities(
        seed: &[u8; 32],
        cities: Vec<(f64, f64)>,
        start_city: Option<usize>,
    ) -> Result<Self> {
        if let Some(start) = start_city {
            if start >= cities.len() {
                return Err(anyhow!(
                    "Start city ({}) is out of range for {} cities",
                    start,
                    cities.len()
                ));
            }
        }
        Ok(Self {
            seed: seed.clone(),
            num_cities: cities.len(),
            city_positions: cities,
            start_city,
        })
    }

    /// Re-checks the internal consistency of a (possibly deserialized)
    /// instance before a solver touches it.
    pub fn validate(&self) -> Result<()> {
        if self.num_cities != self.city_positions.len() {
            return Err(anyhow!(
                "num_cities ({}) does not match number of city positions ({})",
                self.num_cities,
                self.city_positions.len()
            ));
        }
        if let Some(start) = self.start_city {
            if start >= self.num_cities {
                return Err(anyhow!(
                    "Start city ({}) is out of range for {} cities",
                    start,
                    self.num_cities
                ));
            }
        }
        Ok(())
    }

    pub fn route_length(&self, route: &[usize]) -> f64 {
        route_length(route, &self.city_positions)
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<()> {
        self.validate()?;
        if solution.route.len() != self.num_cities {
            return Err(anyhow!(
                "Route length ({}) does not match number of cities ({})",
                solution.route.len(),
                self.num_cities
            ));
        }
        let visited = solution.route.iter().cloned().collect::<HashSet<usize>>();
        if visited.len() != solution.route.len() {
            return Err(anyhow!("Route contains duplicate cities"));
        }
        if solution.route.iter().any(|&city| city >= self.num_cities) {
            return Err(anyhow!("Route contains invalid cities"));
        }
        if let Some(start) = self.start_city {
            if solution.route[0] != start {
                return Err(anyhow!(
                    "Route starts at city {} instead of the fixed start {}",
                    solution.route[0],
                    start
                ));
            }
        }
        let recomputed = self.route_length(&solution.route);
        if (recomputed - solution.distance).abs() > DISTANCE_EPSILON {
            return Err(anyhow!(
                "Reported distance ({}) does not match recomputed distance ({})",
                solution.distance,
                recomputed
            ));
        }
        Ok(())
    }
}

/// Total length of `route` as a closed tour, including the edge from the
/// last city back to the first. Routes with fewer than 2 cities have
/// length 0.
pub fn route_length(route: &[usize], cities: &[(f64, f64)]) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut dist = 0.0;
    for i in 0..route.len() {
        let (x1, y1) = cities[route[i]];
        let (x2, y2) = cities[route[(i + 1) % route.len()]];
        dist += (x2 - x1).hypot(y2 - y1);
    }
    dist
}
