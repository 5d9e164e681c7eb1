use rand::rngs::SmallRng;
use rand::Rng;

use evotsp_challenge::{route_length, Challenge};

use crate::config::Config;
use crate::operators::{crossover, mutate};
use crate::population::{init_population, select};

pub struct Evolution<'a> {
    pub challenge: &'a Challenge,
    pub params: Config,
}

impl<'a> Evolution<'a> {
    pub fn new(challenge: &'a Challenge, params: Config) -> Self {
        Self { challenge, params }
    }

    /// Runs the full generational loop and returns the best tour seen in
    /// any generation with its length. Instances with fewer than 3 cities
    /// yield an empty route with length 0.
    ///
    /// The population is replaced wholesale every generation; the
    /// best-ever record is bookkeeping only and is never reinserted, so
    /// the population itself may regress while the returned distance
    /// never does.
    pub fn run(&self, rng: &mut SmallRng) -> (Vec<usize>, f64) {
        let cities = &self.challenge.city_positions;
        if cities.len() < 3 {
            return (Vec::new(), 0.0);
        }
        let fixed_start = self.challenge.start_city.is_some();

        let mut population =
            init_population(cities.len(), self.challenge.start_city, &self.params, rng);
        let mut best_route: Vec<usize> = Vec::new();
        let mut best_distance = f64::INFINITY;

        for generation in 0..self.params.generations {
            let mating_pool = select(&population, cities, &self.params);

            let mut next_gen: Vec<Vec<usize>> = Vec::with_capacity(self.params.population_size);
            while next_gen.len() < self.params.population_size {
                // Two distinct slots of the mating pool.
                let p1 = rng.gen_range(0..mating_pool.len());
                let mut p2 = rng.gen_range(0..mating_pool.len());
                while p2 == p1 {
                    p2 = rng.gen_range(0..mating_pool.len());
                }
                let mut child = crossover(&mating_pool[p1], &mating_pool[p2], fixed_start, rng);
                mutate(&mut child, self.params.mutation_rate, rng);
                next_gen.push(child);
            }
            population = next_gen;

            let mut current_best = 0;
            let mut current_distance = f64::INFINITY;
            for (idx, route) in population.iter().enumerate() {
                let dist = route_length(route, cities);
                if dist < current_distance {
                    current_distance = dist;
                    current_best = idx;
                }
            }
            if current_distance < best_distance {
                best_distance = current_distance;
                best_route = population[current_best].clone();
            }

            self.print_trace(generation, current_distance, best_distance);
        }

        (best_route, best_distance)
    }

    fn print_trace(&self, generation: usize, current_distance: f64, best_distance: f64) {
        if self.params.trace_every == 0 || generation % self.params.trace_every != 0 {
            return;
        }
        println!(
            "gen {:>5} | current best {:>10.2} | best ever {:>10.2}",
            generation, current_distance, best_distance
        );
    }
}
