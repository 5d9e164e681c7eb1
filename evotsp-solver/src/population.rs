use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;

use evotsp_challenge::route_length;

use crate::config::Config;

/// Builds `population_size` independent random permutations of
/// `0..num_cities`. With a fixed start every route begins with that city
/// followed by a shuffle of the rest.
pub fn init_population(
    num_cities: usize,
    start_city: Option<usize>,
    params: &Config,
    rng: &mut SmallRng,
) -> Vec<Vec<usize>> {
    let mut population = Vec::with_capacity(params.population_size);
    for _ in 0..params.population_size {
        let route = match start_city {
            Some(start) => {
                let mut rest: Vec<usize> = (0..num_cities).filter(|&c| c != start).collect();
                rest.shuffle(rng);
                let mut route = Vec::with_capacity(num_cities);
                route.push(start);
                route.extend(rest);
                route
            }
            None => {
                let mut route: Vec<usize> = (0..num_cities).collect();
                route.shuffle(rng);
                route
            }
        };
        population.push(route);
    }
    population
}

/// Ranks the population ascending by tour length and keeps the better
/// half as the mating pool. The sort is stable, so equal-length routes
/// keep their relative order.
pub fn select(
    population: &[Vec<usize>],
    cities: &[(f64, f64)],
    params: &Config,
) -> Vec<Vec<usize>> {
    let mut ranked: Vec<(f64, usize)> = population
        .iter()
        .enumerate()
        .map(|(idx, route)| (route_length(route, cities), idx))
        .collect();
    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    ranked
        .iter()
        .take(params.population_size / 2)
        .map(|&(_, idx)| population[idx].clone())
        .collect()
}
