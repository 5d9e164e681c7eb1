use rand::rngs::SmallRng;
use rand::Rng;

/// Order crossover. A contiguous slice of `parent1` is inherited
/// positionally; the remaining cities follow in `parent2`'s relative
/// order. With `fixed_start`, position 0 of `parent1` is pinned and never
/// crosses over.
///
/// Both parents must be permutations of the same city domain, and the
/// movable body must hold at least 2 cities (guaranteed once instances
/// with fewer than 3 cities are rejected upstream).
pub fn crossover(
    parent1: &[usize],
    parent2: &[usize],
    fixed_start: bool,
    rng: &mut SmallRng,
) -> Vec<usize> {
    let offset = usize::from(fixed_start);
    let body1 = &parent1[offset..];
    debug_assert!(body1.len() >= 2, "crossover needs at least two movable cities");

    // Two distinct cut points, used sorted; the inherited segment is
    // body1[start..end].
    let i = rng.gen_range(0..body1.len());
    let mut j = rng.gen_range(0..body1.len() - 1);
    if j >= i {
        j += 1;
    }
    let (start, end) = (i.min(j), i.max(j));
    let segment = &body1[start..end];

    let mut used = vec![false; parent1.len()];
    for &city in &parent1[..offset] {
        used[city] = true;
    }
    for &city in segment {
        used[city] = true;
    }

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..offset]);
    child.extend_from_slice(segment);
    for &city in parent2 {
        if !used[city] {
            used[city] = true;
            child.push(city);
        }
    }
    child
}

/// With probability `mutation_rate`, swaps two distinct positions drawn
/// from index 1 onward, so a fixed start is never disturbed. Requires
/// `route.len() >= 3`.
pub fn mutate(route: &mut [usize], mutation_rate: f64, rng: &mut SmallRng) {
    if !rng.gen_bool(mutation_rate) {
        return;
    }
    debug_assert!(route.len() >= 3, "mutation needs two distinct swap positions");

    let i = rng.gen_range(1..route.len());
    let mut j = rng.gen_range(1..route.len() - 1);
    if j >= i {
        j += 1;
    }
    route.swap(i, j);
}
