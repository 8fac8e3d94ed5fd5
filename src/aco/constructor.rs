//! Probabilistic tour construction.
//!
//! One ant walks from a start location, at each step choosing the next
//! unvisited location with probability proportional to
//! `τ[current][c]^α · η[current][c]^β`.

use super::field::{PheromoneField, VisibilityField};
use crate::random::weighted_choice;
use rand::Rng;

/// Builds one tour starting at `start`.
///
/// The result is a permutation of `0..n` with `start` first, where `n` is the
/// field size. Selection weights falling to zero in total are resolved by
/// [`weighted_choice`]'s uniform fallback.
///
/// # Panics
///
/// Panics if `start >= n`.
pub fn construct_tour<R: Rng>(
    start: usize,
    pheromone: &PheromoneField,
    visibility: &VisibilityField,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = pheromone.size();
    assert!(start < n, "start {start} out of range for {n} locations");

    let mut tour = Vec::with_capacity(n);
    tour.push(start);

    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut weights = Vec::with_capacity(unvisited.len());
    let mut current = start;

    while !unvisited.is_empty() {
        weights.clear();
        weights.extend(unvisited.iter().map(|&c| {
            selection_weight(
                pheromone.get(current, c),
                visibility.get(current, c),
                alpha,
                beta,
            )
        }));

        // Always Some: the candidate list is non-empty here.
        let Some(k) = weighted_choice(&weights, rng) else {
            break;
        };

        let next = unvisited.swap_remove(k);
        tour.push(next);
        current = next;
    }

    tour
}

/// Unnormalized attractiveness of moving along an edge.
#[inline]
pub fn selection_weight(tau: f64, eta: f64, alpha: f64, beta: f64) -> f64 {
    tau.powf(alpha) * eta.powf(beta)
}
