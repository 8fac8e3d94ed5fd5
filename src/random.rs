//! Seedable random helpers.
//!
//! Every stochastic decision in the crate goes through these functions so
//! that a fixed seed reproduces a run bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Picks an index uniformly from `0..len`.
///
/// Returns `None` if `len` is zero.
pub fn uniform_choice<R: Rng>(len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.random_range(0..len))
    }
}

/// Samples an index from a categorical distribution given by `weights`.
///
/// Weights need not be normalized. The degenerate cases are explicit:
///
/// - total weight `<= 0` (or NaN): every index is equally likely;
/// - total weight `+inf` (some weights overflowed): uniform over the
///   indices whose weight is infinite.
///
/// Returns `None` only when `weights` is empty.
///
/// # Examples
///
/// ```
/// use u_aco::random::{create_rng, weighted_choice};
///
/// let mut rng = create_rng(7);
/// // Index 1 has all the mass.
/// assert_eq!(weighted_choice(&[0.0, 3.0, 0.0], &mut rng), Some(1));
/// ```
pub fn weighted_choice<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let n = weights.len();
    if n == 0 {
        return None;
    }

    let total: f64 = weights.iter().sum();

    if total.is_nan() || total <= 0.0 {
        return uniform_choice(n, rng);
    }

    if total.is_infinite() {
        let overflowed: Vec<usize> = (0..n).filter(|&i| weights[i].is_infinite()).collect();
        return uniform_choice(overflowed.len(), rng).map(|k| overflowed[k]);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }

    // floating-point fallback: last index with positive weight
    weights.iter().rposition(|&w| w > 0.0).or(Some(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_empty_weights() {
        let mut rng = create_rng(1);
        assert_eq!(weighted_choice(&[], &mut rng), None);
        assert_eq!(uniform_choice(0, &mut rng), None);
    }

    #[test]
    fn test_single_positive_weight_always_chosen() {
        let mut rng = create_rng(3);
        for _ in 0..200 {
            assert_eq!(weighted_choice(&[0.0, 0.0, 2.5, 0.0], &mut rng), Some(2));
        }
    }

    #[test]
    fn test_zero_total_falls_back_to_uniform() {
        let mut rng = create_rng(5);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let i = weighted_choice(&[0.0; 4], &mut rng).expect("non-empty");
            counts[i] += 1;
        }
        for &c in &counts {
            assert!(c > 800 && c < 1200, "uniform fallback skewed: {counts:?}");
        }
    }

    #[test]
    fn test_infinite_total_restricts_to_overflowed() {
        let mut rng = create_rng(9);
        let weights = [1.0, f64::INFINITY, 5.0, f64::INFINITY];
        let mut seen = [false; 4];
        for _ in 0..500 {
            let i = weighted_choice(&weights, &mut rng).expect("non-empty");
            assert!(i == 1 || i == 3, "picked finite weight index {i}");
            seen[i] = true;
        }
        assert!(seen[1] && seen[3]);
    }

    #[test]
    fn test_proportional_sampling() {
        let mut rng = create_rng(11);
        let weights = [1.0, 3.0];
        let trials = 20_000;
        let ones = (0..trials)
            .filter(|_| weighted_choice(&weights, &mut rng) == Some(1))
            .count();
        let ratio = ones as f64 / trials as f64;
        assert!((ratio - 0.75).abs() < 0.02, "expected ~0.75, got {ratio}");
    }

    #[test]
    fn test_same_seed_same_choices() {
        let weights = [0.2, 0.5, 0.1, 0.9, 0.3];
        let mut a = create_rng(77);
        let mut b = create_rng(77);
        for _ in 0..100 {
            assert_eq!(
                weighted_choice(&weights, &mut a),
                weighted_choice(&weights, &mut b)
            );
        }
    }
}
