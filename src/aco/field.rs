//! Pheromone and visibility fields.
//!
//! Both are dense n×n grids in row-major order with n fixed for the run.

use crate::matrix::DistanceMatrix;

/// Initial value of every pheromone entry.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Added to distances before inversion so co-located points stay finite.
pub const VISIBILITY_EPSILON: f64 = 1e-12;

/// Visibility on the diagonal. Never used for selection.
pub const VISIBILITY_DIAGONAL: f64 = 1e-6;

/// Static heuristic desirability `1 / (d + ε)` of every edge.
#[derive(Debug, Clone)]
pub struct VisibilityField {
    data: Vec<f64>,
    size: usize,
}

impl VisibilityField {
    /// Derives visibility from a distance matrix.
    ///
    /// Unreachable (`+inf`) pairs get visibility 0.
    pub fn from_distances(distances: &DistanceMatrix) -> Self {
        let size = distances.size();
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let v = if i == j {
                    VISIBILITY_DIAGONAL
                } else {
                    1.0 / (distances.get(i, j) + VISIBILITY_EPSILON)
                };
                data.push(v);
            }
        }
        Self { data, size }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// Learned edge desirability τ, evaporated and reinforced every iteration.
///
/// Entries stay non-negative: evaporation multiplies by a factor in
/// `[0, 1)` and reinforcement only adds non-negative amounts.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneField {
    /// Creates a field with every entry set to `value`.
    pub fn uniform(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`.
    ///
    /// Full evaporation (`rate >= 1`) resets entries to 0, including ones
    /// that overflowed to `+inf` (`inf * 0` would be NaN).
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        if keep <= 0.0 {
            self.data.fill(0.0);
            return;
        }
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to both directions of every cyclic edge of `tour`.
    pub fn deposit(&mut self, tour: &[usize], amount: f64) {
        let n = tour.len();
        for i in 0..n {
            let a = tour[i];
            let b = tour[(i + 1) % n];
            self.data[a * self.size + b] += amount;
            self.data[b * self.size + a] += amount;
        }
    }

    /// Caps every entry at `max`.
    pub fn clamp_max(&mut self, max: f64) {
        for tau in &mut self.data {
            if *tau > max {
                *tau = max;
            }
        }
    }

    /// Largest entry in the field.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest entry in the field.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
