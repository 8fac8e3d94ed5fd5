//! Colony execution loop.
//!
//! # Algorithm
//!
//! 1. Initialize pheromone to 1.0 and derive visibility from distances
//! 2. At each iteration:
//!    a. Every ant picks a random start and constructs a tour
//!    b. Update the global best (strict improvement only)
//!    c. Record the global best in the convergence history
//!    d. Evaporate all pheromone, then reinforce each ant's edges by `Q / L`
//! 3. Stop after the configured number of iterations
//!
//! Ants of one iteration only read shared state, so they may run in
//! parallel. Each ant draws from its own generator seeded from the engine's
//! master generator, which keeps results identical with or without rayon.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use super::config::AcoConfig;
use super::constructor::construct_tour;
use super::field::{PheromoneField, VisibilityField, INITIAL_PHEROMONE};
use crate::error::Result;
use crate::matrix::{tour_length, DistanceMatrix};
use crate::random::create_rng;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyResult {
    /// Best tour found: a permutation of `0..n`, read as a cycle.
    pub best_tour: Vec<usize>,

    /// Cyclic length of `best_tour`.
    pub best_length: f64,

    /// Global best length after each iteration. Non-increasing.
    pub history: Vec<f64>,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Iteration (0-based) in which `best_tour` was first found.
    pub best_iteration: usize,
}

/// One stop-to-stop segment of a closed route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// Position of the leg in the route, starting at 0.
    pub position: usize,
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

impl ColonyResult {
    /// The best tour with its first location appended, closing the loop.
    pub fn closed_route(&self) -> Vec<usize> {
        let mut route = self.best_tour.clone();
        if let Some(&first) = self.best_tour.first() {
            route.push(first);
        }
        route
    }

    /// Legs of the best tour including the closing leg, with raw distances.
    pub fn legs(&self, distances: &DistanceMatrix) -> Vec<RouteLeg> {
        let n = self.best_tour.len();
        (0..n)
            .map(|i| {
                let from = self.best_tour[i];
                let to = self.best_tour[(i + 1) % n];
                RouteLeg {
                    position: i,
                    from,
                    to,
                    distance: distances.get(from, to),
                }
            })
            .collect()
    }

    /// Percentage by which the final best improves on the first iteration's
    /// best. Zero when the history is empty or starts at a non-positive value.
    pub fn improvement_percent(&self) -> f64 {
        match self.history.first() {
            Some(&initial) if initial > 0.0 => (initial - self.best_length) / initial * 100.0,
            _ => 0.0,
        }
    }
}

/// Summary of a single iteration, passed to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    /// 0-based iteration index.
    pub iteration: usize,
    /// Shortest tour built by this iteration's ants.
    pub iteration_best: f64,
    /// Global best after this iteration.
    pub global_best: f64,
    /// Whether this iteration improved the global best.
    pub improved: bool,
}

/// ACO state for one run over one distance matrix.
///
/// Owns the pheromone field and the best-so-far pair exclusively. Drive it
/// with [`step`](Self::step) and collect the outcome with
/// [`finish`](Self::finish), or use [`AcoRunner`] to do both.
pub struct ColonyEngine<'a> {
    distances: &'a DistanceMatrix,
    config: AcoConfig,
    visibility: VisibilityField,
    pheromone: PheromoneField,
    rng: StdRng,
    best_tour: Option<Vec<usize>>,
    best_length: f64,
    best_iteration: usize,
    history: Vec<f64>,
}

impl<'a> ColonyEngine<'a> {
    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// Returns the configuration error from [`AcoConfig::validate`]; no
    /// field is allocated in that case.
    pub fn new(distances: &'a DistanceMatrix, config: AcoConfig) -> Result<Self> {
        config.validate()?;

        let n = distances.size();
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        Ok(Self {
            distances,
            visibility: VisibilityField::from_distances(distances),
            pheromone: PheromoneField::uniform(n, INITIAL_PHEROMONE),
            rng,
            best_tour: None,
            best_length: f64::INFINITY,
            best_iteration: 0,
            history: Vec::with_capacity(config.iterations),
            config,
        })
    }

    /// Runs one iteration: all ants, best update, history, evaporation and
    /// reinforcement, in that order.
    pub fn step(&mut self) -> IterationReport {
        let iteration = self.history.len();

        // One independent stream per ant, drawn before any ant runs.
        let seeds: Vec<u64> = (0..self.config.ants).map(|_| self.rng.random()).collect();
        let ants = self.build_tours(&seeds);

        let mut iteration_best = f64::INFINITY;
        let mut improved = false;
        for (tour, length) in &ants {
            iteration_best = iteration_best.min(*length);
            if *length < self.best_length {
                self.best_length = *length;
                self.best_tour = Some(tour.clone());
                self.best_iteration = iteration;
                improved = true;
            }
        }

        self.history.push(self.best_length);

        self.pheromone.evaporate(self.config.evaporation_rate);
        for (tour, length) in &ants {
            if *length > 0.0 && length.is_finite() {
                self.pheromone.deposit(tour, self.config.q / length);
            }
        }
        if let Some(max) = self.config.max_pheromone {
            self.pheromone.clamp_max(max);
        }

        if improved {
            debug!(
                "iteration {iteration}: new best {:.6} (iteration best {iteration_best:.6})",
                self.best_length
            );
        }
        trace!(
            "iteration {iteration}: pheromone range [{:.3e}, {:.3e}]",
            self.pheromone.min_value(),
            self.pheromone.max_value()
        );

        IterationReport {
            iteration,
            iteration_best,
            global_best: self.best_length,
            improved,
        }
    }

    /// Constructs and evaluates one tour per seed, preserving seed order.
    fn build_tours(&self, seeds: &[u64]) -> Vec<(Vec<usize>, f64)> {
        let n = self.distances.size();
        let distances = self.distances;
        let (pheromone, visibility) = (&self.pheromone, &self.visibility);
        let (alpha, beta) = (self.config.alpha, self.config.beta);

        let ant = move |seed: u64| {
            let mut rng = create_rng(seed);
            let start = rng.random_range(0..n);
            let tour = construct_tour(start, pheromone, visibility, alpha, beta, &mut rng);
            let length = tour_length(&tour, distances);
            (tour, length)
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return seeds.par_iter().map(|&s| ant(s)).collect();
            }
        }

        seeds.iter().map(|&s| ant(s)).collect()
    }

    /// Consumes the engine and returns the run's outcome.
    ///
    /// If no tour was ever recorded (the engine never stepped), the identity
    /// tour `0..n` is returned with its evaluated length.
    pub fn finish(self) -> ColonyResult {
        let iterations = self.history.len();
        let (best_tour, best_length) = match self.best_tour {
            Some(tour) => (tour, self.best_length),
            None => {
                warn!("no tour recorded after {iterations} iterations, returning identity tour");
                let tour: Vec<usize> = (0..self.distances.size()).collect();
                let length = tour_length(&tour, self.distances);
                (tour, length)
            }
        };

        ColonyResult {
            best_tour,
            best_length,
            history: self.history,
            iterations,
            best_iteration: self.best_iteration,
        }
    }

    /// Number of iterations executed so far.
    pub fn iteration(&self) -> usize {
        self.history.len()
    }

    /// Global best length so far (`+inf` before the first step).
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    pub fn best_tour(&self) -> Option<&[usize]> {
        self.best_tour.as_deref()
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }
}

/// Executes a complete ACO run.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
///
/// let rows = vec![
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ];
/// let config = AcoConfig::default().with_ants(10).with_iterations(20).with_seed(1);
/// let result = AcoRunner::solve(&rows, &config).unwrap();
/// assert!((result.best_length - 4.0).abs() < 1e-9);
/// assert_eq!(result.history.len(), 20);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO over a validated matrix.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any iteration runs.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<ColonyResult> {
        Self::run_with_observer(distances, config, |_| {})
    }

    /// Validates raw rows into a [`DistanceMatrix`] and runs ACO on it.
    ///
    /// # Errors
    ///
    /// Empty, non-square or invalid matrices and invalid configurations are
    /// reported before any iteration runs.
    pub fn solve<R: AsRef<[f64]>>(rows: &[R], config: &AcoConfig) -> Result<ColonyResult> {
        let distances = DistanceMatrix::from_rows(rows)?;
        Self::run(&distances, config)
    }

    /// Runs ACO, calling `observer` after every iteration.
    pub fn run_with_observer<F>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<ColonyResult>
    where
        F: FnMut(&IterationReport),
    {
        let mut engine = ColonyEngine::new(distances, config.clone())?;

        info!(
            "starting ACO: {} locations, {} ants, {} iterations",
            distances.size(),
            config.ants,
            config.iterations
        );

        for _ in 0..config.iterations {
            let report = engine.step();
            observer(&report);
        }

        let result = engine.finish();
        info!(
            "ACO finished: best length {:.6} found in iteration {}",
            result.best_length, result.best_iteration
        );
        Ok(result)
    }
}
