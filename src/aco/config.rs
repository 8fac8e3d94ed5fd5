//! ACO configuration.

use crate::error::{AcoError, Result};

/// Configuration for an Ant Colony Optimization run.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(30)
///     .with_iterations(200)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Number of ants (tours constructed) per iteration.
    pub ants: usize,

    /// Number of iterations. The run always executes all of them.
    pub iterations: usize,

    /// Pheromone importance (exponent on τ).
    pub alpha: f64,

    /// Heuristic importance (exponent on 1/d).
    ///
    /// Larger values make ants greedier. Typical range: 2–5.
    pub beta: f64,

    /// Evaporation rate ρ in (0, 1]. Every pheromone entry is multiplied
    /// by `1 - ρ` each iteration.
    pub evaporation_rate: f64,

    /// Reinforcement constant Q. A tour of length L deposits `Q / L` on
    /// each of its edges.
    pub q: f64,

    /// Optional upper bound applied to pheromone entries after
    /// reinforcement. `None` keeps accumulation unbounded.
    pub max_pheromone: Option<f64>,

    /// Whether to construct tours in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 20,
            iterations: 100,
            alpha: 1.0,
            beta: 5.0,
            evaporation_rate: 0.5,
            q: 100.0,
            max_pheromone: None,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the pheromone importance α.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic importance β.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate ρ.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the reinforcement constant Q.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Caps pheromone entries at `max`.
    pub fn with_max_pheromone(mut self, max: f64) -> Self {
        self.max_pheromone = Some(max);
        self
    }

    /// Sets whether ants are constructed in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(AcoError::parameter("ants", "must be at least 1"));
        }
        if self.iterations == 0 {
            return Err(AcoError::parameter("iterations", "must be at least 1"));
        }
        positive("alpha", self.alpha)?;
        positive("beta", self.beta)?;
        let rho = self.evaporation_rate;
        if !(rho > 0.0 && rho <= 1.0) {
            return Err(AcoError::parameter(
                "evaporation_rate",
                format!("must be in (0, 1], got {rho}"),
            ));
        }
        positive("q", self.q)?;
        if let Some(max) = self.max_pheromone {
            positive("max_pheromone", max)?;
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AcoError::parameter(
            name,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
