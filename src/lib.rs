//! Ant Colony Optimization for the symmetric travelling salesman problem.
//!
//! Given an n×n matrix of travel costs, the colony searches for a short
//! closed tour visiting every location once:
//!
//! - **`aco`**: the optimization engine. Pheromone and visibility fields,
//!   probabilistic tour construction, and the iteration loop that
//!   evaporates and reinforces pheromone while tracking the global best.
//! - **`matrix`**: validated dense distance matrix and cyclic tour length
//!   with a finite penalty for unreachable edges.
//! - **`random`**: seedable generator and weighted categorical sampling.
//! - **`geo`**: haversine distances from latitude/longitude, one possible
//!   source of distance matrices.
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::geo::{distance_matrix, Coordinate};
//!
//! let stops = [
//!     Coordinate::new(37.7641, 30.5566),
//!     Coordinate::new(37.8310, 30.5240),
//!     Coordinate::new(37.8125, 30.5331),
//!     Coordinate::new(37.8370, 30.5350),
//! ];
//! let distances = distance_matrix(&stops).unwrap();
//! let config = AcoConfig::default().with_iterations(30).with_seed(42);
//! let result = AcoRunner::run(&distances, &config).unwrap();
//!
//! assert_eq!(result.best_tour.len(), 4);
//! assert_eq!(result.history.len(), 30);
//! ```
//!
//! # Features
//!
//! - `parallel`: construct the ants of an iteration on rayon's thread pool.
//! - `serde`: `Serialize`/`Deserialize` for configs, matrices and results.

pub mod aco;
pub mod error;
pub mod geo;
pub mod matrix;
pub mod random;

pub use error::{AcoError, Result};
