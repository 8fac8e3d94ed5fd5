//! Ant Colony Optimization (Ant System) for the symmetric TSP.
//!
//! A population of ants builds tours step by step, choosing the next
//! location with probability proportional to `τ^α · η^β`, where τ is the
//! learned pheromone on an edge and η = 1/d its visibility. After each
//! iteration pheromone evaporates everywhere and is reinforced along the
//! edges of every ant's tour in proportion to the tour's quality.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*, MIT Press

mod config;
mod constructor;
mod field;
mod runner;

pub use config::AcoConfig;
pub use constructor::{construct_tour, selection_weight};
pub use field::{
    PheromoneField, VisibilityField, INITIAL_PHEROMONE, VISIBILITY_DIAGONAL, VISIBILITY_EPSILON,
};
pub use runner::{AcoRunner, ColonyEngine, ColonyResult, IterationReport, RouteLeg};
