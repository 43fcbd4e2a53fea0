//! Ant Colony Optimization (ACO).
//!
//! A population metaheuristic in which each generation of ants builds
//! candidate solutions by repeated weighted random item selection. A
//! per-item pheromone trail biases selection toward items that carried
//! value in earlier generations; the trail evaporates each generation
//! and is reinforced from the generation's best solution.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::AcoRunner;
