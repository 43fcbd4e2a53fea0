//! Metaheuristic solvers for the bounded multi-unit knapsack problem.
//!
//! Given a fixed catalog of items, each with a weight, a value, and a
//! maximum available quantity, select integer quantities so that total
//! weight stays within a capacity and total value is maximized. Two
//! independent stochastic engines search the same model:
//!
//! - **Ant Colony Optimization (ACO)**: generations of ants build
//!   candidate solutions by weighted random item selection, biased by a
//!   per-item pheromone trail that is evaporated and reinforced from the
//!   best solution of each generation.
//! - **Simulated Annealing (SA)**: a single evolving solution is
//!   perturbed by large-neighborhood quantity redraws, and worsening
//!   moves are accepted with a probability that decays along a
//!   power-law temperature schedule.
//!
//! Both engines take a [`KnapsackProblem`] plus their own configuration
//! and return a [`RunResult`] carrying the best solution found, its
//! value and weight, the iteration of discovery, the elapsed wall-clock
//! time, and a per-iteration convergence trace. Persisting results and
//! plotting traces are the caller's concern; the engines have no side
//! effects beyond the returned result.
//!
//! # Reproducibility
//!
//! All randomness flows through an RNG owned by a single run. Set a
//! seed on the engine configuration to make a run deterministic;
//! leaving it unset draws a fresh seed per run.

pub mod aco;
pub mod error;
pub mod problem;
pub mod report;
pub mod sa;

pub use error::SolveError;
pub use problem::{Item, KnapsackProblem, Solution};
pub use report::RunResult;
