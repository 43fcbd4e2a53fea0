//! ACO execution loop.

use std::time::Instant;

use log::debug;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::AcoConfig;
use crate::error::SolveError;
use crate::problem::KnapsackProblem;
use crate::report::RunResult;

/// Executes the Ant Colony Optimization engine.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO and returns the best solution found.
    ///
    /// Each generation, `num_ants` constructions are built and the
    /// generation's best reinforces the pheromone trail. The trace
    /// records each generation's own best value, so unlike SA it is
    /// not monotone; `best_iteration` is the first generation whose
    /// entry equals the final global best.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidConfiguration`] if the configuration fails
    /// [`AcoConfig::validate`]. The search itself cannot fail: when no
    /// item can legally be added a construction simply stops, and an
    /// all-zero solution with value 0 is a valid outcome.
    pub fn run(problem: &KnapsackProblem, config: &AcoConfig) -> Result<RunResult, SolveError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let start = Instant::now();
        let n = problem.len();

        let mut pheromones = vec![config.initial_pheromone; n];
        let mut best_global_value = 0.0_f64;
        let mut best_global_solution = vec![0u32; n];
        let mut best_global_weight = 0.0_f64;
        let mut trace = Vec::with_capacity(config.num_iterations);

        for generation in 0..config.num_iterations {
            let mut best_gen_value = 0.0_f64;
            let mut best_gen_solution = vec![0u32; n];
            let mut best_gen_weight = 0.0_f64;

            for _ant in 0..config.num_ants {
                let (solution, value, weight) =
                    construct_solution(problem, &pheromones, config, &mut rng);

                // Ties keep the first ant's solution
                if value > best_gen_value {
                    best_gen_value = value;
                    best_gen_solution = solution;
                    best_gen_weight = weight;
                }
            }

            if best_gen_value > best_global_value {
                best_global_value = best_gen_value;
                best_global_solution = best_gen_solution.clone();
                best_global_weight = best_gen_weight;
                debug!("new global best {best_global_value} at generation {generation}");
            }

            update_pheromones(
                &mut pheromones,
                &best_gen_solution,
                best_gen_value,
                problem,
                config.evaporation,
            );

            trace.push(best_gen_value);
        }

        let best_iteration = trace
            .iter()
            .position(|&v| v == best_global_value)
            .unwrap_or(0);

        Ok(RunResult {
            best_solution: best_global_solution,
            best_value: best_global_value,
            best_weight: best_global_weight,
            best_iteration,
            elapsed: start.elapsed(),
            trace,
        })
    }
}

/// One ant's greedy-stochastic walk: repeated selection until no item
/// can legally be added. Returns the solution with its value and weight.
fn construct_solution<R: Rng>(
    problem: &KnapsackProblem,
    pheromones: &[f64],
    config: &AcoConfig,
    rng: &mut R,
) -> (Vec<u32>, f64, f64) {
    let mut solution = vec![0u32; problem.len()];
    let mut value = 0.0;
    let mut weight = 0.0;

    while let Some(index) = select_item(problem, pheromones, config, &solution, weight, rng) {
        let item = &problem.items()[index];
        // Eligibility was checked against the weight before the draw;
        // the drawn item must still fit on its own.
        if weight + item.weight > problem.capacity() {
            break;
        }
        solution[index] += 1;
        value += item.value;
        weight += item.weight;
    }

    (solution, value, weight)
}

/// One weighted random draw over the eligible items.
///
/// An item is eligible while it fits the remaining capacity and its
/// availability is not exhausted by this construction. Returns `None`
/// when every score is zero — the normal terminal condition of a
/// construction, not an error.
fn select_item<R: Rng>(
    problem: &KnapsackProblem,
    pheromones: &[f64],
    config: &AcoConfig,
    solution: &[u32],
    current_weight: f64,
    rng: &mut R,
) -> Option<usize> {
    let remaining = problem.capacity() - current_weight;
    let scores: Vec<f64> = problem
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if item.weight <= remaining && solution[i] < item.available_quantity {
                pheromones[i].powf(config.alpha) * item.value.powf(config.beta)
            } else {
                0.0
            }
        })
        .collect();

    if scores.iter().sum::<f64>() <= 0.0 {
        return None;
    }

    let distribution = WeightedIndex::new(&scores).ok()?;
    Some(distribution.sample(rng))
}

/// Evaporates every trail, then reinforces each item by the share of
/// the generation-best value it contributed. Items absent from the
/// generation's best solution receive no reinforcement. The denominator
/// falls back to 1 when the generation's best is the empty solution.
fn update_pheromones(
    pheromones: &mut [f64],
    gen_best: &[u32],
    gen_best_value: f64,
    problem: &KnapsackProblem,
    evaporation: f64,
) {
    let denom = if gen_best_value > 0.0 {
        gen_best_value
    } else {
        1.0
    };
    for (i, item) in problem.items().iter().enumerate() {
        let reinforcement = gen_best[i] as f64 * item.value / denom;
        pheromones[i] = (1.0 - evaporation) * pheromones[i] + reinforcement;
    }
}
