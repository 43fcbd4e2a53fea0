//! SA execution loop.

use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::error::SolveError;
use crate::problem::{KnapsackProblem, Solution};
use crate::report::RunResult;

/// Executes the Simulated Annealing engine.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA and returns the best solution found.
    ///
    /// Starts from a randomly grown feasible solution, then repeatedly
    /// perturbs the current solution, accepts or rejects the neighbor
    /// under the Metropolis criterion, and cools. The trace records the
    /// best value so far, one entry per iteration, and is therefore
    /// non-decreasing.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidConfiguration`] if the configuration fails
    /// [`SaConfig::validate`]. Rejected neighbors and a never-improved
    /// initial solution are normal outcomes, not errors.
    pub fn run(problem: &KnapsackProblem, config: &SaConfig) -> Result<RunResult, SolveError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let start = Instant::now();

        let mut current = initial_solution(problem, &mut rng);
        let mut current_value = problem.value(&current);
        let mut current_weight = problem.weight(&current);

        let mut best = current.clone();
        let mut best_value = current_value;
        let mut best_weight = current_weight;
        let mut best_iteration = 0usize;

        let mut temperature = config.initial_temperature;
        let mut trace = Vec::with_capacity(config.total_iterations);

        for t in 0..config.total_iterations {
            let neighbor = neighbor_solution(problem, &current, config.perturbation_rate, &mut rng);
            let neighbor_weight = problem.weight(&neighbor);

            if neighbor_weight <= problem.capacity() {
                let neighbor_value = problem.value(&neighbor);
                let delta = neighbor_value - current_value;

                // Metropolis criterion on the maximization objective;
                // a zero temperature never accepts a worsening move.
                let accept = delta >= 0.0
                    || (temperature > 0.0
                        && rng.random_range(0.0..1.0) < (delta / temperature).exp());

                if accept {
                    current = neighbor;
                    current_value = neighbor_value;
                    current_weight = neighbor_weight;

                    if current_value > best_value {
                        best = current.clone();
                        best_value = current_value;
                        best_weight = current_weight;
                        best_iteration = t;
                        debug!("new best {best_value} at iteration {t}");
                    }
                }
            }
            // An infeasible neighbor leaves current untouched; cooling
            // and the trace still advance.

            temperature = cool(config, t);
            trace.push(best_value);
        }

        Ok(RunResult {
            best_solution: best,
            best_value,
            best_weight,
            best_iteration,
            elapsed: start.elapsed(),
            trace,
        })
    }
}

/// Grows a feasible starting point by incrementing uniformly random
/// items. The first pick that no longer fits the capacity or its
/// availability stops the loop, so the start is feasible but not
/// necessarily saturated.
fn initial_solution<R: Rng>(problem: &KnapsackProblem, rng: &mut R) -> Solution {
    let mut solution = vec![0u32; problem.len()];
    if problem.is_empty() {
        return solution;
    }

    let mut total_weight = 0.0;
    loop {
        let i = rng.random_range(0..problem.len());
        let item = &problem.items()[i];
        if total_weight + item.weight <= problem.capacity() && solution[i] < item.available_quantity
        {
            solution[i] += 1;
            total_weight += item.weight;
        } else {
            break;
        }
    }
    solution
}

/// Large-neighborhood move: each quantity is independently redrawn
/// uniformly from its full `0..=available_quantity` range with
/// probability `perturbation_rate`. Feasibility is not enforced here;
/// the run loop rejects overweight neighbors wholesale.
fn neighbor_solution<R: Rng>(
    problem: &KnapsackProblem,
    current: &[u32],
    perturbation_rate: f64,
    rng: &mut R,
) -> Solution {
    let mut neighbor = current.to_vec();
    for (i, item) in problem.items().iter().enumerate() {
        if rng.random_range(0.0..1.0) < perturbation_rate {
            neighbor[i] = rng.random_range(0..=item.available_quantity);
        }
    }
    neighbor
}

/// Power-law schedule toward zero, floored at the final temperature.
fn cool(config: &SaConfig, iteration: usize) -> f64 {
    let progress = 1.0 - iteration as f64 / config.total_iterations as f64;
    (config.initial_temperature * progress.powf(config.cooling_exponent))
        .max(config.final_temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;

    fn item(id: u32, weight: f64, value: f64, qty: u32) -> Item {
        Item {
            id,
            weight,
            value,
            available_quantity: qty,
        }
    }

    fn two_item_problem() -> KnapsackProblem {
        KnapsackProblem::new(vec![item(1, 1.0, 10.0, 4), item(2, 2.0, 15.0, 2)], 4.0).unwrap()
    }

    #[test]
    fn test_sa_finds_good_solution() {
        // Optimum is 40 (four units of item 1)
        let problem = two_item_problem();
        let config = SaConfig::default()
            .with_total_iterations(5_000)
            .with_seed(42);

        let result = SaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_value >= 30.0 && result.best_value <= 40.0,
            "expected best value in [30, 40], got {}",
            result.best_value
        );
        assert!(result.best_weight <= 4.0);
        assert!(problem.is_feasible(&result.best_solution));
    }

    #[test]
    fn test_sa_capacity_below_lightest_item() {
        let problem =
            KnapsackProblem::new(vec![item(1, 5.0, 10.0, 3), item(2, 7.0, 20.0, 2)], 4.0).unwrap();
        let config = SaConfig::default().with_total_iterations(200).with_seed(1);

        let result = SaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.best_value, 0.0);
        assert_eq!(result.best_solution, vec![0, 0]);
        assert_eq!(result.best_iteration, 0);
    }

    #[test]
    fn test_sa_exhausted_availability() {
        let problem = KnapsackProblem::new(vec![item(1, 1.0, 10.0, 0)], 4.0).unwrap();
        let config = SaConfig::default().with_total_iterations(100).with_seed(1);

        let result = SaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.best_value, 0.0);
        assert_eq!(result.best_solution, vec![0]);
    }

    #[test]
    fn test_sa_empty_catalog() {
        let problem = KnapsackProblem::new(vec![], 4.0).unwrap();
        let config = SaConfig::default().with_total_iterations(50).with_seed(1);

        let result = SaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.best_value, 0.0);
        assert!(result.best_solution.is_empty());
        assert_eq!(result.trace.len(), 50);
    }

    #[test]
    fn test_sa_trace_is_non_decreasing() {
        let problem = two_item_problem();
        let config = SaConfig::default()
            .with_total_iterations(2_000)
            .with_seed(7);

        let result = SaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.trace.len(), 2_000);
        for window in result.trace.windows(2) {
            assert!(
                window[1] >= window[0],
                "trace must be non-decreasing: {} then {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_sa_best_matches_model() {
        let problem = two_item_problem();
        let config = SaConfig::default()
            .with_total_iterations(1_000)
            .with_seed(3);

        let result = SaRunner::run(&problem, &config).unwrap();

        assert!((problem.value(&result.best_solution) - result.best_value).abs() < 1e-9);
        assert!((problem.weight(&result.best_solution) - result.best_weight).abs() < 1e-9);
        assert!(result.best_iteration < config.total_iterations);
    }

    #[test]
    fn test_sa_solution_respects_availability() {
        let problem = two_item_problem();
        let config = SaConfig::default()
            .with_total_iterations(1_000)
            .with_seed(21);

        let result = SaRunner::run(&problem, &config).unwrap();

        for (i, item) in problem.items().iter().enumerate() {
            assert!(result.best_solution[i] <= item.available_quantity);
        }
    }

    #[test]
    fn test_sa_same_seed_same_result() {
        let problem = two_item_problem();
        let config = SaConfig::default()
            .with_total_iterations(500)
            .with_seed(13);

        let a = SaRunner::run(&problem, &config).unwrap();
        let b = SaRunner::run(&problem, &config).unwrap();

        assert_eq!(a.best_solution, b.best_solution);
        assert_eq!(a.trace, b.trace);
    }

    #[test]
    fn test_sa_rejects_invalid_config() {
        let problem = two_item_problem();
        let config = SaConfig::default().with_perturbation_rate(2.0);

        assert!(matches!(
            SaRunner::run(&problem, &config),
            Err(SolveError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_initial_solution_is_feasible() {
        let problem = two_item_problem();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let solution = initial_solution(&problem, &mut rng);

            assert!(problem.is_feasible(&solution));
            for (i, item) in problem.items().iter().enumerate() {
                assert!(solution[i] <= item.available_quantity);
            }
        }
    }

    #[test]
    fn test_neighbor_respects_availability() {
        let problem = two_item_problem();
        let mut rng = StdRng::seed_from_u64(17);
        let current = vec![1, 1];

        for _ in 0..200 {
            let neighbor = neighbor_solution(&problem, &current, 0.5, &mut rng);
            for (i, item) in problem.items().iter().enumerate() {
                assert!(neighbor[i] <= item.available_quantity);
            }
        }
    }

    #[test]
    fn test_neighbor_with_zero_rate_is_identity() {
        let problem = two_item_problem();
        let mut rng = StdRng::seed_from_u64(17);
        let current = vec![2, 1];

        let neighbor = neighbor_solution(&problem, &current, 0.0, &mut rng);
        assert_eq!(neighbor, current);
    }

    #[test]
    fn test_cooling_is_non_increasing_and_floored() {
        let config = SaConfig::default()
            .with_initial_temperature(500.0)
            .with_cooling_exponent(2.0)
            .with_total_iterations(1_000)
            .with_final_temperature(0.5);

        let mut previous = config.initial_temperature;
        for t in 0..config.total_iterations {
            let temperature = cool(&config, t);
            assert!(
                temperature <= previous + 1e-12,
                "temperature rose at iteration {t}: {previous} then {temperature}"
            );
            assert!(temperature >= config.final_temperature);
            previous = temperature;
        }
    }
}
