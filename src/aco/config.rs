//! ACO configuration.

use crate::error::SolveError;

/// Configuration for the Ant Colony Optimization engine.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_num_iterations(100)
///     .with_evaporation(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants (solution constructions) per generation.
    pub num_ants: usize,

    /// Number of generations.
    pub num_iterations: usize,

    /// Fraction of pheromone lost per generation, in [0, 1].
    pub evaporation: f64,

    /// Starting pheromone level for every item. Must be non-negative.
    pub initial_pheromone: f64,

    /// Pheromone exponent in the selection score.
    ///
    /// Higher values weight historical success more heavily than the
    /// item's own value.
    pub alpha: f64,

    /// Value-heuristic exponent in the selection score.
    pub beta: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            num_iterations: 100,
            evaporation: 0.1,
            initial_pheromone: 0.9,
            alpha: 1.0,
            beta: 0.5,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = evaporation;
        self
    }

    pub fn with_initial_pheromone(mut self, pheromone: f64) -> Self {
        self.initial_pheromone = pheromone;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidConfiguration`] on a zero ant count or
    /// generation count, an evaporation rate outside [0, 1], or a
    /// negative initial pheromone level.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.num_ants == 0 {
            return Err(SolveError::InvalidConfiguration(
                "num_ants must be positive".into(),
            ));
        }
        if self.num_iterations == 0 {
            return Err(SolveError::InvalidConfiguration(
                "num_iterations must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(SolveError::InvalidConfiguration(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone < 0.0 {
            return Err(SolveError::InvalidConfiguration(format!(
                "initial_pheromone must be non-negative, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}
