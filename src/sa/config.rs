//! SA configuration.

use crate::error::SolveError;

/// Configuration for the Simulated Annealing engine.
///
/// The temperature follows a power-law schedule,
/// `T(t) = initial_temperature · (1 − t/total_iterations)^cooling_exponent`,
/// floored at `final_temperature`. Note that `cooling_exponent` is an
/// exponent in that schedule, not a per-iteration multiplier — a value
/// of 1.0 cools linearly, larger values front-load the cooling.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_total_iterations(30_000)
///     .with_final_temperature(1e-4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Must be positive.
    pub initial_temperature: f64,

    /// Exponent of the power-law cooling schedule.
    pub cooling_exponent: f64,

    /// Number of iterations (neighbor evaluations).
    pub total_iterations: usize,

    /// Temperature floor. Must be non-negative and must not exceed the
    /// initial temperature.
    pub final_temperature: f64,

    /// Per-item probability of redrawing a quantity when generating a
    /// neighbor, in [0, 1].
    pub perturbation_rate: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_exponent: 0.99,
            total_iterations: 500,
            final_temperature: 0.01,
            perturbation_rate: 0.1,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_exponent(mut self, exponent: f64) -> Self {
        self.cooling_exponent = exponent;
        self
    }

    pub fn with_total_iterations(mut self, n: usize) -> Self {
        self.total_iterations = n;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_perturbation_rate(mut self, rate: f64) -> Self {
        self.perturbation_rate = rate;
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
    /// [`SolveError::InvalidConfiguration`] on a zero iteration count,
    /// a perturbation rate outside [0, 1], a non-positive initial
    /// temperature, a negative temperature floor, or a floor exceeding
    /// the initial temperature.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.total_iterations == 0 {
            return Err(SolveError::InvalidConfiguration(
                "total_iterations must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.perturbation_rate) {
            return Err(SolveError::InvalidConfiguration(format!(
                "perturbation_rate must be in [0, 1], got {}",
                self.perturbation_rate
            )));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SolveError::InvalidConfiguration(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.final_temperature.is_finite() || self.final_temperature < 0.0 {
            return Err(SolveError::InvalidConfiguration(format!(
                "final_temperature must be non-negative, got {}",
                self.final_temperature
            )));
        }
        if self.final_temperature > self.initial_temperature {
            return Err(SolveError::InvalidConfiguration(format!(
                "final_temperature {} exceeds initial_temperature {}",
                self.final_temperature, self.initial_temperature
            )));
        }
        Ok(())
    }
}
