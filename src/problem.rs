//! Knapsack problem model: item catalog, capacity, and solution scoring.

use crate::error::SolveError;

/// One entry of the item catalog.
///
/// The catalog is an ordered sequence; an item's position in it is the
/// index used by solutions and by engine-internal state. Weights and
/// the capacity must share one unit — the model never converts, so a
/// gram-scaled catalog needs a gram-scaled capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// External identifier, carried through for reporting only.
    pub id: u32,

    /// Weight of a single unit. Must be finite and strictly positive.
    pub weight: f64,

    /// Value of a single unit. Must be finite and strictly positive.
    pub value: f64,

    /// Maximum number of units a solution may take.
    pub available_quantity: u32,
}

/// Chosen quantity per catalog index.
pub type Solution = Vec<u32>;

/// An immutable catalog plus capacity, with pure scoring functions.
///
/// Construction validates the inputs; a held `KnapsackProblem` is
/// always well-formed, so the engines can assume it without re-checking.
///
/// # Examples
///
/// ```
/// use knapsack_metaheur::problem::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![
///         Item { id: 1, weight: 1.0, value: 10.0, available_quantity: 4 },
///         Item { id: 2, weight: 2.0, value: 15.0, available_quantity: 2 },
///     ],
///     4.0,
/// )
/// .unwrap();
///
/// let solution = vec![4, 0];
/// assert_eq!(problem.value(&solution), 40.0);
/// assert_eq!(problem.weight(&solution), 4.0);
/// assert!(problem.is_feasible(&solution));
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Builds a problem from a catalog and a capacity.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidCatalog`] if any item has a non-finite or
    /// non-positive weight or value. [`SolveError::InvalidCapacity`] if
    /// the capacity is non-finite or non-positive. An empty catalog is
    /// accepted; every run over it reports the zero solution.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, SolveError> {
        for (index, item) in items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(SolveError::InvalidCatalog(format!(
                    "item {} (id {}) has weight {}, expected a positive finite number",
                    index, item.id, item.weight
                )));
            }
            if !item.value.is_finite() || item.value <= 0.0 {
                return Err(SolveError::InvalidCatalog(format!(
                    "item {} (id {}) has value {}, expected a positive finite number",
                    index, item.id, item.value
                )));
            }
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(SolveError::InvalidCapacity(format!(
                "capacity {capacity} must be a positive finite number"
            )));
        }
        Ok(Self { items, capacity })
    }

    /// The item catalog, in index order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The knapsack capacity, in the catalog's weight unit.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total value of a solution: Σ quantity[i] · value[i].
    ///
    /// Caller contract: `solution.len() == self.len()`.
    pub fn value(&self, solution: &[u32]) -> f64 {
        self.items
            .iter()
            .zip(solution)
            .map(|(item, &qty)| item.value * qty as f64)
            .sum()
    }

    /// Total weight of a solution: Σ quantity[i] · weight[i].
    pub fn weight(&self, solution: &[u32]) -> f64 {
        self.items
            .iter()
            .zip(solution)
            .map(|(item, &qty)| item.weight * qty as f64)
            .sum()
    }

    /// Whether a solution's weight fits the capacity.
    pub fn is_feasible(&self, solution: &[u32]) -> bool {
        self.weight(solution) <= self.capacity
    }
}
