//! Error taxonomy for problem construction and engine configuration.

/// Rejection reasons surfaced before a run starts.
///
/// Normal terminal conditions of the search itself — no item fits the
/// remaining capacity, a neighbor is infeasible — are expected control
/// paths and never produce an error. An empty best solution (value 0)
/// is a valid, reportable outcome.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// An item record violates the catalog contract.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The knapsack capacity is unusable.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// An engine parameter is outside its legal range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
