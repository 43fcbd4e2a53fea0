//! Run outcome handed to the reporting boundary.

use std::time::Duration;

use crate::problem::Solution;

/// Everything a run produces, owned by the caller afterwards.
///
/// The engines assume nothing about how results are persisted or
/// plotted; callers feed `trace` to whatever visualizer they use and
/// flatten the remaining fields into their own result rows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best solution found, one quantity per catalog index.
    pub best_solution: Solution,

    /// Value of the best solution.
    pub best_value: f64,

    /// Weight of the best solution.
    pub best_weight: f64,

    /// 0-indexed iteration (SA) or generation (ACO) at which the best
    /// value was first reached. Presentation layers that want 1-indexed
    /// reporting re-index on their side.
    pub best_iteration: usize,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,

    /// One sample per iteration/generation for convergence plotting.
    ///
    /// SA records the best value so far (non-decreasing); ACO records
    /// each generation's own best, which can dip below earlier peaks.
    pub trace: Vec<f64>,
}
