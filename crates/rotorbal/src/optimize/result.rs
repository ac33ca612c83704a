//! Search outputs.

use super::seed::RestartToken;
use crate::model::UnbalanceSet;

/// Per-restart bookkeeping, in restart order.
#[derive(Clone, Debug, PartialEq)]
pub struct RestartSummary {
    pub token: RestartToken,
    /// Best residual the restart retained.
    pub residual: f64,
    pub iterations: usize,
    /// True only when the stall rule stopped the restart.
    pub converged: bool,
    pub cancelled: bool,
}

/// Outcome of one optimizer run. Callers must check `converged`: a result
/// that exhausted its budget is still returned, flagged `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct BalancingResult {
    /// Applied rotation per disc (radians in [0, 2π)), in disc order.
    pub angles: Vec<f64>,
    /// The input set rotated by `angles`.
    pub optimal: UnbalanceSet,
    /// Residual imbalance of `optimal`.
    pub residual: f64,
    /// Residual of the unrotated input.
    pub initial_residual: f64,
    /// Iterations used by the winning restart.
    pub iterations: usize,
    pub converged: bool,
    pub cancelled: bool,
    /// Master seed; rerunning with it reproduces this result.
    pub seed: u64,
    pub restarts: Vec<RestartSummary>,
    /// Best residual after each iteration of the winning restart (index 0 is
    /// the start point). Present when `BalanceCfg::record_trace` is set.
    pub trace: Option<Vec<f64>>,
}

impl BalancingResult {
    /// Iterations summed over all restarts.
    pub fn total_iterations(&self) -> usize {
        self.restarts.iter().map(|r| r.iterations).sum()
    }

    /// Residual reduction relative to the unrotated input.
    pub fn improvement(&self) -> f64 {
        self.initial_residual - self.residual
    }
}
