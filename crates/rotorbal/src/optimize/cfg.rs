//! Search configuration.

use crate::error::BalanceError;

/// Tuning knobs for the restart search.
///
/// The stall rule: a restart stops as converged once `patience` consecutive
/// iterations improved the retained best by less than `convergence_epsilon`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceCfg {
    /// Maximum iterations per restart.
    pub iteration_budget: usize,
    /// Independent restarts; the lowest residual wins.
    pub restart_count: usize,
    /// Initial exploration noise (radians, std-dev of the per-angle nudge).
    pub noise_initial: f64,
    /// Multiplicative noise shrink per iteration, in [0, 1].
    pub noise_decay: f64,
    pub convergence_epsilon: f64,
    pub patience: usize,
    /// Walker accepts candidates up to this much worse than its current residual.
    pub accept_tolerance: f64,
    /// Master seed; `None` draws one from OS entropy (reported in the result).
    pub random_seed: Option<u64>,
    /// Run restarts on the rayon pool. Results are identical either way.
    pub parallel: bool,
    /// Keep the per-iteration best residual of the winning restart.
    pub record_trace: bool,
}

impl Default for BalanceCfg {
    fn default() -> Self {
        Self {
            iteration_budget: 1000,
            restart_count: 10,
            noise_initial: 0.1,
            noise_decay: 0.99,
            convergence_epsilon: 1e-5,
            patience: 50,
            accept_tolerance: 0.0,
            random_seed: None,
            parallel: false,
            record_trace: false,
        }
    }
}

impl BalanceCfg {
    /// Defaults with a fixed master seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), BalanceError> {
        if self.iteration_budget == 0 {
            return Err(BalanceError::invalid_cfg("iteration_budget must be > 0"));
        }
        if self.restart_count == 0 {
            return Err(BalanceError::invalid_cfg("restart_count must be >= 1"));
        }
        if !self.noise_initial.is_finite() || self.noise_initial < 0.0 {
            return Err(BalanceError::invalid_cfg(
                "noise_initial must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.noise_decay) {
            return Err(BalanceError::invalid_cfg("noise_decay must lie in [0, 1]"));
        }
        if self.convergence_epsilon.is_nan() || self.convergence_epsilon < 0.0 {
            return Err(BalanceError::invalid_cfg("convergence_epsilon must be >= 0"));
        }
        if self.patience == 0 {
            return Err(BalanceError::invalid_cfg("patience must be > 0"));
        }
        if self.accept_tolerance.is_nan() || self.accept_tolerance < 0.0 {
            return Err(BalanceError::invalid_cfg("accept_tolerance must be >= 0"));
        }
        Ok(())
    }
}
