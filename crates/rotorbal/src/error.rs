//! Error taxonomy shared by model construction, rotation and the optimizer.
//!
//! Non-convergence is deliberately absent: it is a result field
//! (`BalancingResult::converged`), not a failure.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum BalanceError {
    /// Malformed measurement data (negative or non-finite magnitude,
    /// non-finite angle, duplicate disc id).
    InvalidInput { reason: String },
    /// Angle vector length differs from the number of discs.
    DimensionMismatch { expected: usize, got: usize },
    /// Tuning parameters outside their admissible range.
    InvalidConfiguration { reason: String },
}

impl BalanceError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_cfg(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid unbalance input: {reason}"),
            Self::DimensionMismatch { expected, got } => write!(
                f,
                "angle vector has {got} entries but the set has {expected} discs"
            ),
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid balancing configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for BalanceError {}
