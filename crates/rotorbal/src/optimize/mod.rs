//! Residual-minimizing search over disc rotation angles.
//!
//! Purpose
//! - Find rotations that make shaft + discs cancel as well as possible.
//!   The angle space is a torus and the objective is multimodal, so the
//!   search runs several independent seeded restarts and keeps the best.
//!
//! Model
//! - Each restart starts uniformly on [0, 2π)^N and runs a greedy
//!   perturb/accept loop with geometrically annealed Gaussian noise
//!   (`search`). It stops on its iteration budget or when the retained best
//!   stalls; only the stall marks it converged.
//! - Restarts own private streams derived from `(seed, index)` (`seed`), so
//!   sequential and parallel runs agree bit-for-bit.
//! - A `CancelToken` is polled once per iteration; cancelled runs return the
//!   best so far with `converged = false`.
//!
//! Code cross-refs: `rotation::apply`, `metric::residual`, `BalanceCfg`.

mod cancel;
mod cfg;
mod result;
mod search;
mod seed;

pub use cancel::CancelToken;
pub use cfg::BalanceCfg;
pub use result::{BalancingResult, RestartSummary};
pub use seed::RestartToken;

use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::error::BalanceError;
use crate::metric::residual;
use crate::model::UnbalanceSet;
use crate::rotation::apply;
use search::{draw_start, run_restart, RestartOutcome};

/// Run the restart search with `cfg`.
pub fn optimize(set: &UnbalanceSet, cfg: &BalanceCfg) -> Result<BalancingResult, BalanceError> {
    optimize_with_cancel(set, cfg, &CancelToken::new())
}

/// Convenience: default configuration (fresh seed, reported in the result).
pub fn optimize_with_defaults(set: &UnbalanceSet) -> Result<BalancingResult, BalanceError> {
    optimize(set, &BalanceCfg::default())
}

/// Run the restart search, polling `cancel` once per iteration.
pub fn optimize_with_cancel(
    set: &UnbalanceSet,
    cfg: &BalanceCfg,
    cancel: &CancelToken,
) -> Result<BalancingResult, BalanceError> {
    cfg.validate()?;
    let seed = seed::master_seed(cfg.random_seed);
    let initial_residual = residual(set);

    // Flat objective (no discs, or all of zero magnitude): nothing to search.
    // Keep the first restart's start point untouched.
    if set.is_empty() || set.discs_all_zero() {
        let token = RestartToken::new(seed, 0);
        let angles = draw_start(&mut token.to_std_rng(), set.len());
        let optimal = apply(set, &angles)?;
        let res = residual(&optimal);
        tracing::info!(seed, discs = set.len(), residual = res, "flat objective, no search");
        return Ok(BalancingResult {
            angles,
            optimal,
            residual: res,
            initial_residual,
            iterations: 0,
            converged: true,
            cancelled: false,
            seed,
            restarts: vec![RestartSummary {
                token,
                residual: res,
                iterations: 0,
                converged: true,
                cancelled: false,
            }],
            trace: cfg.record_trace.then(|| vec![res]),
        });
    }

    let tokens: Vec<RestartToken> = (0..cfg.restart_count as u64)
        .map(|i| RestartToken::new(seed, i))
        .collect();
    let outcomes: Vec<RestartOutcome> = if cfg.parallel {
        tokens
            .par_iter()
            .map(|&tok| run_restart(set, cfg, cancel, tok))
            .collect()
    } else {
        tokens
            .iter()
            .map(|&tok| run_restart(set, cfg, cancel, tok))
            .collect()
    };

    finish(set, seed, initial_residual, outcomes)
}

/// Map into [0, 2π). `rem_euclid` rounds tiny negative angles up to 2π itself.
fn wrap_angle(a: f64) -> f64 {
    let w = a.rem_euclid(TAU);
    if w < TAU {
        w
    } else {
        0.0
    }
}

/// Min-by-residual reduction; ties go to the lowest restart index.
fn finish(
    set: &UnbalanceSet,
    seed: u64,
    initial_residual: f64,
    outcomes: Vec<RestartOutcome>,
) -> Result<BalancingResult, BalanceError> {
    let mut winner = 0usize;
    for (k, o) in outcomes.iter().enumerate() {
        if o.summary.residual < outcomes[winner].summary.residual {
            winner = k;
        }
    }
    let cancelled = outcomes.iter().any(|o| o.summary.cancelled);
    let restarts: Vec<RestartSummary> = outcomes.iter().map(|o| o.summary.clone()).collect();
    let Some(best) = outcomes.into_iter().nth(winner) else {
        return Err(BalanceError::invalid_cfg("no restart was run"));
    };

    let angles: Vec<f64> = best.angles.iter().map(|&a| wrap_angle(a)).collect();
    let optimal = apply(set, &angles)?;
    let res = residual(&optimal);
    let converged = best.summary.converged && !cancelled && res.is_finite();
    if cancelled {
        tracing::warn!(seed, residual = res, "search cancelled, returning best so far");
    }
    tracing::info!(
        seed,
        discs = set.len(),
        restarts = restarts.len(),
        winner,
        initial_residual,
        residual = res,
        iterations = best.summary.iterations,
        converged,
        "balancing finished"
    );
    Ok(BalancingResult {
        angles,
        optimal,
        residual: res,
        initial_residual,
        iterations: best.summary.iterations,
        converged,
        cancelled,
        seed,
        restarts,
        trace: best.trace,
    })
}
