//! One restart of the perturb/evaluate/accept loop.
//!
//! The walker nudges every angle by Gaussian noise whose spread shrinks
//! geometrically, moves on any candidate not worse than its current residual
//! (plus `accept_tolerance`), and the retained best changes only on strict
//! improvement. With a flat objective the retained best therefore stays at
//! the start point.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;

use super::cancel::CancelToken;
use super::cfg::BalanceCfg;
use super::result::RestartSummary;
use super::seed::RestartToken;
use crate::model::UnbalanceSet;
use crate::rotation::resultant_at;

/// Finished restart: summary plus the retained best angles.
pub(crate) struct RestartOutcome {
    pub summary: RestartSummary,
    pub angles: Vec<f64>,
    pub trace: Option<Vec<f64>>,
}

/// Start point: each angle uniform in [0, 2π).
pub(crate) fn draw_start(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(0.0..TAU)).collect()
}

/// Residual at `angles`; non-finite values rank below every finite one.
#[inline]
fn evaluate(set: &UnbalanceSet, angles: &[f64]) -> f64 {
    let v = resultant_at(set, angles);
    let r = v.x.hypot(v.y);
    if r.is_finite() {
        r
    } else {
        f64::INFINITY
    }
}

pub(crate) fn run_restart(
    set: &UnbalanceSet,
    cfg: &BalanceCfg,
    cancel: &CancelToken,
    token: RestartToken,
) -> RestartOutcome {
    RestartRunner::new(set, cfg, cancel, token).run()
}

/// Restart state carried across iterations.
struct RestartRunner<'a> {
    set: &'a UnbalanceSet,
    cfg: &'a BalanceCfg,
    cancel: &'a CancelToken,
    token: RestartToken,
    rng: StdRng,
    current: Vec<f64>,
    current_res: f64,
    best: Vec<f64>,
    best_res: f64,
    trace: Option<Vec<f64>>,
}

impl<'a> RestartRunner<'a> {
    fn new(
        set: &'a UnbalanceSet,
        cfg: &'a BalanceCfg,
        cancel: &'a CancelToken,
        token: RestartToken,
    ) -> Self {
        let mut rng = token.to_std_rng();
        let start = draw_start(&mut rng, set.len());
        let start_res = evaluate(set, &start);
        let trace = cfg.record_trace.then(|| {
            let mut t = Vec::with_capacity(cfg.iteration_budget.saturating_add(1).min(1 << 16));
            t.push(start_res);
            t
        });
        Self {
            set,
            cfg,
            cancel,
            token,
            rng,
            best: start.clone(),
            best_res: start_res,
            current: start,
            current_res: start_res,
            trace,
        }
    }

    /// Propose, evaluate, accept. Returns the gain of the retained best.
    ///
    /// While the walker sits where the residual overflows, local nudges cannot
    /// leave the region, so the whole torus is resampled instead.
    fn step(&mut self, sigma: f64, candidate: &mut Vec<f64>) -> f64 {
        if self.current_res.is_finite() {
            for (c, &a) in candidate.iter_mut().zip(&self.current) {
                let z: f64 = self.rng.sample(StandardNormal);
                *c = a + sigma * z;
            }
        } else {
            for c in candidate.iter_mut() {
                *c = self.rng.gen_range(0.0..TAU);
            }
        }
        let cand_res = evaluate(self.set, candidate);
        if !cand_res.is_finite() || cand_res > self.current_res + self.cfg.accept_tolerance {
            return 0.0;
        }
        std::mem::swap(&mut self.current, candidate);
        self.current_res = cand_res;
        if cand_res < self.best_res {
            let gain = self.best_res - cand_res;
            self.best.copy_from_slice(&self.current);
            self.best_res = cand_res;
            gain
        } else {
            0.0
        }
    }

    fn run(mut self) -> RestartOutcome {
        let mut candidate = vec![0.0; self.set.len()];
        let mut sigma = self.cfg.noise_initial;
        let mut stall = 0usize;
        let mut iterations = 0usize;
        let mut converged = false;
        let mut cancelled = false;

        while iterations < self.cfg.iteration_budget {
            if self.cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            iterations += 1;
            let gain = self.step(sigma, &mut candidate);
            if let Some(t) = self.trace.as_mut() {
                t.push(self.best_res);
            }
            // a non-finite best never counts as stalled
            if gain < self.cfg.convergence_epsilon && self.best_res.is_finite() {
                stall += 1;
                if stall >= self.cfg.patience {
                    converged = true;
                    break;
                }
            } else {
                stall = 0;
            }
            sigma *= self.cfg.noise_decay;
        }

        tracing::debug!(
            restart = self.token.index,
            seed = self.token.seed,
            residual = self.best_res,
            iterations,
            converged,
            cancelled,
            "restart finished"
        );
        RestartOutcome {
            summary: RestartSummary {
                token: self.token,
                residual: self.best_res,
                iterations,
                converged,
                cancelled,
            },
            angles: self.best,
            trace: self.trace,
        }
    }
}
