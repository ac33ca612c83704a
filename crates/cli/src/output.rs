//! JSON result document handed to plotting/export tooling.

use rotorbal::{BalancingResult, Unbalance, UnbalanceSet};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VectorDoc {
    pub label: String,
    pub magnitude: f64,
    pub angle_rad: f64,
    /// Cartesian form; `z` is always 0 (balancing plane).
    pub xyz: [f64; 3],
}

impl VectorDoc {
    fn new(label: String, u: Unbalance) -> Self {
        let c = u.cartesian();
        Self {
            label,
            magnitude: u.magnitude,
            angle_rad: u.angle,
            xyz: [c.x, c.y, c.z],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiscDoc {
    pub id: String,
    pub base_angle_rad: f64,
    pub rotation_rad: f64,
    pub optimal: VectorDoc,
}

#[derive(Debug, Serialize)]
pub struct RestartDoc {
    pub index: u64,
    pub residual: f64,
    pub iterations: usize,
    pub converged: bool,
}

#[derive(Debug, Serialize)]
pub struct ResultDoc {
    pub seed: u64,
    pub converged: bool,
    pub cancelled: bool,
    pub iterations: usize,
    pub total_iterations: usize,
    pub initial_residual: f64,
    pub residual: f64,
    pub angles_rad: Vec<f64>,
    pub shaft: VectorDoc,
    pub discs: Vec<DiscDoc>,
    pub restarts: Vec<RestartDoc>,
}

impl ResultDoc {
    pub fn new(input: &UnbalanceSet, res: &BalancingResult) -> Self {
        let discs = input
            .discs()
            .iter()
            .zip(res.optimal.discs())
            .zip(&res.angles)
            .map(|((orig, opt), &rot)| DiscDoc {
                id: orig.id.to_string(),
                base_angle_rad: orig.unbalance.angle,
                rotation_rad: rot,
                optimal: VectorDoc::new(format!("Disc {}", opt.id), opt.unbalance),
            })
            .collect();
        Self {
            seed: res.seed,
            converged: res.converged,
            cancelled: res.cancelled,
            iterations: res.iterations,
            total_iterations: res.total_iterations(),
            initial_residual: res.initial_residual,
            residual: res.residual,
            angles_rad: res.angles.clone(),
            shaft: VectorDoc::new("Shaft".to_string(), res.optimal.shaft()),
            discs,
            restarts: res
                .restarts
                .iter()
                .map(|r| RestartDoc {
                    index: r.token.index,
                    residual: r.residual,
                    iterations: r.iterations,
                    converged: r.converged,
                })
                .collect(),
        }
    }
}
