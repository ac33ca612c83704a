//! Residual imbalance: norm of the summed planar vectors.
//!
//! The objective is smooth in the disc angles but not convex once two or
//! more discs are free. Adding 2π to any angle, or permuting angles between
//! equal-magnitude discs, leaves the residual unchanged, so optima are never
//! unique.

use nalgebra::Vector2;

use crate::model::UnbalanceSet;

/// Component-wise sum of shaft and disc vectors.
pub fn resultant(set: &UnbalanceSet) -> Vector2<f64> {
    set.vectors().fold(Vector2::zeros(), |acc, u| acc + u.planar())
}

/// `‖resultant(set)‖`; zero iff the vectors cancel exactly.
///
/// A lone shaft yields its magnitude exactly (no cos/sin round trip).
/// Uses `hypot`, so the norm stays finite whenever the resultant is.
#[inline]
pub fn residual(set: &UnbalanceSet) -> f64 {
    if set.is_empty() {
        return set.shaft().magnitude;
    }
    let r = resultant(set);
    r.x.hypot(r.y)
}
