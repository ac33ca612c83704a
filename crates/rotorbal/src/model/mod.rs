//! Unbalance vectors and the validated shaft + discs collection.
//!
//! Purpose
//! - Hold measured magnitude/angle pairs exactly as supplied and derive the
//!   Cartesian form on demand (cos/sin absorb any 2π multiples, so angles are
//!   never normalized at construction).
//! - Guarantee the invariants the optimizer relies on: one shaft, unique disc
//!   ids, stable disc order, finite non-negative magnitudes.
//!
//! Code cross-refs: `rotation::apply`, `metric::residual`, `optimize::optimize`.

mod builder;
mod types;

pub use builder::{build, sample_rotor, DiscRow};
pub use types::{Disc, DiscId, Unbalance, UnbalanceSet};

#[cfg(test)]
mod tests;
