//! Single-plane rotor balancing: disc unbalance vectors, their rotations, and
//! the residual-minimizing angle search.
//!
//! Layout
//! - `model`: unbalance vectors, disc ids, and the validated `UnbalanceSet`.
//! - `rotation`: additive per-disc rotation (shaft stays fixed).
//! - `metric`: resultant vector and residual imbalance.
//! - `optimize`: seeded multi-restart perturb/accept search.
//! - `report`: read-only views for plotting and export collaborators.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   clarity over compatibility when the design improves.

pub mod error;
pub mod metric;
pub mod model;
pub mod optimize;
pub mod report;
pub mod rotation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::BalanceError;
pub use model::{build, sample_rotor, Disc, DiscId, DiscRow, Unbalance, UnbalanceSet};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
pub use optimize::{optimize, optimize_with_cancel, BalanceCfg, BalancingResult, CancelToken};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::BalanceError;
    pub use crate::metric::{residual, resultant};
    pub use crate::model::{build, sample_rotor, Disc, DiscId, DiscRow, Unbalance, UnbalanceSet};
    pub use crate::optimize::{
        optimize, optimize_with_cancel, optimize_with_defaults, BalanceCfg, BalancingResult,
        CancelToken, RestartSummary, RestartToken,
    };
    pub use crate::report::{label_for, polar_rows, PolarRow};
    pub use crate::rotation::apply as apply_rotation;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
