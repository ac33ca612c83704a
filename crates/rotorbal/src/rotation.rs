//! Additive per-disc rotation about the shaft axis.
//!
//! Effective angle of disc `i` is `base_i + theta_i`: the decision variable
//! is how far a disc is turned from its installed position. Every call
//! rotates the original set, so repeated evaluations never compound error.

use nalgebra::Vector2;

use crate::error::BalanceError;
use crate::model::{Disc, UnbalanceSet};

/// Rotate each disc by the matching entry of `angles`; the shaft is returned unchanged.
pub fn apply(set: &UnbalanceSet, angles: &[f64]) -> Result<UnbalanceSet, BalanceError> {
    if angles.len() != set.len() {
        return Err(BalanceError::DimensionMismatch {
            expected: set.len(),
            got: angles.len(),
        });
    }
    let discs = set
        .discs
        .iter()
        .zip(angles)
        .map(|(d, &theta)| Disc {
            id: d.id.clone(),
            unbalance: d.unbalance.rotated_by(theta),
        })
        .collect();
    Ok(UnbalanceSet {
        shaft: set.shaft,
        discs,
    })
}

/// Resultant of `apply(set, angles)` without materializing the rotated set.
///
/// Hot path of the optimizer; the caller guarantees matching lengths.
#[inline]
pub(crate) fn resultant_at(set: &UnbalanceSet, angles: &[f64]) -> Vector2<f64> {
    debug_assert_eq!(
        angles.len(),
        set.len(),
        "optimizer produced an angle vector of the wrong length"
    );
    set.discs
        .iter()
        .zip(angles)
        .fold(set.shaft.planar(), |acc, (d, &theta)| {
            acc + d.unbalance.rotated_by(theta).planar()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::resultant;
    use crate::model::{build, sample_rotor, DiscRow};
    use proptest::prelude::*;
    use std::f64::consts::{PI, TAU};

    fn set_from(shaft: (f64, f64), discs: &[(f64, f64)]) -> UnbalanceSet {
        let rows = discs
            .iter()
            .enumerate()
            .map(|(i, &(m, a))| DiscRow::new(i as i64, m, a))
            .collect();
        build(shaft.0, shaft.1, rows).unwrap()
    }

    #[test]
    fn rotation_is_additive_on_base_angle() {
        let set = set_from((0.0, 0.0), &[(1.0, PI / 2.0)]);
        let out = apply(&set, &[PI / 2.0]).unwrap();
        let p = out.discs()[0].unbalance.planar();
        assert!((p.x + 1.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert_eq!(out.discs()[0].id, set.discs()[0].id);
        // input untouched
        assert_eq!(set.discs()[0].unbalance.angle, PI / 2.0);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let set = sample_rotor();
        let err = apply(&set, &[0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            BalanceError::DimensionMismatch {
                expected: 4,
                got: 3
            }
        );
        assert!(apply(&set, &[0.0; 5]).is_err());
    }

    #[test]
    fn zero_rotation_is_identity() {
        let set = sample_rotor();
        assert_eq!(apply(&set, &[0.0; 4]).unwrap(), set);
    }

    #[test]
    fn resultant_at_matches_materialized_rotation() {
        let set = sample_rotor();
        let angles = [0.3, -1.2, 4.0, 2.5];
        let fast = resultant_at(&set, &angles);
        let slow = resultant(&apply(&set, &angles).unwrap());
        assert!((fast - slow).norm() < 1e-15);
    }

    fn discs_and_angles() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<f64>)> {
        prop::collection::vec((0.0f64..2.0, -10.0f64..10.0, -20.0f64..20.0), 0..8).prop_map(
            |v| {
                let discs = v.iter().map(|&(m, a, _)| (m, a)).collect();
                let angles = v.iter().map(|&(_, _, t)| t).collect();
                (discs, angles)
            },
        )
    }

    proptest! {
        #[test]
        fn shaft_is_never_rotated(
            sm in 0.0f64..2.0,
            sa in -10.0f64..10.0,
            (discs, angles) in discs_and_angles()
        ) {
            let set = set_from((sm, sa), &discs);
            let out = apply(&set, &angles).unwrap();
            prop_assert_eq!(out.shaft(), set.shaft());
        }

        #[test]
        fn full_turn_is_invisible(
            (discs, angles) in discs_and_angles()
        ) {
            let set = set_from((0.5, 0.25), &discs);
            let shifted: Vec<f64> = angles.iter().map(|t| t + TAU).collect();
            let a = apply(&set, &angles).unwrap();
            let b = apply(&set, &shifted).unwrap();
            for (da, db) in a.discs().iter().zip(b.discs()) {
                let diff = (da.unbalance.planar() - db.unbalance.planar()).norm();
                prop_assert!(diff <= 1e-12 * (1.0 + da.unbalance.magnitude) * 40.0);
            }
        }
    }
}
