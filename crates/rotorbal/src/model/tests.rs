use super::*;
use crate::error::BalanceError;
use std::f64::consts::FRAC_PI_4;

#[test]
fn build_preserves_order_and_values() {
    let set = build(
        0.05,
        FRAC_PI_4,
        vec![
            DiscRow::new(3, 0.01, 1.0),
            DiscRow::new("rear", 0.02, -7.0),
            DiscRow::new(1, 0.0, 100.0),
        ],
    )
    .unwrap();
    assert_eq!(set.len(), 3);
    let ids: Vec<String> = set.discs().iter().map(|d| d.id.to_string()).collect();
    assert_eq!(ids, ["3", "rear", "1"]);
    // no normalization at construction
    assert_eq!(set.discs()[1].unbalance.angle, -7.0);
    assert_eq!(set.discs()[2].unbalance.angle, 100.0);
    assert_eq!(set.shaft(), Unbalance::new(0.05, FRAC_PI_4));
}

#[test]
fn build_rejects_negative_magnitude() {
    let err = build(0.05, 0.0, vec![DiscRow::new(1, -0.01, 0.0)]).unwrap_err();
    assert!(matches!(err, BalanceError::InvalidInput { .. }));
    let err = build(-1.0, 0.0, vec![]).unwrap_err();
    assert!(matches!(err, BalanceError::InvalidInput { .. }));
}

#[test]
fn build_rejects_duplicate_ids() {
    let err = build(
        0.0,
        0.0,
        vec![DiscRow::new(1, 0.01, 0.0), DiscRow::new(1, 0.02, 0.0)],
    )
    .unwrap_err();
    match err {
        BalanceError::InvalidInput { reason } => assert!(reason.contains("duplicate")),
        other => panic!("unexpected error {other:?}"),
    }
    // numeric and textual ids never collide
    assert!(build(
        0.0,
        0.0,
        vec![DiscRow::new(1, 0.01, 0.0), DiscRow::new("1", 0.02, 0.0)]
    )
    .is_ok());
}

#[test]
fn build_rejects_non_finite() {
    assert!(build(f64::NAN, 0.0, vec![]).is_err());
    assert!(build(0.1, f64::INFINITY, vec![]).is_err());
    assert!(build(0.1, 0.0, vec![DiscRow::new(1, f64::INFINITY, 0.0)]).is_err());
    assert!(build(0.1, 0.0, vec![DiscRow::new(1, 0.1, f64::NAN)]).is_err());
}

#[test]
fn planar_and_cartesian_forms() {
    let u = Unbalance::new(2.0, std::f64::consts::FRAC_PI_2);
    let p = u.planar();
    assert!(p.x.abs() < 1e-12);
    assert!((p.y - 2.0).abs() < 1e-12);
    let c = u.cartesian();
    assert_eq!(c.z, 0.0);
    assert_eq!((c.x, c.y), (p.x, p.y));
    let r = u.rotated_by(std::f64::consts::FRAC_PI_2);
    assert_eq!(r.magnitude, 2.0);
    assert!((r.planar().x + 2.0).abs() < 1e-12);
    // original untouched
    assert_eq!(u.angle, std::f64::consts::FRAC_PI_2);
}

#[test]
fn sample_rotor_matches_reference_data() {
    let set = sample_rotor();
    assert_eq!(set.len(), 4);
    let mags: Vec<f64> = set.discs().iter().map(|d| d.unbalance.magnitude).collect();
    assert_eq!(mags, [0.02, 0.03, 0.01, 0.04]);
    assert!((set.discs()[3].unbalance.angle - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    assert!((set.shaft().angle - FRAC_PI_4).abs() < 1e-12);
    assert_eq!(set.vectors().count(), 5);
}

#[test]
fn discs_all_zero_detects_flat_objective() {
    let flat = build(
        0.1,
        0.0,
        vec![DiscRow::new(1, 0.0, 0.3), DiscRow::new(2, 0.0, 1.0)],
    )
    .unwrap();
    assert!(flat.discs_all_zero());
    assert!(!sample_rotor().discs_all_zero());
}
