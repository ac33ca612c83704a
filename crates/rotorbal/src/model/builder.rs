//! Validated construction of `UnbalanceSet` from raw measurement rows.

use std::collections::HashSet;

use super::types::{Disc, DiscId, Unbalance, UnbalanceSet};
use crate::error::BalanceError;

/// One measured disc: id, magnitude (≥ 0) and installed angle in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscRow {
    pub id: DiscId,
    pub magnitude: f64,
    pub angle: f64,
}

impl DiscRow {
    pub fn new(id: impl Into<DiscId>, magnitude: f64, angle: f64) -> Self {
        Self {
            id: id.into(),
            magnitude,
            angle,
        }
    }
}

fn check_vector(what: &str, magnitude: f64, angle: f64) -> Result<(), BalanceError> {
    if !magnitude.is_finite() {
        return Err(BalanceError::invalid_input(format!(
            "{what} magnitude must be finite, got {magnitude}"
        )));
    }
    if magnitude < 0.0 {
        return Err(BalanceError::invalid_input(format!(
            "{what} magnitude must be >= 0, got {magnitude}"
        )));
    }
    if !angle.is_finite() {
        return Err(BalanceError::invalid_input(format!(
            "{what} angle must be finite, got {angle}"
        )));
    }
    Ok(())
}

/// Build the shaft + discs set. Disc order is preserved as given.
pub fn build(
    shaft_magnitude: f64,
    shaft_angle: f64,
    disc_rows: Vec<DiscRow>,
) -> Result<UnbalanceSet, BalanceError> {
    check_vector("shaft", shaft_magnitude, shaft_angle)?;
    {
        let mut seen: HashSet<&DiscId> = HashSet::with_capacity(disc_rows.len());
        for row in &disc_rows {
            check_vector(&format!("disc {}", row.id), row.magnitude, row.angle)?;
            if !seen.insert(&row.id) {
                return Err(BalanceError::invalid_input(format!(
                    "duplicate disc id {}",
                    row.id
                )));
            }
        }
    }
    Ok(UnbalanceSet {
        shaft: Unbalance::new(shaft_magnitude, shaft_angle),
        discs: rows_to_discs(disc_rows),
    })
}

/// Reference rotor: shaft 0.05 @ 45°, discs 1..4 with magnitudes
/// 0.02/0.03/0.01/0.04 at 0°/90°/180°/270°.
pub fn sample_rotor() -> UnbalanceSet {
    let rows = [(1, 0.02, 0.0), (2, 0.03, 90.0), (3, 0.01, 180.0), (4, 0.04, 270.0)]
        .into_iter()
        .map(|(id, m, deg): (i64, f64, f64)| DiscRow::new(id, m, deg.to_radians()))
        .collect();
    UnbalanceSet {
        shaft: Unbalance::new(0.05, 45f64.to_radians()),
        discs: rows_to_discs(rows),
    }
}

fn rows_to_discs(rows: Vec<DiscRow>) -> Vec<Disc> {
    rows.into_iter()
        .map(|row| Disc {
            id: row.id,
            unbalance: Unbalance::new(row.magnitude, row.angle),
        })
        .collect()
}
