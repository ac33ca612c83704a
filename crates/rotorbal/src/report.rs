//! Read-only views for plotting and export.
//!
//! Rendering is left to callers (quiver or polar plots); this module only
//! supplies labels and polar coordinates recovered from the Cartesian form.

use crate::model::{Disc, UnbalanceSet};

const SHAFT_LABEL: &str = "Shaft";

fn disc_label(d: &Disc) -> String {
    format!("Disc {}", d.id)
}

/// One labelled vector in polar form, as a polar plot consumes it.
#[derive(Clone, Debug, PartialEq)]
pub struct PolarRow {
    pub label: String,
    /// `atan2(y, x)`, in (-π, π].
    pub angle: f64,
    pub magnitude: f64,
}

impl PolarRow {
    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// "Shaft" for `None`, "Disc <id>" for a disc index; `None` past the last disc.
pub fn label_for(set: &UnbalanceSet, index: Option<usize>) -> Option<String> {
    match index {
        None => Some(SHAFT_LABEL.to_string()),
        Some(i) => set.discs().get(i).map(disc_label),
    }
}

/// Shaft first, then discs in order.
pub fn polar_rows(set: &UnbalanceSet) -> Vec<PolarRow> {
    let shaft = set.shaft().planar();
    let mut rows = Vec::with_capacity(set.len() + 1);
    rows.push(PolarRow {
        label: SHAFT_LABEL.to_string(),
        angle: shaft.y.atan2(shaft.x),
        magnitude: shaft.norm(),
    });
    for d in set.discs() {
        let p = d.unbalance.planar();
        rows.push(PolarRow {
            label: disc_label(d),
            angle: p.y.atan2(p.x),
            magnitude: p.norm(),
        });
    }
    rows
}
