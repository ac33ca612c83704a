//! Disc measurements from CSV (`disc_id, disc_magnitude, disc_angle`).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rotorbal::{DiscId, DiscRow};
use std::path::Path;

pub const COL_ID: &str = "disc_id";
pub const COL_MAGNITUDE: &str = "disc_magnitude";
pub const COL_ANGLE: &str = "disc_angle";

/// Integer-looking ids stay numeric; anything else is a name.
fn parse_id(raw: &str) -> DiscId {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map(DiscId::Num)
        .unwrap_or_else(|_| DiscId::Name(raw.to_string()))
}

/// Read disc rows in file order. Angles are converted from degrees when asked.
pub fn read_disc_rows(path: &Path, degrees: bool) -> Result<Vec<DiscRow>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("parsing {}", path.display()))?;

    let ids = df
        .column(COL_ID)
        .with_context(|| format!("missing column {COL_ID}"))?
        .cast(&DataType::String)?;
    let mags = df
        .column(COL_MAGNITUDE)
        .with_context(|| format!("missing column {COL_MAGNITUDE}"))?
        .cast(&DataType::Float64)?;
    let angles = df
        .column(COL_ANGLE)
        .with_context(|| format!("missing column {COL_ANGLE}"))?
        .cast(&DataType::Float64)?;

    let mut rows = Vec::with_capacity(df.height());
    for (k, ((id, m), a)) in ids
        .str()?
        .into_iter()
        .zip(mags.f64()?.into_iter())
        .zip(angles.f64()?.into_iter())
        .enumerate()
    {
        let (Some(id), Some(m), Some(a)) = (id, m, a) else {
            bail!("row {k}: empty or non-numeric cell in {}", path.display());
        };
        let a = if degrees { a.to_radians() } else { a };
        rows.push(DiscRow {
            id: parse_id(id),
            magnitude: m,
            angle: a,
        });
    }
    tracing::info!(rows = rows.len(), path = %path.display(), degrees, "disc_rows_read");
    Ok(rows)
}
