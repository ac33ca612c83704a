use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rotorbal::{build, BalanceError, DiscRow, UnbalanceSet};

pub type PyDisc = (i64, f64, f64);

/// `shaft = (magnitude, angle)`, `discs = [(id, magnitude, angle)]`, angles in radians.
pub fn set_from_py(shaft: (f64, f64), discs: Vec<PyDisc>) -> PyResult<UnbalanceSet> {
    let rows = discs
        .into_iter()
        .map(|(id, m, a)| DiscRow::new(id, m, a))
        .collect();
    build(shaft.0, shaft.1, rows).map_err(map_balance_err)
}

pub fn map_balance_err(err: BalanceError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
