//! PyO3 bindings for the `rotorbal` balancing engine.
//!
//! Notes
//! - Keep bindings thin; plotting and data wrangling stay on the Python side.
//! - Disc ids are integers here; use the Rust API for named discs.

mod common;

use common::{map_balance_err, set_from_py, PyDisc};
use pyo3::prelude::*;
use rotorbal::{metric, optimize, BalanceCfg};

/// Residual imbalance of the unrotated shaft + discs.
#[pyfunction]
fn residual(shaft: (f64, f64), discs: Vec<PyDisc>) -> PyResult<f64> {
    let set = set_from_py(shaft, discs)?;
    Ok(metric::residual(&set))
}

/// Optimal rotations: returns `(angles, residual, converged, iterations)`.
#[pyfunction]
#[pyo3(signature = (shaft, discs, seed=None, iteration_budget=1000, restart_count=10))]
fn balance(
    py: Python<'_>,
    shaft: (f64, f64),
    discs: Vec<PyDisc>,
    seed: Option<u64>,
    iteration_budget: usize,
    restart_count: usize,
) -> PyResult<(Vec<f64>, f64, bool, usize)> {
    let set = set_from_py(shaft, discs)?;
    let cfg = BalanceCfg {
        iteration_budget,
        restart_count,
        random_seed: seed,
        ..BalanceCfg::default()
    };
    let res = py
        .allow_threads(|| optimize(&set, &cfg))
        .map_err(map_balance_err)?;
    Ok((res.angles, res.residual, res.converged, res.iterations))
}

#[pymodule]
fn rotorbal_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(residual, m)?)?;
    m.add_function(wrap_pyfunction!(balance, m)?)?;
    Ok(())
}
