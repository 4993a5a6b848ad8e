//! PyO3 bindings for the `ppwindow` observation windows.
//!
//! Notes
//! - Bindings stay thin: validation, sampling and rendering all happen in the
//!   `ppwindow` crate; `WindowError` surfaces as `ValueError`.
//! - Seeds are plain integers; `rng=None` draws from the process-wide source.

use pyo3::prelude::*;

mod common;
mod windows;

#[pymodule]
fn ppwindow_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", ppwindow::VERSION)?;
    windows::register(m)?;
    Ok(())
}
