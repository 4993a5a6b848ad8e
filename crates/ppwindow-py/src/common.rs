use nalgebra::DMatrix;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use ppwindow::WindowError;

pub fn map_window_err(err: WindowError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Rows of an `n × d` sample matrix as Python-friendly nested lists.
pub fn matrix_to_rows(points: &DMatrix<f64>) -> Vec<Vec<f64>> {
    points
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}
