//! `BoxWindow` / `BallWindow` Python classes.
//!
//! Points cross the boundary as plain sequences (lists, tuples, 1-D NumPy
//! arrays); samples come back as a list of rows.

use crate::common::{map_window_err, matrix_to_rows};
use ppwindow::{BallWindow, BoxWindow, Window};
use pyo3::prelude::*;

#[pyclass(name = "BoxWindow", module = "ppwindow_native", frozen)]
pub struct PyBoxWindow {
    inner: BoxWindow,
}

#[pymethods]
impl PyBoxWindow {
    #[new]
    fn new(bounds: Vec<Vec<f64>>) -> PyResult<Self> {
        let inner = BoxWindow::new(&bounds).map_err(map_window_err)?;
        Ok(Self { inner })
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __len__(&self) -> usize {
        self.inner.dimension()
    }

    fn __contains__(&self, point: Vec<f64>) -> PyResult<bool> {
        self.inner.contains(&point).map_err(map_window_err)
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn volume(&self) -> f64 {
        self.inner.volume()
    }

    /// True iff every point lies in the box.
    fn indicator_function(&self, points: Vec<Vec<f64>>) -> PyResult<bool> {
        self.inner.indicator_function(points).map_err(map_window_err)
    }

    /// `n` uniform points; `rng` is an optional integer seed.
    #[pyo3(signature = (n = 1, rng = None))]
    fn rand(&self, n: usize, rng: Option<u64>) -> Vec<Vec<f64>> {
        matrix_to_rows(&self.inner.rand_seeded(n, rng))
    }

    /// `[[low, high], ...]`, one pair per axis.
    #[getter]
    fn bounds(&self) -> Vec<(f64, f64)> {
        self.inner
            .bounds()
            .iter()
            .map(|iv| (iv.low(), iv.high()))
            .collect()
    }
}

#[pyclass(name = "BallWindow", module = "ppwindow_native", frozen)]
pub struct PyBallWindow {
    inner: BallWindow,
}

#[pymethods]
impl PyBallWindow {
    #[new]
    fn new(center: Vec<f64>, radius: f64) -> PyResult<Self> {
        let inner = BallWindow::new(&center, radius).map_err(map_window_err)?;
        Ok(Self { inner })
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __len__(&self) -> usize {
        self.inner.dimension()
    }

    fn __contains__(&self, point: Vec<f64>) -> PyResult<bool> {
        self.inner.contains(&point).map_err(map_window_err)
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn volume(&self) -> f64 {
        self.inner.volume()
    }

    fn indicator_function(&self, points: Vec<Vec<f64>>) -> PyResult<bool> {
        self.inner.indicator_function(points).map_err(map_window_err)
    }

    #[pyo3(signature = (n = 1, rng = None))]
    fn rand(&self, n: usize, rng: Option<u64>) -> Vec<Vec<f64>> {
        matrix_to_rows(&self.inner.rand_seeded(n, rng))
    }

    #[getter]
    fn center(&self) -> Vec<f64> {
        self.inner.center().iter().copied().collect()
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.inner.radius()
    }
}

/// Side-1 box centered at `center` (origin when omitted).
#[pyfunction]
#[pyo3(signature = (dimension, center = None))]
pub fn unit_box_window(dimension: usize, center: Option<Vec<f64>>) -> PyResult<PyBoxWindow> {
    let inner = BoxWindow::unit(center.as_deref(), dimension).map_err(map_window_err)?;
    Ok(PyBoxWindow { inner })
}

/// Radius-1 ball centered at `center` (origin when omitted).
#[pyfunction]
#[pyo3(signature = (dimension, center = None))]
pub fn unit_ball_window(dimension: usize, center: Option<Vec<f64>>) -> PyResult<PyBallWindow> {
    let inner = BallWindow::unit(center.as_deref(), dimension).map_err(map_window_err)?;
    Ok(PyBallWindow { inner })
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_class::<PyBoxWindow>()?;
    m.add_class::<PyBallWindow>()?;
    m.add_function(wrap_pyfunction!(unit_box_window, m)?)?;
    m.add_function(wrap_pyfunction!(unit_ball_window, m)?)?;
    Ok(())
}
