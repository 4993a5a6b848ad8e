//! Axis-aligned boxes: Cartesian products of closed intervals.
//!
//! Purpose
//! - `BoxWindow` is the default observation window of a point process: a
//!   product `[a_1, b_1] × … × [a_n, b_n]` with exact, inclusive membership.
//! - Sampling draws every axis independently; for a product set this is
//!   exactly uniform in volume.
//!
//! Construction
//! - `BoxWindow::new` takes raw `[low, high]` pairs and validates their shape,
//!   finiteness, and ordering, in that order, axis by axis.
//! - `BoxWindow::unit` derives the unit-side box around a center (origin by
//!   default) and returns a plain `BoxWindow`.

mod types;

pub use types::Interval;

use std::fmt;

use nalgebra::{DMatrix, DVector};
use rand::Rng;

use crate::error::WindowError;
use crate::rng::Draws;
use crate::window::Window;

/// Half the side length of a unit box.
const UNIT_HALF_SIDE: f64 = 0.5;

/// Axis-aligned box `[low_1, high_1] × … × [low_n, high_n]`.
///
/// Invariants:
/// - At least one axis.
/// - Every axis is a valid `Interval` (finite, `low <= high`).
#[derive(Clone, Debug, PartialEq)]
pub struct BoxWindow {
    bounds: Vec<Interval>,
}

impl BoxWindow {
    /// Build from a sequence of `[low, high]` pairs.
    pub fn new<I, P>(bounds: I) -> Result<Self, WindowError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[f64]>,
    {
        let intervals = bounds
            .into_iter()
            .enumerate()
            .map(|(axis, pair)| match pair.as_ref() {
                &[low, high] => Interval::on_axis(axis, low, high),
                other => Err(WindowError::InvalidShape {
                    axis,
                    len: other.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_intervals(intervals)
    }

    pub fn from_intervals(bounds: Vec<Interval>) -> Result<Self, WindowError> {
        if bounds.is_empty() {
            return Err(WindowError::InvalidDimension);
        }
        Ok(Self { bounds })
    }

    /// Box with unit side length centered at `center` (origin when `None`).
    pub fn unit(center: Option<&[f64]>, dimension: usize) -> Result<Self, WindowError> {
        let bounds: Vec<[f64; 2]> = match center {
            Some(c) => {
                WindowError::check_dimension(dimension, c.len())?;
                c.iter()
                    .map(|&x| [x - UNIT_HALF_SIDE, x + UNIT_HALF_SIDE])
                    .collect()
            }
            None => vec![[-UNIT_HALF_SIDE, UNIT_HALF_SIDE]; dimension],
        };
        Self::new(bounds)
    }

    #[inline]
    pub fn bounds(&self) -> &[Interval] {
        &self.bounds
    }

    /// Midpoint of every axis.
    pub fn center(&self) -> DVector<f64> {
        DVector::from_iterator(self.bounds.len(), self.bounds.iter().map(Interval::midpoint))
    }

    /// Side length of every axis.
    pub fn lengths(&self) -> DVector<f64> {
        DVector::from_iterator(self.bounds.len(), self.bounds.iter().map(Interval::length))
    }
}

impl Window for BoxWindow {
    #[inline]
    fn dimension(&self) -> usize {
        self.bounds.len()
    }

    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        WindowError::check_dimension(self.dimension(), point.len())?;
        Ok(self
            .bounds
            .iter()
            .zip(point)
            .all(|(segment, &x)| segment.contains(x)))
    }

    fn volume(&self) -> f64 {
        self.bounds.iter().map(Interval::length).product()
    }

    fn rand<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> DMatrix<f64> {
        // Column-major fill: all n draws of axis 0, then axis 1, ...
        DMatrix::from_fn(n, self.dimension(), |_, axis| {
            let segment = &self.bounds[axis];
            rng.uniform_scalar(segment.low(), segment.high())
        })
    }
}

impl fmt::Display for BoxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxWindow: ")?;
        for (i, segment) in self.bounds.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
