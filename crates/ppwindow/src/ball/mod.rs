//! Euclidean balls `B(c, R) = { x : |x - c|_2 <= R }` in any dimension.
//!
//! Purpose
//! - `BallWindow` is the round observation window: exact closed membership,
//!   closed-form volume, and volume-uniform sampling.
//!
//! Layout
//! - `volume`: the n-ball formula as free functions (also used by benches/CLI).
//! - `sample`: the Gaussian-direction, `u^(1/n)`-radius sampler.
//!
//! Conventions
//! - A negative radius is an error; it is never replaced by its absolute value.
//! - `BallWindow::unit` builds the radius-1 ball and returns a plain `BallWindow`.

mod sample;
pub mod volume;

use std::fmt;

use nalgebra::{DMatrix, DVector};
use rand::Rng;

use crate::boxes::BoxWindow;
use crate::error::WindowError;
use crate::window::Window;

pub use volume::{ball_volume, unit_ball_volume};

/// Closed Euclidean ball.
///
/// Invariants:
/// - `center` has at least one coordinate, all finite.
/// - `radius` is finite and `>= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BallWindow {
    center: DVector<f64>,
    radius: f64,
}

impl BallWindow {
    pub fn new(center: &[f64], radius: f64) -> Result<Self, WindowError> {
        Self::from_vector(DVector::from_column_slice(center), radius)
    }

    pub fn from_vector(center: DVector<f64>, radius: f64) -> Result<Self, WindowError> {
        if center.is_empty() {
            return Err(WindowError::InvalidDimension);
        }
        if radius.is_nan() || radius < 0.0 {
            return Err(WindowError::InvalidRadius { radius });
        }
        if !radius.is_finite() {
            return Err(WindowError::NonFinite { what: "ball radius" });
        }
        if !center.iter().all(|c| c.is_finite()) {
            return Err(WindowError::NonFinite {
                what: "ball center",
            });
        }
        Ok(Self { center, radius })
    }

    /// Radius-1 ball centered at `center` (origin when `None`).
    pub fn unit(center: Option<&[f64]>, dimension: usize) -> Result<Self, WindowError> {
        let center = match center {
            Some(c) => {
                WindowError::check_dimension(dimension, c.len())?;
                DVector::from_column_slice(c)
            }
            None => DVector::zeros(dimension),
        };
        Self::from_vector(center, 1.0)
    }

    #[inline]
    pub fn center(&self) -> &DVector<f64> {
        &self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Smallest axis-aligned box containing the ball.
    pub fn bounding_box(&self) -> Result<BoxWindow, WindowError> {
        BoxWindow::new(
            self.center
                .iter()
                .map(|&c| [c - self.radius, c + self.radius]),
        )
    }
}

impl Window for BallWindow {
    #[inline]
    fn dimension(&self) -> usize {
        self.center.len()
    }

    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        WindowError::check_dimension(self.dimension(), point.len())?;
        // `hypot` folds without squaring, so large finite offsets do not overflow.
        let dist = self
            .center
            .iter()
            .zip(point)
            .fold(0.0f64, |acc, (c, x)| acc.hypot(x - c));
        Ok(dist <= self.radius)
    }

    fn volume(&self) -> f64 {
        ball_volume(self.dimension(), self.radius)
    }

    fn rand<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> DMatrix<f64> {
        sample::sample_ball(&self.center, self.radius, n, rng)
    }
}

/// `BallWindow: ([c_1 c_2 ...], R)`: center components in Rust's shortest
/// `{}` float form (`1`, `2.5`), not numpy's padded `[1.  2.5]`; radius in
/// `{:?}` form (`5.0`).
impl fmt::Display for BallWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BallWindow: ([")?;
        for (i, c) in self.center.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "], {:?})", self.radius)
    }
}
