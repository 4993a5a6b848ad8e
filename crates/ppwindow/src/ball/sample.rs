//! Volume-uniform sampling in an n-ball.
//!
//! Model
//! - Direction: a standard-normal vector, normalized. The Gaussian is
//!   rotation invariant, so the direction is uniform on the sphere in every
//!   dimension (a normalized uniform-cube draw is not).
//! - Radius: `r = R · u^(1/n)` with `u` uniform on `[0, 1)`, so that
//!   `P(|x - c| <= r) = (r / R)^n`, the share of volume inside radius `r`.
//!   In 2D this is the familiar `R · sqrt(u)` rule.
//! - Since `u < 1`, every sample satisfies `|x - c| < R` up to rounding.
//! - Coordinates past `f64::MAX` are clamped back to it; that moves the point
//!   toward the (finite) center on that axis, so it stays inside.

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::cfg::DIRECTION_NORM_EPS;
use crate::rng::Draws;

/// `n × dim(center)` matrix of points uniform in the ball `B(center, radius)`.
pub(crate) fn sample_ball<R: Rng + ?Sized>(
    center: &DVector<f64>,
    radius: f64,
    n: usize,
    rng: &mut R,
) -> DMatrix<f64> {
    let dimension = center.len();
    let mut points = rng.standard_normal_matrix(n, dimension);
    let radial = rng.uniform_matrix(n, 1);
    let exponent = 1.0 / dimension as f64;
    for i in 0..n {
        let mut row = points.row_mut(i);
        let mut norm = row.norm();
        while norm < DIRECTION_NORM_EPS {
            for x in row.iter_mut() {
                *x = rng.sample(StandardNormal);
            }
            norm = row.norm();
        }
        // Normalize before scaling so no intermediate exceeds `radius`.
        let r = radius * radial[(i, 0)].powf(exponent);
        for (x, c) in row.iter_mut().zip(center.iter()) {
            let unit = *x / norm;
            // Clamping toward a finite center only shortens the offset.
            *x = (c + unit * r).clamp(f64::MIN, f64::MAX);
        }
    }
    points
}
