//! The `Window` contract shared by boxes and balls.
//!
//! Conventions
//! - Points are borrowed coordinate slices; a slice whose length differs from
//!   `dimension()` is an error, never truncated or padded.
//! - Samples come back as an `n × dimension` matrix, one point per row.
//! - The "indicator function" is the batch predicate "every point lies in the
//!   window", not a per-point 0/1 map.

use std::fmt;

use nalgebra::DMatrix;
use rand::Rng;

use crate::error::WindowError;
use crate::rng::random_source;

/// A bounded region of R^n supporting containment, volume, and sampling.
pub trait Window: fmt::Display {
    fn dimension(&self) -> usize;

    /// Closed-set membership of `point`.
    fn contains(&self, point: &[f64]) -> Result<bool, WindowError>;

    fn volume(&self) -> f64;

    /// `n` points uniform over the window's volume, drawn from `rng`.
    fn rand<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> DMatrix<f64>;

    /// True iff every point lies in the window. Stops at the first point outside.
    fn indicator_function<I, P>(&self, points: I) -> Result<bool, WindowError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[f64]>,
    {
        for point in points {
            if !self.contains(point.as_ref())? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `indicator_function` over the rows of a sample matrix.
    fn indicator_function_rows(&self, points: &DMatrix<f64>) -> Result<bool, WindowError> {
        WindowError::check_dimension(self.dimension(), points.ncols())?;
        let mut row = vec![0.0; points.ncols()];
        for r in points.row_iter() {
            for (dst, src) in row.iter_mut().zip(r.iter()) {
                *dst = *src;
            }
            if !self.contains(&row)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `rand` with a source built from `seed` (`None` uses the shared generator).
    fn rand_seeded(&self, n: usize, seed: Option<u64>) -> DMatrix<f64> {
        let mut rng = random_source(seed);
        self.rand(n, &mut rng)
    }
}
