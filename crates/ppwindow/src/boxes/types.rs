//! Closed interval `[low, high]`, one axis of a `BoxWindow`.

use std::fmt;

use crate::error::WindowError;

/// Closed segment `[low, high]` on one axis.
///
/// Invariants:
/// - `low` and `high` are finite and `low <= high` (zero length allowed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Result<Self, WindowError> {
        Self::on_axis(0, low, high)
    }

    /// Validate as the bound of `axis` so errors point at the right pair.
    pub(crate) fn on_axis(axis: usize, low: f64, high: f64) -> Result<Self, WindowError> {
        if !(low.is_finite() && high.is_finite()) {
            return Err(WindowError::NonFinite { what: "box bound" });
        }
        if low > high {
            return Err(WindowError::InvalidOrdering { axis, low, high });
        }
        Ok(Self { low, high })
    }

    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.high - self.low
    }
    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * self.low + 0.5 * self.high
    }
    /// Inclusive on both ends.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing `.0` on integral floats.
        write!(f, "[{:?}, {:?}]", self.low, self.high)
    }
}
