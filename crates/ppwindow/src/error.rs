//! Error type shared by both window kinds.
//!
//! Every variant is raised at the offending call (construction or a
//! membership test) and returned to the caller unchanged.

use std::fmt;

/// Errors surfaced by window construction and containment queries.
#[derive(Clone, Debug, PartialEq)]
pub enum WindowError {
    /// The arguments imply zero dimensions (empty center or empty bounds).
    InvalidDimension,
    /// Ball radius is negative (or NaN).
    InvalidRadius { radius: f64 },
    /// A bound pair does not have exactly two components.
    InvalidShape { axis: usize, len: usize },
    /// A box interval has `low > high`.
    InvalidOrdering { axis: usize, low: f64, high: f64 },
    /// A point or center has the wrong number of coordinates.
    DimensionMismatch { expected: usize, found: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { what: &'static str },
}

impl WindowError {
    pub(crate) fn mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Ok when `found == expected`, otherwise `DimensionMismatch`.
    pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::mismatch(expected, found))
        }
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension => write!(f, "window needs at least one dimension"),
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::InvalidShape { axis, len } => write!(
                f,
                "bound on axis {axis} must be a [low, high] pair, got {len} components"
            ),
            Self::InvalidOrdering { axis, low, high } => write!(
                f,
                "bound on axis {axis} is out of order: low {low} > high {high}"
            ),
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {expected} coordinates, got {found}"
            ),
            Self::NonFinite { what } => write!(f, "{what} must be finite"),
        }
    }
}

impl std::error::Error for WindowError {}
