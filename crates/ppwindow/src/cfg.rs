//! Tolerance defaults for window sampling (internal).
//!
//! Policy
//! - Fixed constants rather than a runtime config; the windows themselves are
//!   exact (closed intervals, `<=` on the radius) and need no epsilons.

/// Gaussian direction draws with a norm below this are redrawn before
/// normalization.
pub(crate) const DIRECTION_NORM_EPS: f64 = 1e-12;
