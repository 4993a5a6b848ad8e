//! Observation windows for spatial point-process simulation.
//!
//! A window is a bounded region of R^n that answers four questions: its
//! dimension, whether a point lies in it, its volume, and "give me `n` points
//! uniform over you". Two kinds exist:
//! - [`BoxWindow`]: axis-aligned product of closed intervals;
//! - [`BallWindow`]: closed Euclidean ball.
//!
//! Unit-sized variants are constructors (`BoxWindow::unit`, `BallWindow::unit`)
//! returning the plain types; there is no separate unit type.
//!
//! Randomness always enters through a caller-supplied `rand::Rng`; see
//! [`rng`] for the seeded/shared source used by `Window::rand_seeded`.

pub mod ball;
pub mod boxes;
mod cfg;
pub mod error;
pub mod rng;
pub mod window;

#[cfg(test)]
mod tests_props;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ball::BallWindow;
pub use boxes::{BoxWindow, Interval};
pub use error::WindowError;
pub use rng::{random_source, Draws, RandomSource};
pub use window::Window;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ball::{ball_volume, unit_ball_volume, BallWindow};
    pub use crate::boxes::{BoxWindow, Interval};
    pub use crate::error::WindowError;
    pub use crate::rng::{random_source, Draws, RandomSource};
    pub use crate::window::Window;
    pub use nalgebra::{DMatrix, DVector};
}
