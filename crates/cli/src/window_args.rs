//! Command-line description of a window and its conversion to a library value.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use ppwindow::prelude::*;
use rand::Rng;

/// Comma-separated coordinates, e.g. `0.5,-1,2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Coords(pub Vec<f64>);

impl FromStr for Coords {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|err| format!("invalid coordinate {part:?}: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Coords)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WindowKind {
    Box,
    Ball,
    UnitBox,
    UnitBall,
}

#[derive(Args, Clone, Debug)]
pub struct WindowArgs {
    /// Window kind
    #[arg(long, value_enum)]
    pub kind: WindowKind,
    /// Box bound `LOW,HIGH`, one per axis (repeat for each axis)
    #[arg(long = "bound", allow_hyphen_values = true)]
    pub bounds: Vec<Coords>,
    /// Center `X,Y,...` (ball, unit-box, unit-ball)
    #[arg(long, allow_hyphen_values = true)]
    pub center: Option<Coords>,
    /// Ball radius
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,
    /// Dimension of a unit window (defaults to the center length)
    #[arg(long)]
    pub dim: Option<usize>,
}

impl WindowArgs {
    pub fn build(&self) -> Result<AnyWindow> {
        match self.kind {
            WindowKind::Box => {
                if self.bounds.is_empty() {
                    bail!("a box window needs at least one --bound LOW,HIGH");
                }
                let window = BoxWindow::new(self.bounds.iter().map(|c| c.0.as_slice()))
                    .context("building box window")?;
                Ok(AnyWindow::Box(window))
            }
            WindowKind::Ball => {
                let center = self
                    .center
                    .as_ref()
                    .context("a ball window needs --center")?;
                let radius = self.radius.context("a ball window needs --radius")?;
                let window =
                    BallWindow::new(&center.0, radius).context("building ball window")?;
                Ok(AnyWindow::Ball(window))
            }
            WindowKind::UnitBox => {
                let (center, dim) = self.unit_params()?;
                let window = BoxWindow::unit(center, dim).context("building unit box window")?;
                Ok(AnyWindow::Box(window))
            }
            WindowKind::UnitBall => {
                let (center, dim) = self.unit_params()?;
                let window =
                    BallWindow::unit(center, dim).context("building unit ball window")?;
                Ok(AnyWindow::Ball(window))
            }
        }
    }

    fn unit_params(&self) -> Result<(Option<&[f64]>, usize)> {
        let center = self.center.as_ref().map(|c| c.0.as_slice());
        let dim = match (self.dim, center) {
            (Some(dim), _) => dim,
            (None, Some(c)) => c.len(),
            (None, None) => bail!("a unit window needs --dim or --center"),
        };
        if self.radius.is_some() || !self.bounds.is_empty() {
            tracing::warn!(kind = ?self.kind, "ignoring --radius/--bound for a unit window");
        }
        Ok((center, dim))
    }
}

/// Either window kind behind one `Window` impl.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyWindow {
    Box(BoxWindow),
    Ball(BallWindow),
}

impl Window for AnyWindow {
    fn dimension(&self) -> usize {
        match self {
            AnyWindow::Box(w) => w.dimension(),
            AnyWindow::Ball(w) => w.dimension(),
        }
    }

    fn contains(&self, point: &[f64]) -> Result<bool, WindowError> {
        match self {
            AnyWindow::Box(w) => w.contains(point),
            AnyWindow::Ball(w) => w.contains(point),
        }
    }

    fn volume(&self) -> f64 {
        match self {
            AnyWindow::Box(w) => w.volume(),
            AnyWindow::Ball(w) => w.volume(),
        }
    }

    fn rand<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> DMatrix<f64> {
        match self {
            AnyWindow::Box(w) => w.rand(n, rng),
            AnyWindow::Ball(w) => w.rand(n, rng),
        }
    }
}

impl fmt::Display for AnyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyWindow::Box(w) => fmt::Display::fmt(w, f),
            AnyWindow::Ball(w) => fmt::Display::fmt(w, f),
        }
    }
}
