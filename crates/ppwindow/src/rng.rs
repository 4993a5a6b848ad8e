//! Random-draw source used by window sampling.
//!
//! Purpose
//! - Give every `rand` call the same two primitives: a uniform scalar on an
//!   interval and a `count × dimension` matrix of uniform draws on `[0, 1)`.
//! - Make the seed policy explicit: `Some(seed)` is reproducible and private to
//!   the returned source, `None` shares one process-wide generator.
//!
//! Model
//! - `Draws` is blanket-implemented for every `rand::Rng`, so callers may pass
//!   their own `StdRng` (or any other generator) instead of a `RandomSource`.
//! - The process-wide generator is created from OS entropy on first use and is
//!   guarded by a mutex; its output is not reproducible.

use std::sync::{Mutex, OnceLock, PoisonError};

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

static GLOBAL: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn global() -> &'static Mutex<StdRng> {
    GLOBAL.get_or_init(|| Mutex::new(StdRng::from_entropy()))
}

/// Run `f` against the shared generator. A poisoned lock still holds a valid
/// generator state, so it is recovered rather than propagated.
fn with_global<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    let mut guard = global().lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Seeded or shared generator handed to window sampling.
#[derive(Clone, Debug)]
pub enum RandomSource {
    /// Independent generator; identical seeds give identical streams.
    Seeded { seed: u64, rng: StdRng },
    /// Handle to the lazily created process-wide generator.
    Global,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self::Seeded {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this source was built from, `None` for the shared generator.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Self::Seeded { seed, .. } => Some(*seed),
            Self::Global => None,
        }
    }
}

/// Build a random source: seeded when `seed` is given, otherwise the shared one.
pub fn random_source(seed: Option<u64>) -> RandomSource {
    match seed {
        Some(seed) => RandomSource::from_seed(seed),
        None => RandomSource::Global,
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Seeded { rng, .. } => rng.next_u32(),
            Self::Global => with_global(|rng| rng.next_u32()),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Seeded { rng, .. } => rng.next_u64(),
            Self::Global => with_global(|rng| rng.next_u64()),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Seeded { rng, .. } => rng.fill_bytes(dest),
            Self::Global => with_global(|rng| rng.fill_bytes(dest)),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Self::Seeded { rng, .. } => rng.try_fill_bytes(dest),
            Self::Global => with_global(|rng| rng.try_fill_bytes(dest)),
        }
    }
}

/// Uniform and Gaussian draws in the shapes the windows need.
pub trait Draws: Rng {
    /// Uniform draw on the closed interval `[low, high]`.
    ///
    /// Pre: `low <= high`, both finite. A degenerate interval returns `low`.
    /// A span `high - low` too wide for `f64` is drawn by interpolation instead.
    fn uniform_scalar(&mut self, low: f64, high: f64) -> f64 {
        debug_assert!(low <= high, "uniform_scalar needs low <= high");
        if low >= high {
            return low;
        }
        if (high - low).is_finite() {
            return self.gen_range(low..=high);
        }
        let u = self.gen::<f64>();
        (low * (1.0 - u) + high * u).clamp(low, high)
    }

    /// `count × dimension` matrix of independent uniform draws on `[0, 1)`.
    fn uniform_matrix(&mut self, count: usize, dimension: usize) -> DMatrix<f64> {
        DMatrix::from_fn(count, dimension, |_, _| self.gen::<f64>())
    }

    /// `count × dimension` matrix of independent standard-normal draws.
    fn standard_normal_matrix(&mut self, count: usize, dimension: usize) -> DMatrix<f64> {
        DMatrix::from_fn(count, dimension, |_, _| self.sample::<f64, _>(StandardNormal))
    }
}

impl<R: Rng + ?Sized> Draws for R {}
