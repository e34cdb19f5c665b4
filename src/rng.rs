// src/rng.rs
//! Random Draw Matrices for Path Simulation
//!
//! # Design
//!
//! Generators never touch a process-wide random source. Every call receives an
//! explicit `&mut R where R: Rng + ?Sized`, so:
//! 1. **Reproducibility**: same seed → same ensemble
//! 2. **Isolation**: tests inject determinism without global state
//! 3. **Flexibility**: front ends choose seeded or entropy-backed sources
//!
//! # Layout
//!
//! All draw matrices have shape `(paths, steps)`: one row per path, one column
//! per time step. They are filled in row-major order, so the n-th draw of the
//! source lands at `(n / steps, n % steps)`.

use crate::error::{SimError, SimResult};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Poisson, StandardNormal};

/// Deterministic source for reproducible runs
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Operating-system seeded source for interactive runs
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Poisson counts with the given mean.
///
/// `rand_distr::Poisson` rejects a zero mean, but a zero-intensity counting
/// process is valid: it simply never jumps, so the matrix is all zeros and no
/// randomness is consumed.
pub fn poisson_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    shape: (usize, usize),
    mean: f64,
) -> SimResult<Array2<f64>> {
    if mean == 0.0 {
        return Ok(Array2::zeros(shape));
    }
    let dist = Poisson::new(mean).map_err(|e| SimError::Distribution {
        reason: format!("Poisson(mean = {}): {}", mean, e),
    })?;
    Ok(Array2::from_shape_fn(shape, |_| dist.sample(&mut *rng)))
}

/// Standard normal innovations
pub fn standard_normal_matrix<R: Rng + ?Sized>(rng: &mut R, shape: (usize, usize)) -> Array2<f64> {
    Array2::from_shape_fn(shape, |_| get_normal_draw(&mut *rng))
}

/// Normal draws with the given mean and standard deviation (which may be zero)
pub fn normal_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    shape: (usize, usize),
    mean: f64,
    std_dev: f64,
) -> SimResult<Array2<f64>> {
    let dist = Normal::new(mean, std_dev).map_err(|e| SimError::Distribution {
        reason: format!("Normal(mean = {}, std = {}): {}", mean, std_dev, e),
    })?;
    Ok(Array2::from_shape_fn(shape, |_| dist.sample(&mut *rng)))
}
