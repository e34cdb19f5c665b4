// src/grid.rs
//! Uniform simulation time grid `0 = t_0 < t_1 < … < t_N = T` with `dt = T / N`.

use crate::error::{validation::*, SimResult};
use ndarray::Array1;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    steps: usize,
    horizon: f64,
    dt: f64,
}

impl TimeGrid {
    pub fn new(steps: usize, horizon: f64) -> SimResult<Self> {
        validate_steps(steps)?;
        validate_positive("horizon", horizon)?;
        Ok(TimeGrid {
            steps,
            horizon,
            dt: horizon / steps as f64,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// `steps + 1` time points. The last point is pinned to the horizon so
    /// accumulated rounding never pushes it past `T`.
    pub fn times(&self) -> Array1<f64> {
        let mut times = Array1::from_shape_fn(self.steps + 1, |i| i as f64 * self.dt);
        times[self.steps] = self.horizon;
        times
    }
}
