// src/models/poisson.rs
//! Poisson Counting Process
//!
//! # Mathematical Framework
//!
//! A Poisson process with intensity λ counts events whose increments over
//! disjoint intervals are independent and Poisson distributed:
//! ```text
//! P(N(t) = k) = (λt)^k e^(-λt) / k!
//! ```
//!
//! On a uniform grid with step `dt` the increments are `Z_i ~ Poisson(λ·dt)`:
//! ```text
//! X_{i+1}  = X_i + Z_i                  (counting process)
//! Xc_{i+1} = Xc_i - λ·dt + Z_i          (compensated, zero-mean martingale)
//! ```
//! with `X_0 = Xc_0 = 0`.

use super::model::PathGenerator;
use crate::controls;
use crate::ensemble::PoissonEnsemble;
use crate::error::{validation::*, SimResult};
use crate::grid::TimeGrid;
use crate::rng;
use ndarray::{Array2, Axis, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const THEORY: &str = "\
## Poisson Process Theory

This simulates a Poisson process, which models the occurrence of random events over time.

Key formula: P(N(t) = k) = (λt)^k * e^(-λt) / k!

Where:
- N(t) is the number of events up to time t
- λ is the average rate of events
- k is the number of events
- e is Euler's number";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoissonParams {
    pub paths: usize,
    pub steps: usize,
    pub horizon: f64, // T
    pub lambda: f64,  // Event intensity
}

impl Default for PoissonParams {
    fn default() -> Self {
        PoissonParams {
            paths: controls::PATHS.default_count(),
            steps: controls::STEPS.default_count(),
            horizon: controls::poisson::HORIZON.default,
            lambda: controls::poisson::LAMBDA.default,
        }
    }
}

impl PoissonParams {
    /// Check every value against its control-panel slider range
    pub fn check_controls(&self) -> SimResult<()> {
        controls::PATHS.check("paths", self.paths as f64)?;
        controls::STEPS.check("steps", self.steps as f64)?;
        controls::poisson::HORIZON.check("horizon", self.horizon)?;
        controls::poisson::LAMBDA.check("lambda", self.lambda)
    }

    /// Move every field onto its control-panel range
    pub fn clamp_controls(&mut self) {
        self.paths = controls::PATHS.clamp_count("paths", self.paths);
        self.steps = controls::STEPS.clamp_count("steps", self.steps);
        self.horizon = controls::poisson::HORIZON.clamp("horizon", self.horizon);
        self.lambda = controls::poisson::LAMBDA.clamp("lambda", self.lambda);
    }
}

#[derive(Clone, Debug)]
pub struct PoissonPathGenerator {
    pub params: PoissonParams,
}

impl PoissonPathGenerator {
    pub fn new(params: PoissonParams) -> SimResult<Self> {
        let generator = PoissonPathGenerator { params };
        generator.validate()?;
        Ok(generator)
    }
}

impl PathGenerator for PoissonPathGenerator {
    type Ensemble = PoissonEnsemble;

    fn validate(&self) -> SimResult<()> {
        validate_paths(self.params.paths)?;
        validate_steps(self.params.steps)?;
        validate_positive("horizon", self.params.horizon)?;
        validate_non_negative("lambda", self.params.lambda)
    }

    fn grid(&self) -> SimResult<TimeGrid> {
        TimeGrid::new(self.params.steps, self.params.horizon)
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<PoissonEnsemble> {
        self.validate()?;
        let grid = self.grid()?;
        let PoissonParams { paths, lambda, .. } = self.params;
        let steps = grid.steps();
        let dt = grid.dt();
        let trend = lambda * dt;
        debug!(paths, steps, horizon = grid.horizon(), dt, lambda, "generating Poisson ensemble");

        let increments = rng::poisson_matrix(rng, (paths, steps), trend)?;

        let mut x = Array2::<f64>::zeros((paths, steps + 1));
        let mut x_compensated = Array2::<f64>::zeros((paths, steps + 1));

        for i in 0..steps {
            let z = increments.column(i);

            let (done, mut rest) = x.view_mut().split_at(Axis(1), i + 1);
            Zip::from(rest.column_mut(0))
                .and(done.column(i))
                .and(&z)
                .for_each(|next, &prev, &dz| *next = prev + dz);

            let (done, mut rest) = x_compensated.view_mut().split_at(Axis(1), i + 1);
            Zip::from(rest.column_mut(0))
                .and(done.column(i))
                .and(&z)
                .for_each(|next, &prev, &dz| *next = prev - trend + dz);
        }

        debug!(events = increments.sum(), "Poisson ensemble complete");
        Ok(PoissonEnsemble {
            time: grid.times(),
            x,
            x_compensated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use approx::assert_abs_diff_eq;

    fn params(paths: usize, steps: usize, horizon: f64, lambda: f64) -> PoissonParams {
        PoissonParams {
            paths,
            steps,
            horizon,
            lambda,
        }
    }

    #[test]
    fn test_defaults_match_controls() {
        let p = PoissonParams::default();
        assert_eq!(p, params(25, 500, 30.0, 1.0));
        assert!(p.check_controls().is_ok());
    }

    #[test]
    fn test_clamp_controls() {
        let mut p = params(80, 20, 30.0, 7.0);
        p.clamp_controls();
        assert_eq!(p, params(50, 100, 30.0, 5.0));
        assert!(p.check_controls().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let p: PoissonParams = serde_json::from_str(r#"{"lambda": 2.5, "paths": 3}"#).unwrap();
        assert_eq!(p, params(3, 500, 30.0, 2.5));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        for bad in [
            params(0, 10, 1.0, 1.0),
            params(1, 0, 1.0, 1.0),
            params(1, 10, 0.0, 1.0),
            params(1, 10, 1.0, -0.5),
            params(1, 10, f64::NAN, 1.0),
        ] {
            let err = PoissonPathGenerator::new(bad).unwrap_err();
            assert!(matches!(err, SimError::InvalidParameter { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_counting_path_properties() {
        let generator = PoissonPathGenerator::new(params(4, 200, 10.0, 2.0)).unwrap();
        let ensemble = generator.generate(&mut rng::seed_rng_from_u64(5)).unwrap();
        let dt = 10.0 / 200.0;

        for (row, row_c) in ensemble.x.outer_iter().zip(ensemble.x_compensated.outer_iter()) {
            assert_eq!(row[0], 0.0);
            assert!(row.windows(2).into_iter().all(|w| w[1] >= w[0]));
            for (i, (&xi, &xci)) in row.iter().zip(row_c.iter()).enumerate() {
                assert_eq!(xi.fract(), 0.0);
                assert_abs_diff_eq!(xci, xi - 2.0 * dt * i as f64, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_intensity_never_jumps() {
        let generator = PoissonPathGenerator::new(params(3, 50, 5.0, 0.0)).unwrap();
        let ensemble = generator.generate(&mut rng::seed_rng_from_u64(9)).unwrap();
        assert!(ensemble.x.iter().all(|&v| v == 0.0));
        assert!(ensemble.x_compensated.iter().all(|&v| v == 0.0));
    }
}
