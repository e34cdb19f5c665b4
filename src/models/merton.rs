// src/models/merton.rs
//! Merton Jump-Diffusion Model
//!
//! # Mathematical Framework
//!
//! Geometric Brownian motion with compound Poisson jumps in the log-price:
//! ```text
//! dS_t / S_t- = (r - λκ) dt + σ dW_t + (e^J - 1) dN_t
//! ```
//!
//! Where:
//! - N_t: Poisson process with intensity λ
//! - J ~ N(μj, σj²): log jump size
//! - κ = E[e^J] - 1 = exp(μj + σj²/2) - 1: jump compensator
//!
//! # Discretization
//!
//! Euler scheme on `X = ln S` over a uniform grid:
//! ```text
//! X_{i+1} = X_i + (r - λκ - σ²/2) dt + σ √dt Ẑ_i + J_i N_i
//! ```
//! with `N_i ~ Poisson(λ dt)`, `J_i ~ N(μj, σj²)` and `Ẑ_i` the standard normal
//! innovations after per-step moment matching across paths.
//!
//! # Moment Matching
//!
//! Each column of innovations is shifted and scaled to zero sample mean and
//! unit population standard deviation before use, so the realised Brownian
//! increments at every step have exactly their theoretical first two moments.
//! A single path has no cross-sectional spread; that case fails with
//! `DegenerateNormalization` unless the generator is built with
//! [`Normalization::Off`].

use super::model::PathGenerator;
use crate::controls;
use crate::ensemble::MertonEnsemble;
use crate::error::{validation::*, SimError, SimResult};
use crate::grid::TimeGrid;
use crate::math_utils::moment_match;
use crate::rng;
use ndarray::{Array2, Axis, Zip};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const THEORY: &str = "\
## Merton Jump Diffusion Model Theory

The Merton Jump Diffusion Model is an extension of the Black-Scholes model that incorporates \
sudden jumps in asset prices, in addition to the continuous price changes modeled by a \
geometric Brownian motion.

Key formula: dS_t = μ S_t dt + σ S_t dW_t + J S_t dN_t

Where:
- S_t is the asset price at time t
- μ is the drift rate
- σ is the volatility
- dW_t is a Wiener process (standard Brownian motion)
- J is the jump size
- dN_t is the Poisson process indicating the occurrence of jumps";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MertonParams {
    pub paths: usize,
    pub steps: usize,
    pub s0: f64,      // Initial price
    pub horizon: f64, // T
    pub lambda: f64,  // Jump intensity
    pub mu_j: f64,    // Mean of log-jump size
    pub sigma_j: f64, // Std dev of log-jump size
    pub r: f64,       // Risk-free rate
    pub sigma: f64,   // Diffusion volatility
}

impl Default for MertonParams {
    fn default() -> Self {
        MertonParams {
            paths: controls::PATHS.default_count(),
            steps: controls::STEPS.default_count(),
            s0: controls::merton::S0.default,
            horizon: controls::merton::HORIZON.default,
            lambda: controls::merton::LAMBDA.default,
            mu_j: controls::merton::MU_J.default,
            sigma_j: controls::merton::SIGMA_J.default,
            r: controls::merton::R.default,
            sigma: controls::merton::SIGMA.default,
        }
    }
}

impl MertonParams {
    /// Check every value against its control-panel slider range
    pub fn check_controls(&self) -> SimResult<()> {
        controls::PATHS.check("paths", self.paths as f64)?;
        controls::STEPS.check("steps", self.steps as f64)?;
        controls::merton::S0.check("s0", self.s0)?;
        controls::merton::HORIZON.check("horizon", self.horizon)?;
        controls::merton::LAMBDA.check("lambda", self.lambda)?;
        controls::merton::MU_J.check("mu_j", self.mu_j)?;
        controls::merton::SIGMA_J.check("sigma_j", self.sigma_j)?;
        controls::merton::R.check("r", self.r)?;
        controls::merton::SIGMA.check("sigma", self.sigma)
    }

    /// Move every field onto its control-panel range
    pub fn clamp_controls(&mut self) {
        use controls::merton::*;
        self.paths = controls::PATHS.clamp_count("paths", self.paths);
        self.steps = controls::STEPS.clamp_count("steps", self.steps);
        self.s0 = S0.clamp("s0", self.s0);
        self.horizon = HORIZON.clamp("horizon", self.horizon);
        self.lambda = LAMBDA.clamp("lambda", self.lambda);
        self.mu_j = MU_J.clamp("mu_j", self.mu_j);
        self.sigma_j = SIGMA_J.clamp("sigma_j", self.sigma_j);
        self.r = R.clamp("r", self.r);
        self.sigma = SIGMA.clamp("sigma", self.sigma);
    }
}

/// `E[e^J] - 1` for `J ~ N(mu_j, sigma_j²)`
pub fn jump_compensator(mu_j: f64, sigma_j: f64) -> f64 {
    (mu_j + 0.5 * sigma_j * sigma_j).exp_m1()
}

/// Treatment of the per-step diffusion innovations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Normalization {
    /// Cross-sectional moment matching; a single path is an error
    #[default]
    MomentMatch,
    /// Raw standard normal draws; required for single-path runs
    Off,
}

#[derive(Clone, Debug)]
pub struct MertonPathGenerator {
    pub params: MertonParams,
    pub normalization: Normalization,
}

impl MertonPathGenerator {
    pub fn new(params: MertonParams) -> SimResult<Self> {
        Self::new_with_normalization(params, Normalization::MomentMatch)
    }

    pub fn new_with_normalization(
        params: MertonParams,
        normalization: Normalization,
    ) -> SimResult<Self> {
        let generator = MertonPathGenerator {
            params,
            normalization,
        };
        generator.validate()?;
        if normalization == Normalization::Off {
            warn!("moment matching disabled: diffusion increments carry full sampling noise");
        }
        Ok(generator)
    }

    /// Per-step log-price drift `(r - λκ - σ²/2)`
    ///
    /// Without jumps the compensator term is dropped outright, so an overflowing
    /// κ cannot turn `0 * inf` into NaN.
    pub fn log_drift(&self) -> f64 {
        let p = &self.params;
        let jump_drift = if p.lambda == 0.0 {
            0.0
        } else {
            p.lambda * jump_compensator(p.mu_j, p.sigma_j)
        };
        p.r - jump_drift - 0.5 * p.sigma * p.sigma
    }
}

impl PathGenerator for MertonPathGenerator {
    type Ensemble = MertonEnsemble;

    fn validate(&self) -> SimResult<()> {
        let p = &self.params;
        validate_paths(p.paths)?;
        validate_steps(p.steps)?;
        validate_positive("s0", p.s0)?;
        validate_positive("horizon", p.horizon)?;
        validate_non_negative("lambda", p.lambda)?;
        validate_finite("mu_j", p.mu_j)?;
        validate_non_negative("sigma_j", p.sigma_j)?;
        validate_finite("r", p.r)?;
        validate_non_negative("sigma", p.sigma)
    }

    fn grid(&self) -> SimResult<TimeGrid> {
        TimeGrid::new(self.params.steps, self.params.horizon)
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<MertonEnsemble> {
        self.validate()?;
        let grid = self.grid()?;
        let p = self.params;
        let steps = grid.steps();
        let dt = grid.dt();
        let shape = (p.paths, steps);

        let drift = self.log_drift() * dt;
        let vol = p.sigma * dt.sqrt();
        debug!(
            paths = p.paths,
            steps,
            horizon = grid.horizon(),
            dt,
            compensator = jump_compensator(p.mu_j, p.sigma_j),
            normalization = ?self.normalization,
            "generating Merton ensemble"
        );

        let jump_counts = rng::poisson_matrix(rng, shape, p.lambda * dt)?;
        let mut innovations = rng::standard_normal_matrix(rng, shape);
        let jump_sizes = rng::normal_matrix(rng, shape, p.mu_j, p.sigma_j)?;

        let mut x = Array2::<f64>::zeros((p.paths, steps + 1));
        x.column_mut(0).fill(p.s0.ln());

        for i in 0..steps {
            if self.normalization == Normalization::MomentMatch {
                moment_match(innovations.column_mut(i), i)?;
            }

            let (done, mut rest) = x.view_mut().split_at(Axis(1), i + 1);
            Zip::from(rest.column_mut(0))
                .and(done.column(i))
                .and(innovations.column(i))
                .and(jump_sizes.column(i))
                .and(jump_counts.column(i))
                .for_each(|next, &prev, &z, &j, &n| *next = prev + drift + vol * z + j * n);
        }

        let mut s = x.clone();
        s.par_mapv_inplace(f64::exp);
        s.column_mut(0).fill(p.s0);

        if let Some(bad) = s.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
            return Err(SimError::NumericalInstability {
                reason: format!("price path reached {} (exp overflow or underflow)", bad),
            });
        }

        debug!(jumps = jump_counts.sum(), "Merton ensemble complete");
        Ok(MertonEnsemble {
            time: grid.times(),
            x,
            s,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small(paths: usize) -> MertonParams {
        MertonParams {
            paths,
            steps: 50,
            horizon: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_match_controls() {
        let p = MertonParams::default();
        assert_eq!(p.paths, 25);
        assert_eq!(p.steps, 500);
        assert_eq!(p.s0, 100.0);
        assert_eq!(p.horizon, 5.0);
        assert_eq!(p.sigma_j, 0.7);
        assert!(p.check_controls().is_ok());
    }

    #[test]
    fn test_jump_compensator() {
        assert_eq!(jump_compensator(0.0, 0.0), 0.0);
        assert_abs_diff_eq!(jump_compensator(0.0, 0.7), (0.245f64).exp() - 1.0, epsilon = 1e-15);
        assert!(jump_compensator(-0.5, 0.1) < 0.0);
    }

    #[test]
    fn test_log_drift() {
        let generator = MertonPathGenerator::new(MertonParams::default()).unwrap();
        let expected = 0.05 - 1.0 * ((0.245f64).exp() - 1.0) - 0.5 * 0.04;
        assert_abs_diff_eq!(generator.log_drift(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_intensity_ignores_overflowing_compensator() {
        let params = MertonParams {
            lambda: 0.0,
            sigma_j: 40.0,
            ..small(5)
        };
        assert!(jump_compensator(params.mu_j, params.sigma_j).is_infinite());

        let generator = MertonPathGenerator::new(params).unwrap();
        assert_abs_diff_eq!(generator.log_drift(), 0.05 - 0.5 * 0.04, epsilon = 1e-15);

        let ensemble = generator.generate(&mut rng::seed_rng_from_u64(2)).unwrap();
        assert!(ensemble.x.iter().all(|v| v.is_finite()));
        assert!(ensemble.s.iter().all(|v| v.is_finite() && *v > 0.0));
    }

    #[test]
    fn test_clamp_controls() {
        let mut p = MertonParams {
            paths: 200,
            s0: 10.0,
            mu_j: -0.8,
            sigma_j: 0.0,
            ..Default::default()
        };
        p.clamp_controls();
        assert_eq!(p.paths, 50);
        assert_eq!(p.s0, 50.0);
        assert_eq!(p.mu_j, -0.5);
        assert_eq!(p.sigma_j, 0.1);
        assert_eq!(p.sigma, 0.2);
        assert!(p.check_controls().is_ok());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let cases = [
            MertonParams { s0: 0.0, ..small(5) },
            MertonParams { horizon: -1.0, ..small(5) },
            MertonParams { lambda: -0.1, ..small(5) },
            MertonParams { sigma_j: -0.1, ..small(5) },
            MertonParams { sigma: -0.2, ..small(5) },
            MertonParams { r: f64::NAN, ..small(5) },
            MertonParams { mu_j: f64::INFINITY, ..small(5) },
            MertonParams { steps: 0, ..small(5) },
            small(0),
        ];
        for bad in cases {
            let err = MertonPathGenerator::new(bad).unwrap_err();
            assert!(matches!(err, SimError::InvalidParameter { .. }), "{:?}", bad);
        }
    }

    #[test]
    fn test_single_path_is_degenerate_by_default() {
        let generator = MertonPathGenerator::new(small(1)).unwrap();
        let err = generator.generate(&mut rng::seed_rng_from_u64(1)).unwrap_err();
        assert!(matches!(err, SimError::DegenerateNormalization { step: 0, .. }));
    }

    #[test]
    fn test_single_path_with_normalization_off() {
        let generator =
            MertonPathGenerator::new_with_normalization(small(1), Normalization::Off).unwrap();
        let ensemble = generator.generate(&mut rng::seed_rng_from_u64(1)).unwrap();
        assert_eq!(ensemble.s.dim(), (1, 51));
        assert!(ensemble.x.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_price_is_exp_of_log_price() {
        let generator = MertonPathGenerator::new(small(10)).unwrap();
        let ensemble = generator.generate(&mut rng::seed_rng_from_u64(3)).unwrap();

        assert!(ensemble.x.column(0).iter().all(|&v| v == 100f64.ln()));
        assert!(ensemble.s.column(0).iter().all(|&v| v == 100.0));
        for (x, s) in ensemble.x.iter().zip(ensemble.s.iter()).skip(1) {
            assert_abs_diff_eq!(*s, x.exp(), epsilon = 1e-9 * s.abs());
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let params = MertonParams {
            r: 1e6,
            ..small(5)
        };
        let generator = MertonPathGenerator::new(params).unwrap();
        let err = generator.generate(&mut rng::seed_rng_from_u64(3)).unwrap_err();
        assert!(matches!(err, SimError::NumericalInstability { .. }));
    }
}
