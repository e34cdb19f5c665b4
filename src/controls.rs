// src/controls.rs
//! Parameter Controls for Interactive Front Ends
//!
//! Each model parameter is exposed to users as a slider with a closed range and
//! a default. The generators themselves accept any value in the mathematical
//! domain; these ranges only describe what a control panel offers, and the
//! parameter records are defaulted from them.

use crate::error::{validation::validate_range, SimResult};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ControlRange {
    pub const fn new(label: &'static str, min: f64, max: f64, default: f64) -> Self {
        ControlRange {
            label,
            min,
            max,
            default,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Pull `value` onto the slider, logging when it moves
    pub fn clamp(&self, parameter: &str, value: f64) -> f64 {
        if self.contains(value) {
            return value;
        }
        let clamped = value.clamp(self.min, self.max);
        warn!(parameter, value, clamped, "value outside control range");
        clamped
    }

    pub fn clamp_count(&self, parameter: &str, value: usize) -> usize {
        self.clamp(parameter, value as f64) as usize
    }

    /// `InvalidParameter` naming `parameter` when `value` is off the slider
    pub fn check(&self, parameter: &str, value: f64) -> SimResult<()> {
        validate_range(parameter, value, self.min, self.max)
    }

    /// Default for integer-valued controls (path and step counts)
    pub fn default_count(&self) -> usize {
        self.default as usize
    }
}

pub const PATHS: ControlRange = ControlRange::new("Number of paths", 1.0, 50.0, 25.0);
pub const STEPS: ControlRange = ControlRange::new("Number of steps", 100.0, 1000.0, 500.0);

pub mod poisson {
    use super::ControlRange;

    pub const HORIZON: ControlRange = ControlRange::new("Total time", 10.0, 100.0, 30.0);
    pub const LAMBDA: ControlRange = ControlRange::new("Rate parameter (λ)", 0.1, 5.0, 1.0);
}

pub mod merton {
    use super::ControlRange;

    pub const S0: ControlRange = ControlRange::new("Initial asset price (S0)", 50.0, 150.0, 100.0);
    pub const HORIZON: ControlRange = ControlRange::new("Total time", 1.0, 10.0, 5.0);
    pub const LAMBDA: ControlRange = ControlRange::new("Jump intensity (λ)", 0.1, 2.0, 1.0);
    pub const MU_J: ControlRange = ControlRange::new("Mean of jump size (μj)", -0.5, 0.5, 0.0);
    pub const SIGMA_J: ControlRange = ControlRange::new("Std dev of jump size (σj)", 0.1, 1.0, 0.7);
    pub const R: ControlRange = ControlRange::new("Risk-free rate (r)", 0.01, 0.1, 0.05);
    pub const SIGMA: ControlRange = ControlRange::new("Volatility (σ)", 0.1, 0.5, 0.2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lie_inside_ranges() {
        let all = [
            PATHS,
            STEPS,
            poisson::HORIZON,
            poisson::LAMBDA,
            merton::S0,
            merton::HORIZON,
            merton::LAMBDA,
            merton::MU_J,
            merton::SIGMA_J,
            merton::R,
            merton::SIGMA,
        ];
        for control in all {
            assert!(control.contains(control.default), "{} default out of range", control.label);
        }
    }

    #[test]
    fn test_count_defaults() {
        assert_eq!(PATHS.default_count(), 25);
        assert_eq!(STEPS.default_count(), 500);
    }

    #[test]
    fn test_check_and_clamp() {
        assert!(merton::SIGMA.check("sigma", 0.3).is_ok());
        assert!(merton::SIGMA.check("sigma", 0.6).is_err());
        assert_eq!(merton::SIGMA.clamp("sigma", 0.6), 0.5);
        assert_eq!(merton::SIGMA.clamp("sigma", 0.3), 0.3);
        assert_eq!(poisson::LAMBDA.clamp("lambda", 0.0), 0.1);
        assert_eq!(PATHS.clamp_count("paths", 0), 1);
        assert_eq!(STEPS.clamp_count("steps", 5_000), 1000);
        assert_eq!(STEPS.clamp_count("steps", 250), 250);
    }
}
