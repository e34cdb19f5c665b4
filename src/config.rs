// src/config.rs
//! Parameter Loading
//!
//! Parameters are layered: control-panel defaults, then an optional JSON file
//! naming any subset of fields, then individual overrides (command-line flags).

use crate::error::SimResult;
use crate::models::merton::MertonParams;
use crate::models::poisson::PoissonParams;
use clap::Args;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Parse a (possibly partial) JSON parameter record; missing fields take defaults
pub fn params_from_json<T: DeserializeOwned>(text: &str) -> SimResult<T> {
    Ok(serde_json::from_str(text)?)
}

/// Read parameters from `path`, or fall back to defaults when no file is given
pub fn load_params<T: DeserializeOwned + Default>(path: Option<&Path>) -> SimResult<T> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading parameters");
            let text = std::fs::read_to_string(path)?;
            params_from_json(&text)
        }
        None => Ok(T::default()),
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PoissonOverrides {
    #[arg(long)]
    pub paths: Option<usize>,
    #[arg(long)]
    pub steps: Option<usize>,
    /// Total time T
    #[arg(long)]
    pub horizon: Option<f64>,
    /// Event intensity λ
    #[arg(long)]
    pub lambda: Option<f64>,
}

impl PoissonOverrides {
    pub fn apply(&self, params: &mut PoissonParams) {
        override_with(&mut params.paths, self.paths);
        override_with(&mut params.steps, self.steps);
        override_with(&mut params.horizon, self.horizon);
        override_with(&mut params.lambda, self.lambda);
    }
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub struct MertonOverrides {
    #[arg(long)]
    pub paths: Option<usize>,
    #[arg(long)]
    pub steps: Option<usize>,
    /// Initial asset price
    #[arg(long)]
    pub s0: Option<f64>,
    /// Total time T
    #[arg(long)]
    pub horizon: Option<f64>,
    /// Jump intensity λ
    #[arg(long)]
    pub lambda: Option<f64>,
    /// Mean of log-jump size
    #[arg(long, allow_hyphen_values = true)]
    pub mu_j: Option<f64>,
    /// Std dev of log-jump size
    #[arg(long)]
    pub sigma_j: Option<f64>,
    /// Risk-free rate
    #[arg(long, allow_hyphen_values = true)]
    pub r: Option<f64>,
    /// Diffusion volatility
    #[arg(long)]
    pub sigma: Option<f64>,
}

impl MertonOverrides {
    pub fn apply(&self, params: &mut MertonParams) {
        override_with(&mut params.paths, self.paths);
        override_with(&mut params.steps, self.steps);
        override_with(&mut params.s0, self.s0);
        override_with(&mut params.horizon, self.horizon);
        override_with(&mut params.lambda, self.lambda);
        override_with(&mut params.mu_j, self.mu_j);
        override_with(&mut params.sigma_j, self.sigma_j);
        override_with(&mut params.r, self.r);
        override_with(&mut params.sigma, self.sigma);
    }
}
