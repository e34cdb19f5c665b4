//! # jump-paths: Poisson and Merton Jump-Diffusion Path Simulation
//!
//! Generates ensembles of discretized sample paths for two stochastic
//! processes, ready to be plotted one line per path:
//!
//! - **Poisson counting process** and its compensated (zero-mean) version
//! - **Merton jump-diffusion**: log-price and price paths combining geometric
//!   Brownian motion with compound Poisson jumps
//!
//! Both generators are pure functions of a parameter record and an explicit
//! random source; a seeded source gives a reproducible ensemble.
//!
//! ## Quick Start
//!
//! ```rust
//! use jump_paths::models::merton::MertonParams;
//! use jump_paths::{rng, simulate_merton};
//!
//! let params = MertonParams {
//!     paths: 25,
//!     steps: 500,
//!     s0: 100.0,
//!     horizon: 5.0,
//!     ..Default::default()
//! };
//!
//! let mut rng = rng::seed_rng_from_u64(42);
//! let paths = simulate_merton(&params, &mut rng).expect("Valid parameters");
//! assert_eq!(paths.s.dim(), (25, 501));
//! assert!(paths.s.column(0).iter().all(|&s| s == 100.0));
//! ```

pub mod config;
pub mod controls;
pub mod ensemble;
pub mod error;
pub mod grid;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod rng;

pub use ensemble::{EnsembleSummary, MertonEnsemble, PathEnsemble, PlotSeries, PoissonEnsemble};
pub use error::{SimError, SimResult};
pub use models::merton::{MertonParams, MertonPathGenerator, Normalization};
pub use models::model::PathGenerator;
pub use models::poisson::{PoissonParams, PoissonPathGenerator};

use rand::Rng;

/// Raw and compensated Poisson paths (`time`, `x`, `x_compensated`)
pub fn simulate_poisson<R: Rng + ?Sized>(
    params: &PoissonParams,
    rng: &mut R,
) -> SimResult<PoissonEnsemble> {
    PoissonPathGenerator::new(*params)?.generate(rng)
}

/// Log-price and price paths (`time`, `x`, `s`) with per-step moment matching.
///
/// Fails with [`SimError::DegenerateNormalization`] for a single path; use
/// [`MertonPathGenerator::new_with_normalization`] with [`Normalization::Off`]
/// for single-path runs.
pub fn simulate_merton<R: Rng + ?Sized>(
    params: &MertonParams,
    rng: &mut R,
) -> SimResult<MertonEnsemble> {
    MertonPathGenerator::new(*params)?.generate(rng)
}
