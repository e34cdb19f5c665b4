// src/ensemble.rs
//! Path Ensembles
//!
//! Simulation results are fixed-shape records with named fields. Every state
//! series is an `Array2` of shape `(paths, steps + 1)` (one row per path)
//! aligned column-wise with the shared `time` vector; column 0 holds the
//! deterministic initial condition.
//!
//! Front ends consume ensembles through [`PathEnsemble::series`], which lists
//! each plottable series together with its title and axis label.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use statrs::statistics::Statistics;

/// One plottable state series: a line per path against `time`
#[derive(Debug, Clone)]
pub struct PlotSeries<'a> {
    pub name: &'static str,
    pub title: &'static str,
    pub y_label: &'static str,
    pub values: ArrayView2<'a, f64>,
}

/// Cross-sectional statistics of a series at the final time point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleSummary {
    pub mean: f64,
    /// Population standard deviation (zero for a single path)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl EnsembleSummary {
    pub fn from_values(values: ArrayView1<'_, f64>) -> Self {
        EnsembleSummary {
            mean: values.iter().mean(),
            std_dev: values.iter().population_std_dev(),
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
        }
    }
}

pub trait PathEnsemble {
    fn time(&self) -> ArrayView1<'_, f64>;

    fn series(&self) -> Vec<PlotSeries<'_>>;

    fn paths(&self) -> usize;

    fn steps(&self) -> usize {
        self.time().len() - 1
    }

    /// Terminal-value summary of each plotted series, in `series()` order
    fn summaries(&self) -> Vec<(&'static str, EnsembleSummary)> {
        self.series()
            .into_iter()
            .map(|s| {
                let last = s.values.len_of(Axis(1)) - 1;
                (s.name, EnsembleSummary::from_values(s.values.column(last)))
            })
            .collect()
    }
}

/// Raw and compensated Poisson counting paths
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonEnsemble {
    pub time: Array1<f64>,
    /// Counting process, non-decreasing from 0
    pub x: Array2<f64>,
    /// `x` minus its mean trend `λ·t`
    pub x_compensated: Array2<f64>,
}

impl PathEnsemble for PoissonEnsemble {
    fn time(&self) -> ArrayView1<'_, f64> {
        self.time.view()
    }

    fn series(&self) -> Vec<PlotSeries<'_>> {
        vec![
            PlotSeries {
                name: "X",
                title: "Poisson Process",
                y_label: "X(t)",
                values: self.x.view(),
            },
            PlotSeries {
                name: "Xcompensated",
                title: "Compensated Poisson Process",
                y_label: "X(t)",
                values: self.x_compensated.view(),
            },
        ]
    }

    fn paths(&self) -> usize {
        self.x.nrows()
    }
}

/// Log-price and price paths of the Merton jump-diffusion
#[derive(Debug, Clone, PartialEq)]
pub struct MertonEnsemble {
    pub time: Array1<f64>,
    /// Log-price, starting at `ln(S0)`
    pub x: Array2<f64>,
    /// Price `exp(x)`, starting at exactly `S0`
    pub s: Array2<f64>,
}

impl PathEnsemble for MertonEnsemble {
    fn time(&self) -> ArrayView1<'_, f64> {
        self.time.view()
    }

    fn series(&self) -> Vec<PlotSeries<'_>> {
        vec![
            PlotSeries {
                name: "X",
                title: "Log of Asset Price Paths under Merton Jump Diffusion Model",
                y_label: "X(t)",
                values: self.x.view(),
            },
            PlotSeries {
                name: "S",
                title: "Simulated Asset Price Paths under Merton Jump Diffusion Model",
                y_label: "S(t)",
                values: self.s.view(),
            },
        ]
    }

    fn paths(&self) -> usize {
        self.x.nrows()
    }
}
