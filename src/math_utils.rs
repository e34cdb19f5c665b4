// src/math_utils.rs
use crate::error::{SimError, SimResult};
use ndarray::ArrayViewMut1;
use statrs::statistics::Statistics;

/// Cross-sectional moment matching: rescale `column` in place to zero
/// empirical mean and unit population (ddof = 0) standard deviation.
///
/// A column with zero spread (always the case for a single path) has no
/// defined rescaling and yields `DegenerateNormalization` for `step`.
pub fn moment_match(mut column: ArrayViewMut1<'_, f64>, step: usize) -> SimResult<()> {
    let mean = column.iter().mean();
    let std_dev = column.iter().population_std_dev();

    if !(std_dev > 0.0 && std_dev.is_finite()) {
        return Err(SimError::DegenerateNormalization { step, std_dev });
    }

    column.mapv_inplace(|z| (z - mean) / std_dev);
    Ok(())
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_moment_match_standardizes() {
        let mut column = array![1.0, 2.0, 3.0, 10.0];
        moment_match(column.view_mut(), 0).unwrap();

        let n = column.len() as f64;
        let mean = column.sum() / n;
        let var = column.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n;
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(var, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_points_map_to_plus_minus_one() {
        let mut column = array![-3.0, 5.0];
        moment_match(column.view_mut(), 0).unwrap();
        assert_abs_diff_eq!(column[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(column[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_value_is_degenerate() {
        let mut column = array![0.7];
        let err = moment_match(column.view_mut(), 4).unwrap_err();
        assert!(matches!(err, SimError::DegenerateNormalization { step: 4, .. }));
        assert_eq!(column[0], 0.7, "column must be left untouched on failure");
    }

    #[test]
    fn test_constant_column_is_degenerate() {
        let mut column = array![1.5, 1.5, 1.5];
        assert!(moment_match(column.view_mut(), 0).is_err());
    }
}
