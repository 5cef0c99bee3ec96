//! Normal distribution model
//!
//! Fits a normal distribution to the observations (population mean and
//! standard deviation) and compares the share of observations inside a range
//! with the probability the fitted distribution assigns to it.

use serde::Serialize;

use crate::error::DistributionError;

/// Observed and theoretical share of observations within `[min, max]`.
///
/// # Examples
///
/// ```
/// use tabstat_stats::normal::NormalDistribution;
///
/// let model = NormalDistribution::new(&[400.0, 500.0], 400.0, 500.0).unwrap();
/// assert_eq!(model.mean, 450.0);
/// assert_eq!(model.standard_deviation, 50.0);
/// assert_eq!(model.percentage_in_range, 100.0);
/// assert!((model.probability_in_range - 68.27).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalDistribution {
    pub mean: f64,
    pub standard_deviation: f64,
    /// Observed percentage (0 to 100) of values within the range.
    pub percentage_in_range: f64,
    pub total_count: usize,
    pub count_in_range: usize,
    pub z_score_min: f64,
    pub z_score_max: f64,
    /// Theoretical percentage (0 to 100) of the fitted distribution within
    /// the range.
    pub probability_in_range: f64,
    pub min_range: f64,
    pub max_range: f64,
}

impl NormalDistribution {
    /// Fits the model and evaluates the inclusive range `[min_range, max_range]`.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::EmptyData`] if `values` is empty and
    /// [`DistributionError::ZeroStandardDeviation`] if all values are equal.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(values: &[f64], min_range: f64, max_range: f64) -> Result<Self, DistributionError> {
        if values.is_empty() {
            return Err(DistributionError::EmptyData);
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let standard_deviation = variance.sqrt();
        if standard_deviation == 0.0 {
            return Err(DistributionError::ZeroStandardDeviation);
        }

        let count_in_range = values
            .iter()
            .filter(|&&v| v >= min_range && v <= max_range)
            .count();
        let percentage_in_range = count_in_range as f64 / n * 100.0;

        let z_score_min = (min_range - mean) / standard_deviation;
        let z_score_max = (max_range - mean) / standard_deviation;
        let probability_in_range = probability_between(z_score_min, z_score_max);
        tracing::debug!(
            mean,
            standard_deviation,
            count_in_range,
            probability_in_range,
            "computed normal model"
        );

        Ok(Self {
            mean,
            standard_deviation,
            percentage_in_range,
            total_count: values.len(),
            count_in_range,
            z_score_min,
            z_score_max,
            probability_in_range,
            min_range,
            max_range,
        })
    }

    /// Absolute difference between observed and theoretical percentages.
    #[must_use]
    pub fn difference(&self) -> f64 {
        (self.percentage_in_range - self.probability_in_range).abs()
    }
}

/// Percentage (0 to 100) of the standard normal distribution between two
/// z-scores, in either order.
#[must_use]
pub fn probability_between(z1: f64, z2: f64) -> f64 {
    (standard_normal_cdf(z2) - standard_normal_cdf(z1)).abs() * 100.0
}

/// Standard normal CDF `Φ(z) = (1 + erf(z / √2)) / 2`.
///
/// `erf` is approximated with Abramowitz and Stegun formula 7.1.26
/// (absolute error below 1.5e-7).
///
/// # Examples
///
/// ```
/// use tabstat_stats::normal::standard_normal_cdf;
///
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
#[must_use]
pub fn standard_normal_cdf(z: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = z.signum();
    let x = z.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * x);
    let erf = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    0.5 * (1.0 + sign * erf)
}
