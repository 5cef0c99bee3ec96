//! Measures of dispersion
//!
//! Unlike [`quantiles`](crate::quantiles), the quartiles here are
//! interpolated: for probability `p` the rank is `(N - 1) * p` and the value
//! is interpolated linearly between the neighbouring elements.

use serde::Serialize;

/// Dispersion measures of a numeric column, grouped in blocks.
///
/// Every block carries the number of observations it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionSummary {
    pub stats: CountBlock,
    pub range: RangeBlock,
    pub quartiles: QuartileBlock,
    pub mean: MeanBlock,
    pub variance: VarianceBlock,
    pub standard_deviation: StandardDeviationBlock,
    pub coefficient_of_variation: CoefficientOfVariationBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountBlock {
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeBlock {
    pub min_value: f64,
    pub max_value: f64,
    pub value: f64,
    pub count_number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuartileBlock {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub count_number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeanBlock {
    pub mean: f64,
    pub count_number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceBlock {
    pub variance: f64,
    pub count_number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardDeviationBlock {
    pub standard_deviation: f64,
    pub count_number: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientOfVariationBlock {
    /// `None` when the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    pub count_number: usize,
}

impl DispersionSummary {
    /// Computes dispersion measures from unsorted values.
    ///
    /// Returns `None` if `values` is empty or contains NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_stats::dispersion::DispersionSummary;
    ///
    /// let summary = DispersionSummary::new(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(summary.range.value, 7.0);
    /// assert_eq!(summary.mean.mean, 5.0);
    /// assert_eq!(summary.variance.variance, 4.0);
    /// assert_eq!(summary.standard_deviation.standard_deviation, 2.0);
    /// assert_eq!(summary.coefficient_of_variation.coefficient_of_variation, Some(0.4));
    /// ```
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.iter().any(|value| value.is_nan()) {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes dispersion measures from values sorted in ascending order.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let standard_deviation = variance.sqrt();
        let coefficient_of_variation = (mean != 0.0).then(|| standard_deviation / mean.abs());

        let q1 = interpolated_percentile(sorted_values, 0.25);
        let q3 = interpolated_percentile(sorted_values, 0.75);

        Some(Self {
            stats: CountBlock { count },
            range: RangeBlock {
                min_value: min,
                max_value: max,
                value: max - min,
                count_number: count,
            },
            quartiles: QuartileBlock {
                q1,
                q3,
                iqr: q3 - q1,
                count_number: count,
            },
            mean: MeanBlock {
                mean,
                count_number: count,
            },
            variance: VarianceBlock {
                variance,
                count_number: count,
            },
            standard_deviation: StandardDeviationBlock {
                standard_deviation,
                count_number: count,
            },
            coefficient_of_variation: CoefficientOfVariationBlock {
                coefficient_of_variation,
                count_number: count,
            },
        })
    }
}

/// Linearly interpolated percentile at probability `p` (0.0 to 1.0).
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use tabstat_stats::dispersion::interpolated_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(interpolated_percentile(&values, 0.25), 1.75);
/// assert_eq!(interpolated_percentile(&values, 0.5), 2.5);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn interpolated_percentile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = (sorted_values.len() - 1) as f64 * p;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - rank.floor();
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(DispersionSummary::new(&[]).is_none());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(DispersionSummary::new(&[3.0, f64::NAN, 1.0]).is_none());
    }

    #[test]
    fn test_single_value() {
        let summary = DispersionSummary::new(&[3.0]).unwrap();
        assert_eq!(summary.range.value, 0.0);
        assert_eq!(summary.quartiles.q1, 3.0);
        assert_eq!(summary.quartiles.iqr, 0.0);
        assert_eq!(summary.variance.variance, 0.0);
        assert_eq!(summary.stats.count, 1);
    }

    #[test]
    fn test_interpolated_quartiles() {
        let summary = DispersionSummary::new(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
        assert_eq!(summary.quartiles.q1, 2.0);
        assert_eq!(summary.quartiles.q3, 4.0);
        assert_eq!(summary.quartiles.iqr, 2.0);
        assert_eq!(summary.range.min_value, 1.0);
        assert_eq!(summary.range.max_value, 5.0);
    }

    #[test]
    fn test_population_variance() {
        let summary = DispersionSummary::new(&[1.0, 3.0]).unwrap();
        // Divides by N, not N - 1.
        assert_eq!(summary.variance.variance, 1.0);
        assert_eq!(summary.standard_deviation.standard_deviation, 1.0);
    }

    #[test]
    fn test_zero_mean_has_no_coefficient_of_variation() {
        let summary = DispersionSummary::new(&[-1.0, 1.0]).unwrap();
        assert_eq!(summary.mean.mean, 0.0);
        assert_eq!(summary.coefficient_of_variation.coefficient_of_variation, None);
    }

    #[test]
    fn test_negative_mean_uses_absolute_value() {
        let summary = DispersionSummary::new(&[-2.0, -4.0]).unwrap();
        assert_eq!(
            summary.coefficient_of_variation.coefficient_of_variation,
            Some(1.0 / 3.0)
        );
    }

    #[test]
    fn test_serialization() {
        let summary = DispersionSummary::new(&[0.0, 0.0]).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["stats"]["count"], 2);
        assert_eq!(json["range"]["countNumber"], 2);
        assert_eq!(json["standardDeviation"]["standardDeviation"], 0.0);
        assert!(json["coefficientOfVariation"]["coefficientOfVariation"].is_null());
    }
}
