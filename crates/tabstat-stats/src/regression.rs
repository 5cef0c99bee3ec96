//! Simple linear regression line `y = a·x + b`

use serde::{Deserialize, Serialize};
use tabstat_table::CellValue;

use crate::{
    error::ValidationError,
    pair::{PairSums, validate_pair},
};

/// How the intercept `b` is derived from the slope and the column sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterceptFormula {
    /// `b = (ΣA − a·ΣB) / N`, the formula historically used by the dataset
    /// reports. It only matches the least-squares intercept for special
    /// inputs.
    #[default]
    Observed,
    /// `b = (ΣB − a·ΣA) / N`, the ordinary least-squares intercept.
    LeastSquares,
}

/// Slope and intercept of a regression line, first column as `x`.
///
/// # Examples
///
/// ```
/// use tabstat_stats::regression::{InterceptFormula, RegressionLine};
/// use tabstat_table::CellValue;
///
/// let x = [1, 2, 3, 4].map(CellValue::from);
/// let y = [3, 5, 7, 9].map(CellValue::from);
///
/// let line = RegressionLine::with_formula(&x, &y, InterceptFormula::LeastSquares).unwrap();
/// assert_eq!(line.a, 2.0);
/// assert_eq!(line.b, 1.0);
/// assert_eq!(line.equation, "y = 2.00x + 1.00");
/// assert_eq!(line.predict(10.0), 21.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionLine {
    /// Slope, rounded to 4 decimals.
    pub a: f64,
    /// Intercept, rounded to 4 decimals.
    pub b: f64,
    pub equation: String,
}

impl RegressionLine {
    /// Fits a line using [`InterceptFormula::Observed`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either column is empty, the lengths
    /// differ, or an element is not numeric.
    pub fn new(first: &[CellValue], second: &[CellValue]) -> Result<Self, ValidationError> {
        Self::with_formula(first, second, InterceptFormula::default())
    }

    /// Fits a line with the given intercept formula.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_formula(
        first: &[CellValue],
        second: &[CellValue],
        formula: InterceptFormula,
    ) -> Result<Self, ValidationError> {
        let (first, second) = validate_pair(first, second)?;
        Ok(Self::from_numbers(&first, &second, formula))
    }

    /// Fits a line to two equally long, non-empty slices of numbers.
    ///
    /// A vanishing slope denominator (every `x` equal, up to rounding) gives
    /// slope 0.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length or are empty.
    #[must_use]
    pub fn from_numbers(first: &[f64], second: &[f64], formula: InterceptFormula) -> Self {
        assert!(!first.is_empty(), "columns must not be empty");
        assert_eq!(first.len(), second.len(), "columns must have the same length");

        let sums = PairSums::new(first, second);
        let a = if sums.a_is_degenerate() {
            0.0
        } else {
            sums.cross_deviation() / sums.spread_a()
        };
        let b = match formula {
            InterceptFormula::Observed => (sums.sum_a - a * sums.sum_b) / sums.n,
            InterceptFormula::LeastSquares => (sums.sum_b - a * sums.sum_a) / sums.n,
        };
        tracing::debug!(a, b, ?formula, "fitted regression line");

        Self {
            a: round_to(a, 4),
            b: round_to(b, 4),
            equation: format!("y = {a:.2}x + {b:.2}"),
        }
    }

    /// Evaluates the line at `x` using the rounded coefficients.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.a * x + self.b
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
