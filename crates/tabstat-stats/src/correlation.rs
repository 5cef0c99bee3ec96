//! Pearson correlation between two columns

use serde::Serialize;
use tabstat_table::CellValue;

use crate::{
    error::ValidationError,
    pair::{PairSums, validate_pair},
};

/// Qualitative strength of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum CorrelationStrength {
    #[display("WEAK")]
    Weak,
    #[display("MEDIUM")]
    Medium,
    #[display("STRONG")]
    Strong,
}

impl CorrelationStrength {
    /// Classifies `|r|`: below 0.25 is weak, up to and including 0.75 is
    /// medium, anything above is strong.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_stats::correlation::CorrelationStrength;
    ///
    /// assert_eq!(CorrelationStrength::classify(-0.1), CorrelationStrength::Weak);
    /// assert_eq!(CorrelationStrength::classify(0.75), CorrelationStrength::Medium);
    /// assert_eq!(CorrelationStrength::classify(-0.9), CorrelationStrength::Strong);
    /// ```
    #[must_use]
    pub fn classify(coefficient: f64) -> Self {
        let magnitude = coefficient.abs();
        if magnitude < 0.25 {
            Self::Weak
        } else if magnitude <= 0.75 {
            Self::Medium
        } else {
            Self::Strong
        }
    }
}

/// Sign of a correlation coefficient. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationDirection {
    #[display("positive")]
    Positive,
    #[display("negative")]
    Negative,
}

impl CorrelationDirection {
    #[must_use]
    pub fn of(coefficient: f64) -> Self {
        if coefficient < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// Pearson correlation coefficient with its classification.
///
/// # Examples
///
/// ```
/// use tabstat_stats::correlation::{CorrelationDirection, CorrelationStrength, PearsonCorrelation};
/// use tabstat_table::CellValue;
///
/// let x = [1, 2, 3, 4].map(CellValue::from);
/// let y = [8, 6, 4, 2].map(CellValue::from);
/// let correlation = PearsonCorrelation::new(&x, &y).unwrap();
/// assert_eq!(correlation.value, -1.0);
/// assert_eq!(correlation.strength, CorrelationStrength::Strong);
/// assert_eq!(correlation.direction, CorrelationDirection::Negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PearsonCorrelation {
    pub value: f64,
    #[serde(rename = "type")]
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl PearsonCorrelation {
    /// Correlates two columns of values (headers excluded).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either column is empty, the lengths
    /// differ, an element is not numeric, or one column is constant.
    pub fn new(first: &[CellValue], second: &[CellValue]) -> Result<Self, ValidationError> {
        let (first, second) = validate_pair(first, second)?;
        Self::from_numbers(&first, &second)
    }

    /// Correlates two equally long slices of numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroVariance`] when the denominator
    /// vanishes, and the emptiness and length checks of [`Self::new`].
    pub fn from_numbers(first: &[f64], second: &[f64]) -> Result<Self, ValidationError> {
        if first.is_empty() || second.is_empty() {
            return Err(ValidationError::EmptyColumn);
        }
        if first.len() != second.len() {
            return Err(ValidationError::LengthMismatch {
                first: first.len(),
                second: second.len(),
            });
        }

        let sums = PairSums::new(first, second);
        if sums.a_is_degenerate() || sums.b_is_degenerate() {
            return Err(ValidationError::ZeroVariance);
        }
        let denominator = (sums.spread_a() * sums.spread_b()).sqrt();
        if !denominator.is_finite() {
            return Err(ValidationError::ZeroVariance);
        }
        let value = (sums.cross_deviation() / denominator).clamp(-1.0, 1.0);
        tracing::debug!(value, n = sums.n, "computed pearson correlation");

        Ok(Self {
            value,
            strength: CorrelationStrength::classify(value),
            direction: CorrelationDirection::of(value),
        })
    }
}
