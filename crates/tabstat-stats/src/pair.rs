//! Shared input handling for two-column calculations

use tabstat_table::CellValue;

use crate::error::{ColumnPosition, ValidationError};

/// Checks that two columns can be paired and coerces them to numbers.
///
/// Checks run in order: emptiness, equal length, then every element of the
/// first column, then every element of the second.
pub(crate) fn validate_pair(
    first: &[CellValue],
    second: &[CellValue],
) -> Result<(Vec<f64>, Vec<f64>), ValidationError> {
    if first.is_empty() || second.is_empty() {
        return Err(ValidationError::EmptyColumn);
    }
    if first.len() != second.len() {
        return Err(ValidationError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }
    let first = coerce(first, ColumnPosition::First)?;
    let second = coerce(second, ColumnPosition::Second)?;
    Ok((first, second))
}

fn coerce(column: &[CellValue], position: ColumnPosition) -> Result<Vec<f64>, ValidationError> {
    column
        .iter()
        .map(CellValue::to_number)
        .collect::<Option<Vec<_>>>()
        .ok_or(ValidationError::NonNumeric { position })
}

/// Running sums over paired observations.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PairSums {
    pub n: f64,
    pub sum_a: f64,
    pub sum_b: f64,
    pub sum_ab: f64,
    pub sum_a2: f64,
    pub sum_b2: f64,
    constant_a: bool,
    constant_b: bool,
}

impl PairSums {
    #[expect(clippy::cast_precision_loss)]
    pub fn new(a: &[f64], b: &[f64]) -> Self {
        debug_assert_eq!(a.len(), b.len());
        let mut sums = a
            .iter()
            .zip(b)
            .fold(Self::default(), |mut sums, (&a, &b)| {
                sums.sum_a += a;
                sums.sum_b += b;
                sums.sum_ab += a * b;
                sums.sum_a2 += a * a;
                sums.sum_b2 += b * b;
                sums
            });
        sums.n = a.len() as f64;
        sums.constant_a = is_constant(a);
        sums.constant_b = is_constant(b);
        sums
    }

    /// `N·ΣAB − ΣA·ΣB`
    pub fn cross_deviation(&self) -> f64 {
        self.n * self.sum_ab - self.sum_a * self.sum_b
    }

    /// `N·ΣA² − (ΣA)²`
    pub fn spread_a(&self) -> f64 {
        self.n * self.sum_a2 - self.sum_a.powi(2)
    }

    /// `N·ΣB² − (ΣB)²`
    pub fn spread_b(&self) -> f64 {
        self.n * self.sum_b2 - self.sum_b.powi(2)
    }

    /// Whether the first column has no variation.
    ///
    /// `N·ΣA² − (ΣA)²` rarely cancels to exactly zero for a constant column
    /// of decimals, so a spread within rounding noise of `N·ΣA²` counts as
    /// zero too.
    pub fn a_is_degenerate(&self) -> bool {
        self.constant_a || within_rounding(self.spread_a(), self.n, self.sum_a2)
    }

    /// Whether the second column has no variation.
    pub fn b_is_degenerate(&self) -> bool {
        self.constant_b || within_rounding(self.spread_b(), self.n, self.sum_b2)
    }
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// Rounding error of `N·ΣX² − (ΣX)²` grows with both terms and with `N`.
fn within_rounding(spread: f64, n: f64, sum_sq: f64) -> bool {
    spread <= f64::EPSILON * n * n * sum_sq
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[f64]) -> Vec<CellValue> {
        values.iter().copied().map(CellValue::from).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            validate_pair(&[], &cells(&[1.0])),
            Err(ValidationError::EmptyColumn)
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            validate_pair(&cells(&[1.0, 2.0]), &cells(&[1.0])),
            Err(ValidationError::LengthMismatch {
                first: 2,
                second: 1
            })
        );
    }

    #[test]
    fn test_non_numeric_reports_first_column_first() {
        let bad = vec![CellValue::from("x")];
        assert_eq!(
            validate_pair(&bad, &bad),
            Err(ValidationError::NonNumeric {
                position: ColumnPosition::First
            })
        );
        assert_eq!(
            validate_pair(&cells(&[1.0]), &bad),
            Err(ValidationError::NonNumeric {
                position: ColumnPosition::Second
            })
        );
    }

    #[test]
    fn test_numeric_text_is_accepted() {
        let (a, b) = validate_pair(&[CellValue::from("2")], &[CellValue::Bool(true)]).unwrap();
        assert_eq!(a, vec![2.0]);
        assert_eq!(b, vec![1.0]);
    }

    #[test]
    fn test_sums() {
        let sums = PairSums::new(&[1.0, 2.0, 3.0], &[2.0, 4.0, 7.0]);
        assert_eq!(sums.n, 3.0);
        assert_eq!(sums.sum_a, 6.0);
        assert_eq!(sums.sum_b, 13.0);
        assert_eq!(sums.sum_ab, 31.0);
        assert_eq!(sums.sum_a2, 14.0);
        assert_eq!(sums.sum_b2, 69.0);
        assert!(!sums.a_is_degenerate());
        assert!(!sums.b_is_degenerate());
    }

    #[test]
    fn test_constant_decimal_columns_are_degenerate() {
        for constant in [0.1, 0.3, 0.7, 1.1, 3.3, 1e9 + 0.3] {
            let sums = PairSums::new(&[constant; 3], &[1.0, 2.5, 7.3]);
            assert!(sums.a_is_degenerate(), "{constant}");
            assert!(!sums.b_is_degenerate(), "{constant}");
        }
        let sums = PairSums::new(&[1.0, 2.0], &[0.3; 2]);
        assert!(sums.b_is_degenerate());
    }

    #[test]
    fn test_small_but_real_spread_is_kept() {
        let sums = PairSums::new(&[1.0, 1.0001, 1.0002], &[1.0, 2.0, 3.0]);
        assert!(!sums.a_is_degenerate());
    }
}
