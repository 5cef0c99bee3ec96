//! Measures of central tendency
//!
//! [`CentralTrends`] reports mean, median and mode of a column. Mean and
//! median need numbers and are left out for qualitative columns; the mode is
//! always available.

use std::collections::HashMap;

use serde::Serialize;
use tabstat_table::CellValue;

/// Mean, median and mode of a column.
///
/// # Examples
///
/// ```
/// use tabstat_stats::central::CentralTrends;
/// use tabstat_table::CellValue;
///
/// let values = [4, 1, 3, 1].map(CellValue::from);
/// let trends = CentralTrends::new(&values);
/// assert_eq!(trends.mean, Some(2.25));
/// assert_eq!(trends.median, Some(3.0));
/// assert_eq!(trends.mode, Some(CellValue::from(1)));
/// assert_eq!(trends.mode_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralTrends {
    /// Arithmetic mean, `None` for non-numeric columns.
    pub mean: Option<f64>,
    /// Median by middle index, `None` for non-numeric columns.
    pub median: Option<f64>,
    /// Most frequent value, `None` for an empty column.
    pub mode: Option<CellValue>,
    /// Number of occurrences of the mode.
    pub mode_count: usize,
}

impl CentralTrends {
    /// Computes central trends of column values (header excluded).
    ///
    /// The column counts as numeric when its second value coerces to a
    /// number and every value coerces. Numeric columns are examined in
    /// ascending order, so among equally frequent values the smallest is the
    /// mode; other columns are examined in their original order and the value
    /// seen first wins ties. The input is not modified.
    #[must_use]
    pub fn new(values: &[CellValue]) -> Self {
        let numbers = values
            .get(1)
            .and_then(CellValue::to_number)
            .and_then(|_| values.iter().map(CellValue::to_number).collect::<Option<Vec<_>>>());

        let (mean, median, ordered) = match numbers {
            Some(mut numbers) => {
                let mut ordered = values.to_vec();
                ordered.sort_by(|a, b| {
                    let a = a.to_number().unwrap_or(f64::NAN);
                    let b = b.to_number().unwrap_or(f64::NAN);
                    a.total_cmp(&b)
                });
                numbers.sort_by(f64::total_cmp);
                (mean(&numbers), median_by_middle_index(&numbers), ordered)
            }
            None => (None, None, values.to_vec()),
        };

        let (mode, mode_count) = mode(&ordered);

        Self {
            mean,
            median,
            mode,
            mode_count,
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn mean(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// Median as the element at index `floor(N / 2)` of sorted values.
///
/// For an even count this is the upper of the two middle elements; no
/// averaging takes place. Compare
/// [`median_by_average_of_middle_pair`](crate::quantiles::median_by_average_of_middle_pair).
///
/// Returns `None` if `sorted_values` is empty.
///
/// # Examples
///
/// ```
/// use tabstat_stats::central::median_by_middle_index;
///
/// assert_eq!(median_by_middle_index(&[1.0, 2.0, 3.0, 4.0]), Some(3.0));
/// assert_eq!(median_by_middle_index(&[1.0, 2.0, 3.0]), Some(2.0));
/// ```
#[must_use]
pub fn median_by_middle_index(sorted_values: &[f64]) -> Option<f64> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );
    sorted_values.get(sorted_values.len() / 2).copied()
}

/// Most frequent value and its count. The earliest value wins ties.
fn mode(values: &[CellValue]) -> (Option<CellValue>, usize) {
    let mut counts = Vec::<(&CellValue, usize)>::new();
    let mut positions = HashMap::<String, usize>::new();
    for value in values {
        let position = *positions.entry(value.to_string()).or_insert_with(|| {
            counts.push((value, 0));
            counts.len() - 1
        });
        counts[position].1 += 1;
    }

    let mut best: Option<(&CellValue, usize)> = None;
    for &(value, count) in &counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.map_or((None, 0), |(value, count)| (Some(value.clone()), count))
}
