//! Frequency distributions
//!
//! A [`FrequencyTable`] counts how often each value of a column occurs. Two
//! groupings are supported (see [`FrequencyMode`]):
//!
//! - **Discrete**: one entry per distinct value
//! - **Class intervals**: numeric values grouped into equal-width classes
//!   `[lo, lo + width)`, with `width = ceil((max − min) / √N)` and the last
//!   class closed on both ends
//!
//! # Numeric columns
//!
//! A column counts as numeric when its first data value coerces to a number.
//! Numeric columns are counted in ascending order and get an absolute
//! cumulative frequency; other columns keep their original order and have no
//! cumulative frequency.

use std::collections::HashMap;

use serde::Serialize;
use tabstat_table::CellValue;

/// How values are grouped into frequency entries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyMode {
    /// One entry per distinct value.
    #[default]
    Discrete,
    /// Equal-width class intervals. Only applies to numeric columns; other
    /// columns fall back to [`FrequencyMode::Discrete`].
    ClassIntervals,
}

/// Frequencies of one distinct value or one class interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyEntry {
    /// The value as text, or the `"lo - hi"` label of a class interval.
    pub value: String,
    /// Number of occurrences.
    pub absolute_frequency: usize,
    /// Share of all values, in `(0, 1]`.
    pub relative_frequency: f64,
    /// Number of values up to and including this entry in ascending order.
    /// Only present for numeric columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_cumulative_frequency: Option<usize>,
}

/// Frequency distribution of a single column.
///
/// # Examples
///
/// ```
/// use tabstat_stats::frequency::{FrequencyMode, FrequencyTable};
/// use tabstat_table::CellValue;
///
/// // Header first, as returned by `Matrix::extract_column`.
/// let column = ["n", "3", "1", "2", "1"].map(CellValue::from);
/// let table = FrequencyTable::new(&column, FrequencyMode::Discrete);
///
/// let first = &table.entries()[0];
/// assert_eq!(first.value, "1");
/// assert_eq!(first.absolute_frequency, 2);
/// assert_eq!(first.absolute_cumulative_frequency, Some(2));
/// assert_eq!(table.total(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Computes the frequency table of a column.
    ///
    /// `column` must start with the column header, which is skipped. The
    /// input is not modified.
    #[must_use]
    pub fn new(column: &[CellValue], mode: FrequencyMode) -> Self {
        let numeric = column.get(1).and_then(CellValue::to_number).is_some();
        let mut values = column.get(1..).unwrap_or_default().to_vec();
        if numeric {
            values.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
        }

        let entries = match mode {
            FrequencyMode::ClassIntervals if numeric => {
                match values.iter().map(CellValue::to_number).collect::<Option<Vec<_>>>() {
                    Some(sorted) => class_interval_entries(&sorted),
                    None => {
                        tracing::debug!("column has non-numeric values, using discrete frequencies");
                        distinct_value_entries(&values, numeric)
                    }
                }
            }
            FrequencyMode::ClassIntervals | FrequencyMode::Discrete => {
                distinct_value_entries(&values, numeric)
            }
        };

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> + '_ {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the absolute frequencies, i.e. the number of data values.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.absolute_frequency).sum()
    }
}

fn sort_key(value: &CellValue) -> f64 {
    // NaN sorts after every number under `total_cmp`.
    value.to_number().unwrap_or(f64::NAN)
}

#[expect(clippy::cast_precision_loss)]
fn distinct_value_entries(values: &[CellValue], numeric: bool) -> Vec<FrequencyEntry> {
    let total = values.len() as f64;
    let mut entries = Vec::<FrequencyEntry>::new();
    let mut positions = HashMap::<String, usize>::new();

    for (seen, value) in values.iter().enumerate() {
        let position = *positions.entry(value.to_string()).or_insert_with_key(|key| {
            entries.push(FrequencyEntry {
                value: key.clone(),
                absolute_frequency: 0,
                relative_frequency: 0.0,
                absolute_cumulative_frequency: None,
            });
            entries.len() - 1
        });
        let entry = &mut entries[position];
        entry.absolute_frequency += 1;
        entry.relative_frequency = entry.absolute_frequency as f64 / total;
        if numeric {
            entry.absolute_cumulative_frequency = Some(seen + 1);
        }
    }

    entries
}

/// Class width `ceil((max − min) / √N)`.
#[expect(clippy::cast_precision_loss)]
fn class_width(min: f64, max: f64, count: usize) -> f64 {
    ((max - min) / (count as f64).sqrt()).ceil()
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn class_interval_entries(sorted_values: &[f64]) -> Vec<FrequencyEntry> {
    let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
        return vec![];
    };
    let total = sorted_values.len();
    let width = class_width(min, max, total);
    let has_width = width > 0.0 && width.is_finite();

    let num_classes = if has_width {
        (((max - min) / width).ceil() as usize).max(1)
    } else {
        1
    };

    let mut counts = vec![0_usize; num_classes];
    for &value in sorted_values {
        let idx = if has_width {
            ((value - min) / width).floor() as usize
        } else {
            0
        };
        // The last class is closed, so the maximum lands in it.
        counts[idx.min(num_classes - 1)] += 1;
    }

    let mut cumulative = 0;
    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(class_idx, &count)| {
            cumulative += count;
            let lo = if has_width {
                min + width * class_idx as f64
            } else {
                min
            };
            let hi = if has_width { lo + width } else { max };
            FrequencyEntry {
                value: format!("{} - {}", CellValue::Number(lo), CellValue::Number(hi)),
                absolute_frequency: count,
                relative_frequency: count as f64 / total as f64,
                absolute_cumulative_frequency: Some(cumulative),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_column(values: &[f64]) -> Vec<CellValue> {
        let mut column = vec![CellValue::from("v")];
        column.extend(values.iter().copied().map(CellValue::from));
        column
    }

    fn assert_sums(table: &FrequencyTable, count: usize) {
        assert_eq!(table.total(), count);
        let relative = table.iter().map(|e| e.relative_frequency).sum::<f64>();
        assert!((relative - 1.0).abs() < 1e-9, "relative sum {relative}");
    }

    #[test]
    fn test_header_only() {
        let table = FrequencyTable::new(&[CellValue::from("v")], FrequencyMode::Discrete);
        assert!(table.is_empty());
        let table = FrequencyTable::new(&[], FrequencyMode::ClassIntervals);
        assert!(table.is_empty());
    }

    #[test]
    fn test_numeric_discrete() {
        let column = numeric_column(&[3.0, 1.0, 2.0, 1.0, 3.0, 3.0]);
        let table = FrequencyTable::new(&column, FrequencyMode::Discrete);

        let values = table.iter().map(|e| e.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["1", "2", "3"]);
        let absolute = table.iter().map(|e| e.absolute_frequency).collect::<Vec<_>>();
        assert_eq!(absolute, vec![2, 1, 3]);
        let cumulative = table
            .iter()
            .map(|e| e.absolute_cumulative_frequency.unwrap())
            .collect::<Vec<_>>();
        assert_eq!(cumulative, vec![2, 3, 6]);
        assert!(cumulative.is_sorted());
        assert_sums(&table, 6);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let column = numeric_column(&[3.0, 1.0, 2.0]);
        let before = column.clone();
        let _ = FrequencyTable::new(&column, FrequencyMode::Discrete);
        assert_eq!(column, before);
    }

    #[test]
    fn test_categorical_keeps_first_seen_order() {
        let column = ["fruit", "pear", "apple", "pear", "fig"].map(CellValue::from);
        let table = FrequencyTable::new(&column, FrequencyMode::Discrete);

        let values = table.iter().map(|e| e.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["pear", "apple", "fig"]);
        assert!(table.iter().all(|e| e.absolute_cumulative_frequency.is_none()));
        assert!((table.entries()[0].relative_frequency - 0.5).abs() < 1e-12);
        assert_sums(&table, 4);
    }

    #[test]
    fn test_numeric_text_column_is_sorted() {
        let column = ["v", "10", "9", "10"].map(CellValue::from);
        let table = FrequencyTable::new(&column, FrequencyMode::Discrete);
        assert_eq!(table.entries()[0].value, "9");
        assert_eq!(table.entries()[1].absolute_cumulative_frequency, Some(3));
    }

    #[test]
    fn test_class_intervals() {
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let table = FrequencyTable::new(&numeric_column(&values), FrequencyMode::ClassIntervals);

        // width = ceil(9 / sqrt(10)) = 3
        let labels = table.iter().map(|e| e.value.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["1 - 4", "4 - 7", "7 - 10"]);
        let absolute = table.iter().map(|e| e.absolute_frequency).collect::<Vec<_>>();
        assert_eq!(absolute, vec![3, 3, 4]);
        let cumulative = table
            .iter()
            .map(|e| e.absolute_cumulative_frequency.unwrap())
            .collect::<Vec<_>>();
        assert_eq!(cumulative, vec![3, 6, 10]);
        assert_sums(&table, 10);
    }

    #[test]
    fn test_class_intervals_skip_empty_classes() {
        let mut values = vec![0.0; 8];
        values.push(20.0);
        let table = FrequencyTable::new(&numeric_column(&values), FrequencyMode::ClassIntervals);
        // width = ceil(20 / 3) = 7, the middle class [7, 14) is empty
        let labels = table.iter().map(|e| e.value.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["0 - 7", "14 - 21"]);
        let cumulative = table
            .iter()
            .map(|e| e.absolute_cumulative_frequency.unwrap())
            .collect::<Vec<_>>();
        assert_eq!(cumulative, vec![8, 9]);
        assert_sums(&table, 9);
    }

    #[test]
    fn test_class_intervals_constant_column() {
        let table = FrequencyTable::new(
            &numeric_column(&[5.0, 5.0, 5.0]),
            FrequencyMode::ClassIntervals,
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].value, "5 - 5");
        assert_eq!(table.entries()[0].absolute_frequency, 3);
    }

    #[test]
    fn test_class_intervals_fall_back_for_text() {
        let column = ["c", "a", "b", "a"].map(CellValue::from);
        let table = FrequencyTable::new(&column, FrequencyMode::ClassIntervals);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].value, "a");
    }

    #[test]
    fn test_mixed_column_counts_every_value() {
        let column = vec![CellValue::from("v"), CellValue::from(1), CellValue::from("x")];
        let table = FrequencyTable::new(&column, FrequencyMode::ClassIntervals);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[1].value, "x");
        assert_eq!(table.entries()[1].absolute_cumulative_frequency, Some(2));
        assert_sums(&table, 2);
    }

    #[test]
    fn test_serialization_omits_missing_cumulative() {
        let column = ["c", "a"].map(CellValue::from);
        let table = FrequencyTable::new(&column, FrequencyMode::Discrete);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"value": "a", "absoluteFrequency": 1, "relativeFrequency": 1.0}])
        );
    }
}
