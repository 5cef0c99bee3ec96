//! Variable type classification
//!
//! Each column is assigned one of the classic statistical variable types by
//! looking at the value in the first data row:
//!
//! - text → [`VariableType::QualitativaNominal`]
//! - decimal number → [`VariableType::QuantitativaContinua`]
//! - integer → [`VariableType::QuantitativaDiscreta`], or
//!   [`VariableType::Binaria`] when every data value of the column is 0 or 1
//! - anything else → [`VariableType::QualitativaNominal`]
//!
//! The binary check is the only step that looks past the first data row.

use serde::{Deserialize, Serialize};

use crate::{matrix::Matrix, value::CellValue};

/// Statistical variable type of a column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum VariableType {
    #[serde(rename = "qualitativa nominal")]
    #[display("qualitativa nominal")]
    QualitativaNominal,
    #[serde(rename = "qualitativa ordinal")]
    #[display("qualitativa ordinal")]
    QualitativaOrdinal,
    #[serde(rename = "quantitativa discreta")]
    #[display("quantitativa discreta")]
    QuantitativaDiscreta,
    #[serde(rename = "quantitativa continua")]
    #[display("quantitativa continua")]
    QuantitativaContinua,
    #[serde(rename = "binária")]
    #[display("binária")]
    Binaria,
}

impl VariableType {
    /// Returns `true` for types whose values are numbers.
    #[must_use]
    pub fn is_quantitative(self) -> bool {
        matches!(
            self,
            VariableType::QuantitativaDiscreta
                | VariableType::QuantitativaContinua
                | VariableType::Binaria
        )
    }
}

/// The variable type assigned to one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnType {
    pub column_name: String,
    #[serde(rename = "type")]
    pub variable_type: VariableType,
}

/// Classifies a single representative cell.
///
/// Integers are reported as [`VariableType::QuantitativaDiscreta`]; telling
/// binary columns apart needs the whole column (see [`is_binary_column`]).
#[must_use]
pub fn classify_sample(sample: &CellValue) -> VariableType {
    match sample {
        CellValue::Number(_) if sample.is_integer() => VariableType::QuantitativaDiscreta,
        CellValue::Number(_) => VariableType::QuantitativaContinua,
        CellValue::Text(_) | CellValue::Null | CellValue::Bool(_) => {
            VariableType::QualitativaNominal
        }
    }
}

/// Returns `true` if every data row holds exactly `0` or `1` in column `index`.
///
/// The header row is not inspected.
#[must_use]
pub fn is_binary_column(data: &Matrix, index: usize) -> bool {
    data.data_rows().iter().all(|row| {
        matches!(
            row.get(index),
            Some(CellValue::Number(value)) if *value == 0.0 || *value == 1.0
        )
    })
}

/// Assigns a variable type to every column of a cleaned matrix.
///
/// Returns one entry per header cell, in header order. A matrix without at
/// least one data row cannot be classified and yields an empty vector.
///
/// # Examples
///
/// ```
/// use tabstat_table::{CellValue, Matrix, VariableType, classify_columns};
///
/// let matrix = Matrix::with_header(
///     ["name", "score", "passed"],
///     vec![
///         vec![CellValue::from("ana"), CellValue::from(7.5), CellValue::from(1)],
///         vec![CellValue::from("rui"), CellValue::from(6.0), CellValue::from(0)],
///     ],
/// );
/// let types = classify_columns(&matrix);
/// assert_eq!(types[0].variable_type, VariableType::QualitativaNominal);
/// assert_eq!(types[1].variable_type, VariableType::QuantitativaContinua);
/// assert_eq!(types[2].variable_type, VariableType::Binaria);
/// ```
#[must_use]
pub fn classify_columns(data: &Matrix) -> Vec<ColumnType> {
    let (Some(header), Some(first_row)) = (data.header(), data.data_rows().first()) else {
        return vec![];
    };

    header
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let sample = first_row.get(index).unwrap_or(&CellValue::Null);
            let mut variable_type = classify_sample(sample);
            if variable_type == VariableType::QuantitativaDiscreta && is_binary_column(data, index)
            {
                variable_type = VariableType::Binaria;
            }
            tracing::debug!(column = %name, %variable_type, "classified column");
            ColumnType {
                column_name: name.to_string(),
                variable_type,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<CellValue>>) -> Matrix {
        Matrix::with_header(["c"], rows)
    }

    #[test]
    fn test_classify_sample() {
        assert_eq!(
            classify_sample(&CellValue::from("x")),
            VariableType::QualitativaNominal
        );
        assert_eq!(
            classify_sample(&CellValue::from(2.5)),
            VariableType::QuantitativaContinua
        );
        assert_eq!(
            classify_sample(&CellValue::from(2)),
            VariableType::QuantitativaDiscreta
        );
        assert_eq!(
            classify_sample(&CellValue::Bool(true)),
            VariableType::QualitativaNominal
        );
    }

    #[test]
    fn test_binary_column() {
        let data = matrix(vec![
            vec![CellValue::from(0)],
            vec![CellValue::from(1)],
            vec![CellValue::from(1)],
        ]);
        assert_eq!(classify_columns(&data)[0].variable_type, VariableType::Binaria);
    }

    #[test]
    fn test_binary_scan_covers_all_rows() {
        let data = matrix(vec![
            vec![CellValue::from(1)],
            vec![CellValue::from(0)],
            vec![CellValue::from(2)],
        ]);
        assert_eq!(
            classify_columns(&data)[0].variable_type,
            VariableType::QuantitativaDiscreta
        );
    }

    #[test]
    fn test_first_row_decides_continuous() {
        // Later integers do not matter once the first value is decimal.
        let data = matrix(vec![vec![CellValue::from(0.5)], vec![CellValue::from(1)]]);
        assert_eq!(
            classify_columns(&data)[0].variable_type,
            VariableType::QuantitativaContinua
        );
    }

    #[test]
    fn test_not_enough_rows() {
        assert!(classify_columns(&Matrix::default()).is_empty());
        assert!(classify_columns(&matrix(vec![])).is_empty());
    }

    #[test]
    fn test_serialized_labels() {
        let column_type = ColumnType {
            column_name: "x".to_owned(),
            variable_type: VariableType::Binaria,
        };
        let json = serde_json::to_string(&column_type).unwrap();
        assert_eq!(json, r#"{"columnName":"x","type":"binária"}"#);
    }
}
