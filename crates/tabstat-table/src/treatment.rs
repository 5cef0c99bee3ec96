//! Initial treatment of a freshly loaded dataset
//!
//! This is the single entry point a front end calls after turning a file into
//! a [`Matrix`]: incomplete rows are removed, then every column is
//! classified. Everything downstream works on the resulting
//! [`TreatedData`].

use serde::Serialize;

use crate::{
    classify::{ColumnType, classify_columns},
    cleaning::clean,
    matrix::Matrix,
};

/// A cleaned matrix together with the variable type of each column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatedData {
    pub cleaned_data: Matrix,
    pub column_types: Vec<ColumnType>,
}

impl TreatedData {
    /// Looks up the type assigned to `name`.
    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<&ColumnType> {
        self.column_types
            .iter()
            .find(|column_type| column_type.column_name == name)
    }
}

/// Cleans `data` and classifies its columns.
///
/// # Examples
///
/// ```
/// use tabstat_table::{CellValue, Matrix, VariableType, initial_treatment};
///
/// let matrix = Matrix::with_header(
///     ["A", "B"],
///     vec![
///         vec![CellValue::from("x"), CellValue::from(1)],
///         vec![CellValue::from("y"), CellValue::from(2)],
///         vec![CellValue::from("z"), CellValue::Null],
///     ],
/// );
/// let treated = initial_treatment(&matrix);
/// assert_eq!(treated.cleaned_data.data_rows().len(), 2);
/// assert_eq!(
///     treated.column_type("B").unwrap().variable_type,
///     VariableType::QuantitativaDiscreta
/// );
/// ```
#[must_use]
pub fn initial_treatment(data: &Matrix) -> TreatedData {
    if data.is_empty() {
        return TreatedData::default();
    }

    let cleaned_data = clean(data);
    let column_types = classify_columns(&cleaned_data);
    tracing::info!(
        rows = cleaned_data.data_rows().len(),
        columns = column_types.len(),
        "initial treatment complete"
    );

    TreatedData {
        cleaned_data,
        column_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classify::VariableType, value::CellValue};

    #[test]
    fn test_empty_input() {
        let treated = initial_treatment(&Matrix::default());
        assert!(treated.cleaned_data.is_empty());
        assert!(treated.column_types.is_empty());
    }

    #[test]
    fn test_end_to_end_types() {
        let matrix = Matrix::with_header(
            ["A", "B"],
            vec![
                vec![CellValue::from("x"), CellValue::from(1)],
                vec![CellValue::from("y"), CellValue::from(2)],
                vec![CellValue::from("z"), CellValue::from(3)],
            ],
        );
        let treated = initial_treatment(&matrix);
        assert_eq!(
            treated.column_types,
            vec![
                ColumnType {
                    column_name: "A".to_owned(),
                    variable_type: VariableType::QualitativaNominal,
                },
                ColumnType {
                    column_name: "B".to_owned(),
                    variable_type: VariableType::QuantitativaDiscreta,
                },
            ]
        );
        assert_eq!(treated.cleaned_data, matrix);
    }

    #[test]
    fn test_classification_follows_cleaning() {
        // The first row is dropped, so the decimal in row two decides the type.
        let matrix = Matrix::with_header(
            ["v"],
            vec![vec![CellValue::from("")], vec![CellValue::from(2.5)]],
        );
        let treated = initial_treatment(&matrix);
        assert_eq!(
            treated.column_types[0].variable_type,
            VariableType::QuantitativaContinua
        );
    }

    #[test]
    fn test_all_rows_dropped() {
        let matrix = Matrix::with_header(["v"], vec![vec![CellValue::Null]]);
        let treated = initial_treatment(&matrix);
        assert_eq!(treated.cleaned_data.len(), 1);
        assert!(treated.column_types.is_empty());
    }
}
