//! Removal of incomplete rows
//!
//! Statistics are only computed over complete observations. Rather than
//! imputing or repairing individual cells, any data row holding a missing
//! cell is dropped whole.

use crate::{matrix::Matrix, value::CellValue};

/// Returns a copy of `data` without incomplete data rows.
///
/// The header row is always kept. A data row is kept when it has exactly as
/// many cells as the header and none of them is missing
/// (see [`CellValue::is_missing`]).
///
/// # Examples
///
/// ```
/// use tabstat_table::{CellValue, Matrix, clean};
///
/// let matrix = Matrix::with_header(
///     ["a", "b"],
///     vec![
///         vec![CellValue::from(1), CellValue::from("x")],
///         vec![CellValue::Null, CellValue::from("y")],
///         vec![CellValue::from(3), CellValue::from("")],
///     ],
/// );
/// let cleaned = clean(&matrix);
/// assert_eq!(cleaned.data_rows().len(), 1);
/// ```
#[must_use]
pub fn clean(data: &Matrix) -> Matrix {
    let Some(header) = data.header() else {
        return Matrix::default();
    };
    let width = header.len();

    let mut rows = Vec::with_capacity(data.len());
    rows.push(header.to_vec());
    rows.extend(
        data.data_rows()
            .iter()
            .filter(|row| is_complete(row, width))
            .cloned(),
    );

    let dropped = data.len() - rows.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = rows.len() - 1, "dropped incomplete rows");
    }

    Matrix::new(rows)
}

fn is_complete(row: &[CellValue], width: usize) -> bool {
    row.len() == width && !row.iter().any(CellValue::is_missing)
}
