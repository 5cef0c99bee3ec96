//! Row-major dataset matrix
//!
//! A [`Matrix`] is the canonical input of the engine: row 0 holds the column
//! names, every following row holds one observation.
//!
//! ```text
//! [
//!   ["Title", "Year", "Rating"],   <- header
//!   ["Alien", 1979,   8.5],        <- data row 1
//!   ["Heat",  1995,   8.3],        <- data row 2
//! ]
//! ```
//!
//! # Serialization
//!
//! The matrix serializes transparently as an array of arrays. Datasets that
//! come as an array of records (one JSON object per row) are converted with
//! [`Matrix::from_records`]; [`Matrix::to_records`] goes the other way.

use serde::{Deserialize, Serialize};

use crate::value::{CellValue, NonScalarValue};

/// Error returned when a requested column name is not in the header row.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("column '{name}' not found")]
pub struct ColumnNotFound {
    pub name: String,
}

/// Error returned when records cannot be converted into a matrix.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("record {index}, field '{key}': {source}")]
pub struct RecordError {
    pub index: usize,
    pub key: String,
    pub source: NonScalarValue,
}

/// A JSON object representing one data row, keyed by column name.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A header row followed by data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<CellValue>>,
}

impl Matrix {
    /// Creates a matrix from raw rows. The first row is the header.
    #[must_use]
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Builds a matrix from a header and data rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_table::{CellValue, Matrix};
    ///
    /// let matrix = Matrix::with_header(
    ///     ["name", "age"],
    ///     vec![vec![CellValue::from("ana"), CellValue::from(31)]],
    /// );
    /// assert_eq!(matrix.column_names(), vec!["name", "age"]);
    /// assert_eq!(matrix.data_rows().len(), 1);
    /// ```
    #[must_use]
    pub fn with_header<I, S>(header: I, data: Vec<Vec<CellValue>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header = header
            .into_iter()
            .map(|name| CellValue::Text(name.into()))
            .collect();
        let mut rows = Vec::with_capacity(data.len() + 1);
        rows.push(header);
        rows.extend(data);
        Self { rows }
    }

    /// All rows, header included.
    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<CellValue>> {
        self.rows
    }

    /// The header row, if the matrix is not empty.
    #[must_use]
    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of rows, header included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header cells rendered as column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<String> {
        self.header()
            .map(|header| header.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Position of the first header cell that is exactly the text `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header()?
            .iter()
            .position(|cell| matches!(cell, CellValue::Text(text) if text == name))
    }

    /// Extracts one column, header included.
    ///
    /// The returned vector has one element per row: the column name followed
    /// by the value of every data row. Rows too short to hold the column
    /// contribute `Null`.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnNotFound`] when no header cell matches `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_table::{CellValue, Matrix};
    ///
    /// let matrix = Matrix::with_header(
    ///     ["a", "b"],
    ///     vec![
    ///         vec![CellValue::from("x"), CellValue::from(1)],
    ///         vec![CellValue::from("y"), CellValue::from(2)],
    ///     ],
    /// );
    /// let column = matrix.extract_column("b").unwrap();
    /// assert_eq!(column, vec![CellValue::from("b"), CellValue::from(1), CellValue::from(2)]);
    /// assert!(matrix.extract_column("c").is_err());
    /// ```
    pub fn extract_column(&self, name: &str) -> Result<Vec<CellValue>, ColumnNotFound> {
        let index = self.column_index(name).ok_or_else(|| ColumnNotFound {
            name: name.to_owned(),
        })?;
        let column = self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or(CellValue::Null))
            .collect();
        Ok(column)
    }

    /// Extracts the data values of one column, without its header.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnNotFound`] when no header cell matches `name`.
    pub fn column_values(&self, name: &str) -> Result<Vec<CellValue>, ColumnNotFound> {
        let mut column = self.extract_column(name)?;
        column.remove(0);
        Ok(column)
    }

    /// Builds a matrix from an array of records.
    ///
    /// The header is taken from the keys of the first record, in document
    /// order. Every record becomes one data row; a key missing from a record
    /// yields a `Null` cell, and keys not present in the first record are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if a field holds an array or object.
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_table::{CellValue, Matrix, Record};
    ///
    /// let records: Vec<Record> =
    ///     serde_json::from_str(r#"[{"a": 1, "b": "x"}, {"b": "y"}]"#).unwrap();
    /// let matrix = Matrix::from_records(&records).unwrap();
    /// assert_eq!(matrix.column_names(), vec!["a", "b"]);
    /// assert_eq!(matrix.data_rows()[1], vec![CellValue::Null, CellValue::from("y")]);
    /// ```
    pub fn from_records(records: &[Record]) -> Result<Self, RecordError> {
        let Some(first) = records.first() else {
            return Ok(Self::default());
        };
        let header = first.keys().cloned().collect::<Vec<_>>();

        let mut data = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let row = header
                .iter()
                .map(|key| {
                    let value = record.get(key).cloned().unwrap_or_default();
                    CellValue::try_from(value).map_err(|source| RecordError {
                        index,
                        key: key.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            data.push(row);
        }

        Ok(Self::with_header(header, data))
    }

    /// Converts the data rows into records keyed by column name.
    #[must_use]
    pub fn to_records(&self) -> Vec<Record> {
        let names = self.column_names();
        self.data_rows()
            .iter()
            .map(|row| {
                names
                    .iter()
                    .zip(row)
                    .map(|(name, cell)| (name.clone(), cell.to_json()))
                    .collect()
            })
            .collect()
    }
}
