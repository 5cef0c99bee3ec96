//! Tabular dataset model for the tabstat engine.
//!
//! This crate owns everything that happens before any statistic is computed:
//!
//! - **Cell values** ([`value`]): the closed set of scalar cell shapes and
//!   their numeric coercion
//! - **Matrix** ([`matrix`]): header row plus data rows, column extraction,
//!   and conversion from/to arrays of records
//! - **Cleaning** ([`cleaning`]): removal of incomplete rows
//! - **Classification** ([`classify`]): statistical variable type per column
//! - **Initial treatment** ([`treatment`]): cleaning followed by classification
//!
//! # Examples
//!
//! ```
//! use tabstat_table::{CellValue, Matrix, VariableType, initial_treatment};
//!
//! let matrix: Matrix = serde_json::from_str(
//!     r#"[["city", "rain"], ["Porto", 12.5], ["Braga", null], ["Faro", 3.1]]"#,
//! )
//! .unwrap();
//!
//! let treated = initial_treatment(&matrix);
//! assert_eq!(treated.cleaned_data.data_rows().len(), 2);
//! assert_eq!(
//!     treated.column_types[1].variable_type,
//!     VariableType::QuantitativaContinua
//! );
//!
//! let rain = treated.cleaned_data.column_values("rain").unwrap();
//! assert_eq!(rain, vec![CellValue::from(12.5), CellValue::from(3.1)]);
//! ```

pub use self::{
    classify::{ColumnType, VariableType, classify_columns, classify_sample, is_binary_column},
    cleaning::clean,
    matrix::{ColumnNotFound, Matrix, Record, RecordError},
    treatment::{TreatedData, initial_treatment},
    value::{CellValue, NonScalarValue},
};

pub mod classify;
pub mod cleaning;
pub mod matrix;
pub mod treatment;
pub mod value;
