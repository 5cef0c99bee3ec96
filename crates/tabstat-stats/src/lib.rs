//! Descriptive statistics over tabular datasets.
//!
//! Every calculator takes plain column values (see [`tabstat_table`]) and
//! returns a serializable result:
//!
//! - **Frequencies** ([`frequency`]): discrete or class-interval frequency tables
//! - **Central trends** ([`central`]): mean, median and mode
//! - **Quantiles** ([`quantiles`]): quartiles and deciles by index
//! - **Dispersion** ([`dispersion`]): range, interpolated quartiles, variance,
//!   standard deviation and coefficient of variation
//! - **Correlation** ([`correlation`]): Pearson coefficient with strength and direction
//! - **Regression** ([`regression`]): simple linear regression line
//! - **Binomial** ([`binomial`]) and **normal** ([`normal`]) distribution models
//!
//! [`dataset::Dataset`] ties them together behind column names.
//!
//! # Examples
//!
//! ## Summarizing a column
//!
//! ```
//! use tabstat_stats::{dispersion::DispersionSummary, quantiles::Separatrices};
//!
//! let values = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
//! let summary = DispersionSummary::new(&values).unwrap();
//! assert_eq!(summary.range.value, 38.0);
//!
//! let separatrices = Separatrices::new(&values).unwrap();
//! assert_eq!(separatrices.get("Q2"), Some(15.5));
//! ```
//!
//! ## Comparing two columns
//!
//! ```
//! use tabstat_stats::dataset::Dataset;
//! use tabstat_stats::regression::InterceptFormula;
//! use tabstat_table::Matrix;
//!
//! let matrix: Matrix =
//!     serde_json::from_str(r#"[["x", "y"], [1, 3], [2, 5], [3, 7]]"#).unwrap();
//! let dataset = Dataset::new(&matrix);
//!
//! let correlation = dataset.pearson("x", "y").unwrap();
//! assert!((correlation.value - 1.0).abs() < 1e-12);
//!
//! let line = dataset
//!     .regression("x", "y", InterceptFormula::LeastSquares)
//!     .unwrap();
//! assert_eq!(line.equation, "y = 2.00x + 1.00");
//! ```

pub use self::error::{ColumnPosition, DistributionError, ValidationError};

pub mod binomial;
pub mod central;
pub mod correlation;
pub mod dataset;
pub mod dispersion;
pub mod error;
pub mod frequency;
pub mod normal;
mod pair;
pub mod quantiles;
pub mod regression;
