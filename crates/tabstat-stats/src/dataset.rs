//! Name-keyed access to every calculator
//!
//! A [`Dataset`] runs the initial treatment once and then answers requests
//! that refer to columns by header name, the way a front end asks for them.
//! Each call is independent: a failure on one column has no effect on
//! requests for other columns.

use tabstat_table::{CellValue, ColumnNotFound, ColumnType, Matrix, TreatedData, initial_treatment};

use crate::{
    binomial::BinomialDistribution,
    central::CentralTrends,
    correlation::PearsonCorrelation,
    dispersion::DispersionSummary,
    error::{DistributionError, ValidationError},
    frequency::{FrequencyMode, FrequencyTable},
    normal::NormalDistribution,
    quantiles::Separatrices,
    regression::{InterceptFormula, RegressionLine},
};

/// Error returned by name-keyed dataset operations.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("{_0}")]
    ColumnNotFound(#[error(not(source))] ColumnNotFound),
    #[display("column '{name}' contains non-numeric values")]
    NonNumericColumn { name: String },
    #[display("column '{name}' has no values")]
    EmptyColumn { name: String },
    #[display("{_0}")]
    Validation(#[error(not(source))] ValidationError),
    #[display("{_0}")]
    Distribution(#[error(not(source))] DistributionError),
}

impl From<ColumnNotFound> for DatasetError {
    fn from(err: ColumnNotFound) -> Self {
        Self::ColumnNotFound(err)
    }
}

impl From<ValidationError> for DatasetError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<DistributionError> for DatasetError {
    fn from(err: DistributionError) -> Self {
        Self::Distribution(err)
    }
}

/// A treated dataset.
///
/// # Examples
///
/// ```
/// use tabstat_stats::dataset::Dataset;
/// use tabstat_table::{CellValue, Matrix};
///
/// let matrix = Matrix::with_header(
///     ["A", "B"],
///     vec![
///         vec![CellValue::from("x"), CellValue::from(1)],
///         vec![CellValue::from("y"), CellValue::from(2)],
///         vec![CellValue::from("z"), CellValue::from(3)],
///     ],
/// );
/// let dataset = Dataset::new(&matrix);
///
/// let trends = dataset.central_trends("B").unwrap();
/// assert_eq!(trends.mean, Some(2.0));
/// assert!(dataset.central_trends("C").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    treated: TreatedData,
}

impl Dataset {
    /// Cleans and classifies `matrix`.
    #[must_use]
    pub fn new(matrix: &Matrix) -> Self {
        Self::from_treated(initial_treatment(matrix))
    }

    #[must_use]
    pub fn from_treated(treated: TreatedData) -> Self {
        Self { treated }
    }

    #[must_use]
    pub fn treated(&self) -> &TreatedData {
        &self.treated
    }

    /// The cleaned matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.treated.cleaned_data
    }

    #[must_use]
    pub fn column_types(&self) -> &[ColumnType] {
        &self.treated.column_types
    }

    #[must_use]
    pub fn column_type(&self, name: &str) -> Option<&ColumnType> {
        self.treated.column_type(name)
    }

    /// Data values of a column, without the header.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnNotFound`] if no header matches `name`.
    pub fn column(&self, name: &str) -> Result<Vec<CellValue>, ColumnNotFound> {
        self.matrix().column_values(name)
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::ColumnNotFound`] if no header matches `name`.
    pub fn frequencies(&self, name: &str, mode: FrequencyMode) -> Result<FrequencyTable, DatasetError> {
        let column = self.matrix().extract_column(name)?;
        Ok(FrequencyTable::new(&column, mode))
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::ColumnNotFound`] if no header matches `name`.
    pub fn central_trends(&self, name: &str) -> Result<CentralTrends, DatasetError> {
        Ok(CentralTrends::new(&self.column(name)?))
    }

    /// # Errors
    ///
    /// Returns [`DatasetError`] if the column is missing, empty, or not
    /// numeric.
    pub fn quantiles(&self, name: &str) -> Result<Separatrices, DatasetError> {
        let numbers = self.numbers(name)?;
        Separatrices::new(&numbers).ok_or_else(|| DatasetError::EmptyColumn {
            name: name.to_owned(),
        })
    }

    /// # Errors
    ///
    /// Returns [`DatasetError`] if the column is missing, empty, or not
    /// numeric.
    pub fn dispersion(&self, name: &str) -> Result<DispersionSummary, DatasetError> {
        let numbers = self.numbers(name)?;
        DispersionSummary::new(&numbers).ok_or_else(|| DatasetError::EmptyColumn {
            name: name.to_owned(),
        })
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::ColumnNotFound`] for an unknown column and
    /// [`DatasetError::Validation`] if the pair cannot be correlated.
    pub fn pearson(&self, first: &str, second: &str) -> Result<PearsonCorrelation, DatasetError> {
        let first = self.column(first)?;
        let second = self.column(second)?;
        Ok(PearsonCorrelation::new(&first, &second)?)
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::ColumnNotFound`] for an unknown column and
    /// [`DatasetError::Validation`] if the pair cannot be regressed.
    pub fn regression(
        &self,
        first: &str,
        second: &str,
        formula: InterceptFormula,
    ) -> Result<RegressionLine, DatasetError> {
        let first = self.column(first)?;
        let second = self.column(second)?;
        Ok(RegressionLine::with_formula(&first, &second, formula)?)
    }

    /// Binomial model of a column.
    ///
    /// With a `success_label`, values matching it (ignoring case) are
    /// successes; otherwise `true` and `1` are.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ColumnNotFound`] for an unknown column and
    /// [`DatasetError::Distribution`] if a precondition of the model fails.
    pub fn binomial(
        &self,
        name: &str,
        k: u64,
        n: u64,
        p: f64,
        success_label: Option<&str>,
    ) -> Result<BinomialDistribution, DatasetError> {
        let values = self.column(name)?;
        let model = match success_label {
            Some(label) => BinomialDistribution::from_labels(&values, label, k, n, p)?,
            None => BinomialDistribution::new(&values, k, n, p)?,
        };
        Ok(model)
    }

    /// # Errors
    ///
    /// Returns [`DatasetError`] if the column is missing or not numeric, or
    /// if the model cannot be fitted.
    pub fn normal(&self, name: &str, min: f64, max: f64) -> Result<NormalDistribution, DatasetError> {
        let numbers = self.numbers(name)?;
        Ok(NormalDistribution::new(&numbers, min, max)?)
    }

    fn numbers(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        self.column(name)?
            .iter()
            .map(CellValue::to_number)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DatasetError::NonNumericColumn {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use tabstat_table::VariableType;

    use super::*;

    fn sample() -> Dataset {
        Dataset::new(&Matrix::with_header(
            ["A", "B", "C", "D"],
            vec![
                vec![
                    CellValue::from("x"),
                    CellValue::from(1),
                    CellValue::from(2.0),
                    CellValue::from(1),
                ],
                vec![
                    CellValue::from("y"),
                    CellValue::from(2),
                    CellValue::from(4.0),
                    CellValue::from(0),
                ],
                vec![
                    CellValue::from("z"),
                    CellValue::from(3),
                    CellValue::from(6.5),
                    CellValue::from(1),
                ],
                vec![CellValue::from("w"), CellValue::Null, CellValue::from(1.0), CellValue::from(1)],
            ],
        ))
    }

    #[test]
    fn test_treatment_is_applied() {
        let dataset = sample();
        assert_eq!(dataset.matrix().data_rows().len(), 3);
        let types = dataset
            .column_types()
            .iter()
            .map(|column_type| column_type.variable_type)
            .collect::<Vec<_>>();
        assert_eq!(
            types,
            [
                VariableType::QualitativaNominal,
                VariableType::QuantitativaDiscreta,
                VariableType::QuantitativaDiscreta,
                VariableType::Binaria,
            ]
        );
    }

    #[test]
    fn test_central_trends() {
        let trends = sample().central_trends("B").unwrap();
        assert_eq!(trends.mean, Some(2.0));
        assert_eq!(trends.median, Some(2.0));
        assert_eq!(trends.mode, Some(CellValue::from(1)));
        assert_eq!(trends.mode_count, 1);
    }

    #[test]
    fn test_frequencies_include_every_value() {
        let table = sample().frequencies("A", FrequencyMode::Discrete).unwrap();
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn test_numeric_operations_reject_text() {
        let dataset = sample();
        assert_eq!(
            dataset.quantiles("A"),
            Err(DatasetError::NonNumericColumn {
                name: "A".to_owned()
            })
        );
        assert!(matches!(
            dataset.dispersion("A"),
            Err(DatasetError::NonNumericColumn { .. })
        ));
        assert!(dataset.dispersion("C").is_ok());
    }

    #[test]
    fn test_missing_column() {
        let err = sample().quantiles("Z").unwrap_err();
        assert_eq!(err.to_string(), "column 'Z' not found");
        // The message is already the inner error's, so a report chain must not repeat it.
        assert!(std::error::Error::source(&err).is_none());
        assert!(matches!(
            sample().pearson("B", "Z"),
            Err(DatasetError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_pairwise_operations() {
        let dataset = sample();
        assert!(dataset.pearson("B", "C").unwrap().value > 0.9);
        let line = dataset
            .regression("B", "C", InterceptFormula::LeastSquares)
            .unwrap();
        assert_eq!(line.a, 2.25);
        let err = dataset.pearson("A", "B").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::Validation(ValidationError::NonNumeric { .. })
        ));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new(&Matrix::with_header(["A"], vec![]));
        assert_eq!(
            dataset.quantiles("A"),
            Err(DatasetError::EmptyColumn {
                name: "A".to_owned()
            })
        );
        let err = dataset.normal("A", 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DatasetError::Distribution(DistributionError::EmptyData)
        );
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_distributions() {
        let dataset = sample();
        let binomial = dataset.binomial("D", 1, 3, 0.5, None).unwrap();
        assert!((binomial.probability_of_success - 2.0 / 3.0).abs() < 1e-12);

        let labels = dataset.binomial("A", 1, 3, 0.5, Some("X")).unwrap();
        assert!((labels.probability_of_success - 1.0 / 3.0).abs() < 1e-12);

        let normal = dataset.normal("B", 1.0, 3.0).unwrap();
        assert_eq!(normal.count_in_range, 3);
    }
}
