//! Two-column commands
//!
//! Invalid column pairs are an expected outcome here, so validation failures
//! are written as `{"success": false, "message": ...}` instead of failing the
//! command. Unknown columns and I/O problems still fail.

use clap::Args;
use serde::Serialize;
use tabstat_stats::{dataset::DatasetError, regression::InterceptFormula};

use crate::{command::DatasetArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct PearsonArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// First column name
    first: String,
    /// Second column name
    second: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct RegressionArg {
    #[clap(flatten)]
    pair: PearsonArg,
    /// Use the ordinary least-squares intercept `(ΣY − a·ΣX) / N`
    #[arg(long)]
    least_squares_intercept: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum PairOutcome<T> {
    Success {
        success: bool,
        #[serde(flatten)]
        result: T,
    },
    Failure {
        success: bool,
        message: String,
    },
}

impl<T> PairOutcome<T> {
    fn from_result(result: Result<T, DatasetError>) -> anyhow::Result<Self> {
        match result {
            Ok(result) => Ok(PairOutcome::Success {
                success: true,
                result,
            }),
            Err(DatasetError::Validation(err)) => {
                tracing::warn!(%err, "column pair rejected");
                Ok(PairOutcome::Failure {
                    success: false,
                    message: err.to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}

pub(crate) fn run_pearson(arg: &PearsonArg) -> anyhow::Result<()> {
    let result = arg.dataset.load()?.pearson(&arg.first, &arg.second);
    Output::save_json(&PairOutcome::from_result(result)?, arg.dataset.output())
}

pub(crate) fn run_regression(arg: &RegressionArg) -> anyhow::Result<()> {
    let PearsonArg {
        dataset,
        first,
        second,
    } = &arg.pair;
    let formula = if arg.least_squares_intercept {
        InterceptFormula::LeastSquares
    } else {
        InterceptFormula::Observed
    };
    let result = dataset.load()?.regression(first, second, formula);
    Output::save_json(&PairOutcome::from_result(result)?, dataset.output())
}
