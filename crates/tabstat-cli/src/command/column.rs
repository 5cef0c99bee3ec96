//! Single-column statistics commands

use clap::Args;
use tabstat_stats::frequency::FrequencyMode;

use crate::{command::DatasetArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ColumnArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Column name as it appears in the header row
    column: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct FrequenciesArg {
    #[clap(flatten)]
    column: ColumnArg,
    /// Group numeric values into equal-width class intervals
    #[arg(long)]
    intervals: bool,
}

pub(crate) fn run_frequencies(arg: &FrequenciesArg) -> anyhow::Result<()> {
    let ColumnArg { dataset, column } = &arg.column;
    let mode = if arg.intervals {
        FrequencyMode::ClassIntervals
    } else {
        FrequencyMode::Discrete
    };
    let table = dataset.load()?.frequencies(column, mode)?;
    Output::save_json(&table, dataset.output())
}

pub(crate) fn run_central(arg: &ColumnArg) -> anyhow::Result<()> {
    let trends = arg.dataset.load()?.central_trends(&arg.column)?;
    Output::save_json(&trends, arg.dataset.output())
}

pub(crate) fn run_quantiles(arg: &ColumnArg) -> anyhow::Result<()> {
    let separatrices = arg.dataset.load()?.quantiles(&arg.column)?;
    Output::save_json(&separatrices, arg.dataset.output())
}

pub(crate) fn run_dispersion(arg: &ColumnArg) -> anyhow::Result<()> {
    let summary = arg.dataset.load()?.dispersion(&arg.column)?;
    Output::save_json(&summary, arg.dataset.output())
}
