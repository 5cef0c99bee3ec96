use clap::Args;
use serde::Serialize;
use tabstat_table::ColumnType;

use crate::{command::DatasetArg, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct InspectArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Include the cleaned matrix in the output
    #[arg(long)]
    with_data: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectSummary<'a> {
    rows: usize,
    column_types: &'a [ColumnType],
}

pub(crate) fn run(arg: &InspectArg) -> anyhow::Result<()> {
    let dataset = arg.dataset.load()?;
    if arg.with_data {
        return Output::save_json(dataset.treated(), arg.dataset.output());
    }

    let summary = InspectSummary {
        rows: dataset.matrix().data_rows().len(),
        column_types: dataset.column_types(),
    };
    Output::save_json(&summary, arg.dataset.output())
}
