//! Probability distribution commands

use clap::Args;
use tabstat_stats::binomial::DEFAULT_SUCCESS_PROBABILITY;

use crate::{command::DatasetArg, report, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct BinomialArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Column holding the observations
    column: String,
    /// Number of successes of interest
    #[arg(long)]
    k: u64,
    /// Number of trials
    #[arg(long)]
    n: u64,
    /// Theoretical probability of success
    #[arg(long, default_value_t = DEFAULT_SUCCESS_PROBABILITY)]
    p: f64,
    /// Count values equal to this label (ignoring case) as successes instead of `true`/`1`
    #[arg(long)]
    success_label: Option<String>,
    /// Write a plain-text report instead of JSON
    #[arg(long)]
    report: bool,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct NormalArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    /// Column holding the observations
    column: String,
    /// Lower bound of the range (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    min: f64,
    /// Upper bound of the range (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    max: f64,
    /// Write a plain-text report instead of JSON
    #[arg(long)]
    report: bool,
}

pub(crate) fn run_binomial(arg: &BinomialArg) -> anyhow::Result<()> {
    let model = arg.dataset.load()?.binomial(
        &arg.column,
        arg.k,
        arg.n,
        arg.p,
        arg.success_label.as_deref(),
    )?;

    if arg.report {
        let situation = arg.success_label.as_deref().unwrap_or("success");
        return Output::save_report(arg.dataset.output(), |writer| {
            report::write_binomial(writer, &model, situation)
        });
    }
    Output::save_json(&model, arg.dataset.output())
}

pub(crate) fn run_normal(arg: &NormalArg) -> anyhow::Result<()> {
    let model = arg.dataset.load()?.normal(&arg.column, arg.min, arg.max)?;

    if arg.report {
        return Output::save_report(arg.dataset.output(), |writer| {
            report::write_normal(writer, &model)
        });
    }
    Output::save_json(&model, arg.dataset.output())
}
