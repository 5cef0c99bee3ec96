use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tabstat_stats::dataset::Dataset;
use tracing_subscriber::EnvFilter;

use crate::util;

use self::{
    column::{ColumnArg, FrequenciesArg},
    distribution::{BinomialArg, NormalArg},
    generate::GenerateArg,
    inspect::InspectArg,
    pair::{PearsonArg, RegressionArg},
};

mod column;
mod distribution;
mod generate;
mod inspect;
mod pair;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Clean the dataset and report the type of each column
    Inspect(#[clap(flatten)] InspectArg),
    /// Frequency table of a column
    Frequencies(#[clap(flatten)] FrequenciesArg),
    /// Mean, median and mode of a column
    Central(#[clap(flatten)] ColumnArg),
    /// Quartiles and deciles of a numeric column
    Quantiles(#[clap(flatten)] ColumnArg),
    /// Dispersion measures of a numeric column
    Dispersion(#[clap(flatten)] ColumnArg),
    /// Pearson correlation between two columns
    Pearson(#[clap(flatten)] PearsonArg),
    /// Regression line of the second column on the first
    Regression(#[clap(flatten)] RegressionArg),
    /// Binomial distribution model of a binary column
    Binomial(#[clap(flatten)] BinomialArg),
    /// Normal distribution model of a numeric column
    Normal(#[clap(flatten)] NormalArg),
    /// Generate a random sample dataset
    Generate(#[clap(flatten)] GenerateArg),
}

/// Input dataset and output destination shared by the analysis commands.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the dataset JSON file (matrix or array of records)
    #[arg(long, short)]
    input: PathBuf,
    /// Output file path (defaults to stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl DatasetArg {
    pub(crate) fn load(&self) -> anyhow::Result<Dataset> {
        let matrix = util::read_dataset_file(&self.input)?;
        Ok(Dataset::new(&matrix))
    }

    pub(crate) fn output(&self) -> Option<PathBuf> {
        self.output.clone()
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    match args.mode {
        Mode::Inspect(arg) => inspect::run(&arg)?,
        Mode::Frequencies(arg) => column::run_frequencies(&arg)?,
        Mode::Central(arg) => column::run_central(&arg)?,
        Mode::Quantiles(arg) => column::run_quantiles(&arg)?,
        Mode::Dispersion(arg) => column::run_dispersion(&arg)?,
        Mode::Pearson(arg) => pair::run_pearson(&arg)?,
        Mode::Regression(arg) => pair::run_regression(&arg)?,
        Mode::Binomial(arg) => distribution::run_binomial(&arg)?,
        Mode::Normal(arg) => distribution::run_normal(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
