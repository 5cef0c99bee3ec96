//! Random sample datasets
//!
//! Produces single-column matrices that can be fed back into the analysis
//! commands, e.g. Bernoulli outcomes for `binomial` or normally distributed
//! measurements for `normal`.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use rand::{Rng as _, SeedableRng as _};
use rand_distr::{Bernoulli, Distribution, Normal};
use rand_pcg::Pcg32;
use tabstat_table::{CellValue, Matrix};

use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArg {
    #[command(subcommand)]
    sample: SampleKind,
    /// Header of the generated column
    #[arg(long, default_value = "value", global = true)]
    column: String,
    /// Number of values to generate
    #[arg(long, default_value_t = 100, global = true)]
    count: usize,
    /// Seed for reproducible output (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Output file path (defaults to stdout)
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
enum SampleKind {
    /// `true`/`false` outcomes with a fixed success probability
    Bernoulli {
        /// Probability of `true`
        #[arg(long, default_value_t = 0.5)]
        probability: f64,
    },
    /// Normally distributed non-negative measurements
    Normal {
        #[arg(long, default_value_t = 450.0)]
        mean: f64,
        #[arg(long, default_value_t = 50.0)]
        std_dev: f64,
    },
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, count = arg.count, "generating sample");
    let mut rng = Pcg32::seed_from_u64(seed);

    let values = match arg.sample {
        SampleKind::Bernoulli { probability } => {
            let dist = Bernoulli::new(probability)
                .map_err(|e| anyhow::anyhow!("Invalid probability {probability}: {e}"))?;
            sample(&mut rng, &dist, arg.count, CellValue::Bool)
        }
        SampleKind::Normal { mean, std_dev } => {
            let dist = Normal::new(mean, std_dev)
                .map_err(|e| anyhow::anyhow!("Invalid normal parameters: {e}"))?;
            // Measurements such as weights cannot be negative.
            sample(&mut rng, &dist, arg.count, |value: f64| {
                CellValue::Number(value.max(0.0))
            })
        }
    };

    let matrix = Matrix::with_header([arg.column.as_str()], values);
    Output::save_json(&matrix, arg.output.clone())
}

fn sample<D, T, F>(rng: &mut Pcg32, dist: &D, count: usize, to_cell: F) -> Vec<Vec<CellValue>>
where
    D: Distribution<T>,
    F: Fn(T) -> CellValue,
{
    dist.sample_iter(rng)
        .take(count)
        .map(|value| vec![to_cell(value)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_samples_are_reproducible() {
        let dist = Normal::new(10.0, 2.0).unwrap();
        let first = sample(&mut Pcg32::seed_from_u64(7), &dist, 5, CellValue::Number);
        let second = sample(&mut Pcg32::seed_from_u64(7), &dist, 5, CellValue::Number);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_bernoulli_extremes() {
        let mut rng = Pcg32::seed_from_u64(1);
        let always = sample(&mut rng, &Bernoulli::new(1.0).unwrap(), 10, CellValue::Bool);
        assert!(always.iter().all(|row| row[0] == CellValue::Bool(true)));
        let never = sample(&mut rng, &Bernoulli::new(0.0).unwrap(), 10, CellValue::Bool);
        assert!(never.iter().all(|row| row[0] == CellValue::Bool(false)));
    }
}
