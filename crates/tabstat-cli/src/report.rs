//! Plain-text reports for the distribution models

use std::io::{self, Write};

use tabstat_stats::{binomial::BinomialDistribution, normal::NormalDistribution};

/// Writes an observed versus theoretical summary of a binomial model.
///
/// `situation` names what a success is, e.g. `"defect"`.
pub fn write_binomial<W>(
    writer: &mut W,
    model: &BinomialDistribution,
    situation: &str,
) -> io::Result<()>
where
    W: Write,
{
    let k = model.k;
    writeln!(
        writer,
        "=== BINOMIAL DISTRIBUTION: {} ===",
        situation.to_uppercase()
    )?;
    writeln!(writer)?;
    writeln!(writer, "Observed data")?;
    writeln!(writer, "  Total trials: {}", model.total_trials)?;
    writeln!(
        writer,
        "  Empirical probability ({situation}): {:.2}%",
        model.probability_of_success * 100.0
    )?;
    writeln!(
        writer,
        "  Empirical probability (failure): {:.2}%",
        model.probability_of_failure * 100.0
    )?;
    writeln!(writer)?;
    writeln!(writer, "Scenario: {k} {situation}(s) in {} trials", model.n)?;
    writeln!(
        writer,
        "  P(X = {k}): {:.4}%",
        model.probability_of_exactly_k * 100.0
    )?;
    writeln!(
        writer,
        "  P(X >= {k}): {:.4}%",
        model.probability_of_at_least_k * 100.0
    )?;
    writeln!(
        writer,
        "  P(X <= {k}): {:.4}%",
        model.probability_of_at_most_k * 100.0
    )?;
    writeln!(writer)?;
    writeln!(writer, "Distribution")?;
    writeln!(writer, "  Probability of success (p): {:.1}%", model.p * 100.0)?;
    writeln!(
        writer,
        "  Expected number of {situation}(s): {:.2}",
        model.expected_number_of_success
    )?;
    writeln!(writer, "  Variance: {:.4}", model.variance)?;
    writeln!(writer, "  Standard deviation: {:.4}", model.standard_deviation())?;
    writeln!(writer)?;
    writeln!(writer, "Comparison")?;
    writeln!(
        writer,
        "  Observed: {:.2}%",
        model.probability_of_success * 100.0
    )?;
    writeln!(writer, "  Theoretical: {:.1}%", model.p * 100.0)?;
    writeln!(
        writer,
        "  Difference: {:.2} percentage points",
        (model.probability_of_success - model.p).abs() * 100.0
    )?;
    Ok(())
}

/// Writes an observed versus theoretical summary of a normal model's range.
pub fn write_normal<W>(writer: &mut W, model: &NormalDistribution) -> io::Result<()>
where
    W: Write,
{
    let (min, max) = (model.min_range, model.max_range);
    writeln!(writer, "=== NORMAL DISTRIBUTION ===")?;
    writeln!(writer)?;
    writeln!(writer, "Basic statistics")?;
    writeln!(writer, "  Mean: {:.2}", model.mean)?;
    writeln!(writer, "  Standard deviation: {:.2}", model.standard_deviation)?;
    writeln!(writer, "  Observations: {}", model.total_count)?;
    writeln!(writer)?;
    writeln!(writer, "Range {min} to {max}")?;
    writeln!(writer, "  Observations in range: {}", model.count_in_range)?;
    writeln!(writer, "  Observed share: {:.2}%", model.percentage_in_range)?;
    writeln!(writer)?;
    writeln!(writer, "Theoretical (normal)")?;
    writeln!(writer, "  Z-score for {min}: {:.3}", model.z_score_min)?;
    writeln!(writer, "  Z-score for {max}: {:.3}", model.z_score_max)?;
    writeln!(writer, "  Probability: {:.2}%", model.probability_in_range)?;
    writeln!(writer)?;
    writeln!(writer, "Comparison")?;
    writeln!(writer, "  Observed: {:.2}%", model.percentage_in_range)?;
    writeln!(writer, "  Expected: {:.2}%", model.probability_in_range)?;
    writeln!(writer, "  Difference: {:.2}%", model.difference())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_report() {
        let model = BinomialDistribution::from_outcomes(&[true, false, true, false], 3, 10, 0.5)
            .unwrap();
        let mut buf = Vec::new();
        write_binomial(&mut buf, &model, "boy").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("=== BINOMIAL DISTRIBUTION: BOY ===\n"));
        assert!(text.contains("  Total trials: 4\n"));
        assert!(text.contains("  P(X = 3): 11.7188%\n"));
        assert!(text.contains("  Expected number of boy(s): 5.00\n"));
        assert!(text.ends_with("  Difference: 0.00 percentage points\n"));
    }

    #[test]
    fn test_normal_report() {
        let model = NormalDistribution::new(&[400.0, 500.0], 400.0, 500.0).unwrap();
        let mut buf = Vec::new();
        write_normal(&mut buf, &model).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("  Mean: 450.00\n"));
        assert!(text.contains("Range 400 to 500\n"));
        assert!(text.contains("  Z-score for 400: -1.000\n"));
        assert!(text.contains("  Probability: 68.27%\n"));
        assert!(text.ends_with("  Difference: 31.73%\n"));
    }
}
