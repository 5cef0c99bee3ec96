//! Binomial distribution model
//!
//! Combines an empirical success rate, taken from observed binary outcomes,
//! with theoretical probabilities `P(X = k)`, `P(X ≥ k)` and `P(X ≤ k)` for
//! `X ~ B(n, p)`.

use serde::Serialize;
use tabstat_table::CellValue;

use crate::error::DistributionError;

/// Theoretical success probability used when none is given.
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.5;

/// Empirical and theoretical binomial probabilities.
///
/// # Examples
///
/// ```
/// use tabstat_stats::binomial::BinomialDistribution;
///
/// let outcomes = [true, false, true, true];
/// let model = BinomialDistribution::from_outcomes(&outcomes, 3, 10, 0.5).unwrap();
/// assert_eq!(model.probability_of_success, 0.75);
/// assert!((model.probability_of_exactly_k - 0.117_187_5).abs() < 1e-12);
/// assert_eq!(model.expected_number_of_success, 5.0);
/// assert_eq!(model.variance, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinomialDistribution {
    /// Share of successes among the observations.
    pub probability_of_success: f64,
    /// Share of failures among the observations.
    pub probability_of_failure: f64,
    pub probability_of_exactly_k: f64,
    pub probability_of_at_least_k: f64,
    pub probability_of_at_most_k: f64,
    /// `n·p`
    pub expected_number_of_success: f64,
    /// `n·p·(1 − p)`
    pub variance: f64,
    /// Number of observations.
    pub total_trials: usize,
    pub k: u64,
    pub n: u64,
    pub p: f64,
}

impl BinomialDistribution {
    /// Builds the model from observed cells.
    ///
    /// `Bool(true)` and the number `1` count as successes; every other value
    /// is a failure.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError`] if `values` is empty, `k > n`, or `p`
    /// lies outside `[0, 1]`.
    pub fn new(values: &[CellValue], k: u64, n: u64, p: f64) -> Result<Self, DistributionError> {
        let outcomes = values.iter().map(is_success).collect::<Vec<_>>();
        Self::from_outcomes(&outcomes, k, n, p)
    }

    /// Builds the model from categorical observations.
    ///
    /// A value is a success when its text equals `success_label` ignoring
    /// case, so `"m"` and `"M"` both match the label `"M"`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_stats::binomial::BinomialDistribution;
    /// use tabstat_table::CellValue;
    ///
    /// let births = ["M", "F", "m", "F"].map(CellValue::from);
    /// let model = BinomialDistribution::from_labels(&births, "M", 3, 10, 0.5).unwrap();
    /// assert_eq!(model.probability_of_success, 0.5);
    /// ```
    pub fn from_labels(
        values: &[CellValue],
        success_label: &str,
        k: u64,
        n: u64,
        p: f64,
    ) -> Result<Self, DistributionError> {
        let label = success_label.to_lowercase();
        let outcomes = values
            .iter()
            .map(|value| value.to_string().to_lowercase() == label)
            .collect::<Vec<_>>();
        Self::from_outcomes(&outcomes, k, n, p)
    }

    /// Builds the model from success/failure outcomes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    #[expect(clippy::cast_precision_loss)]
    pub fn from_outcomes(
        outcomes: &[bool],
        k: u64,
        n: u64,
        p: f64,
    ) -> Result<Self, DistributionError> {
        if outcomes.is_empty() {
            return Err(DistributionError::EmptyData);
        }
        if k > n {
            return Err(DistributionError::SuccessesExceedTrials { k, n });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::ProbabilityOutOfRange { p });
        }

        let successes = outcomes.iter().filter(|&&outcome| outcome).count();
        let probability_of_success = successes as f64 / outcomes.len() as f64;

        let mut probability_of_exactly_k = 0.0;
        let mut probability_of_at_least_k = 0.0;
        let mut probability_of_at_most_k = 0.0;
        for (i, mass) in probability_masses(n, p) {
            if i == k {
                probability_of_exactly_k = mass;
            }
            if i >= k {
                probability_of_at_least_k += mass;
            }
            if i <= k {
                probability_of_at_most_k += mass;
            }
        }

        let trials = n as f64;
        tracing::debug!(successes, total = outcomes.len(), k, n, p, "computed binomial model");

        Ok(Self {
            probability_of_success,
            probability_of_failure: 1.0 - probability_of_success,
            probability_of_exactly_k,
            probability_of_at_least_k,
            probability_of_at_most_k,
            expected_number_of_success: trials * p,
            variance: trials * p * (1.0 - p),
            total_trials: outcomes.len(),
            k,
            n,
            p,
        })
    }

    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Returns `true` for `Bool(true)` and the number `1`.
#[must_use]
pub fn is_success(value: &CellValue) -> bool {
    match value {
        CellValue::Bool(flag) => *flag,
        CellValue::Number(number) => *number == 1.0,
        CellValue::Null | CellValue::Text(_) => false,
    }
}

/// `C(n, k)`, computed one factor at a time to keep intermediate values small.
///
/// The result is `inf` once `C(n, k)` itself exceeds the `f64` range (around
/// `n = 1030` for `k = n / 2`). Use [`ln_binomial_coefficient`] for large `n`.
///
/// # Examples
///
/// ```
/// use tabstat_stats::binomial::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(10, 3), 120.0);
/// assert_eq!(binomial_coefficient(5, 0), 1.0);
/// assert_eq!(binomial_coefficient(3, 5), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |result, i| result * (n - k + i) as f64 / i as f64)
}

/// `ln C(n, k)`, finite for every `k <= n` and `-inf` otherwise.
///
/// # Examples
///
/// ```
/// use tabstat_stats::binomial::ln_binomial_coefficient;
///
/// assert!((ln_binomial_coefficient(10, 3) - 120f64.ln()).abs() < 1e-12);
/// assert!(ln_binomial_coefficient(5000, 2500).is_finite());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (1..=k).map(|i| ((n - k + i) as f64 / i as f64).ln()).sum()
}

/// `P(X = k) = C(n, k)·pᵏ·(1 − p)ⁿ⁻ᵏ`, evaluated in log space so that large
/// `n` underflows towards 0 instead of overflowing.
#[must_use]
pub fn probability_mass(n: u64, k: u64, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    mass(ln_binomial_coefficient(n, k), n, k, p)
}

/// Yields `(i, P(X = i))` for `i` in `0..=n` in a single pass.
#[expect(clippy::cast_precision_loss)]
fn probability_masses(n: u64, p: f64) -> impl Iterator<Item = (u64, f64)> {
    let mut ln_coefficient = 0.0;
    (0..=n).map(move |i| {
        if i > 0 {
            ln_coefficient += ((n - i + 1) as f64 / i as f64).ln();
        }
        (i, mass(ln_coefficient, n, i, p))
    })
}

#[expect(clippy::cast_precision_loss)]
fn mass(ln_coefficient: f64, n: u64, k: u64, p: f64) -> f64 {
    // `0 · ln 0` would be NaN, so the degenerate distributions are spelled out.
    if p == 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    (ln_coefficient + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln()).exp()
}
