//! Quartiles and deciles
//!
//! Separatrices are read straight from the sorted values by index
//! (`sorted[floor(N * f)]`), without interpolation. The middle separatrix is
//! the median computed by [`median_by_average_of_middle_pair`], so `Q2` and
//! `D5` always agree.
//!
//! For interpolated quartiles see
//! [`DispersionSummary`](crate::dispersion::DispersionSummary).

use serde::Serialize;

/// Kind of a separatrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum QuantileKind {
    #[display("quartile")]
    Quartile,
    #[display("decile")]
    Decile,
}

/// One named separatrix value, such as `Q1` or `D7`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantile {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: QuantileKind,
    pub value: f64,
}

const QUARTILES: [(&str, f64); 2] = [("Q1", 0.25), ("Q3", 0.75)];

const DECILES: [(&str, f64); 9] = [
    ("D1", 0.1),
    ("D2", 0.2),
    ("D3", 0.3),
    ("D4", 0.4),
    ("D5", 0.5),
    ("D6", 0.6),
    ("D7", 0.7),
    ("D8", 0.8),
    ("D9", 0.9),
];

/// Quartiles `Q1..Q3` followed by deciles `D1..D9`.
///
/// # Examples
///
/// ```
/// use tabstat_stats::quantiles::Separatrices;
///
/// let values = [10.0, 1.0, 9.0, 2.0, 8.0, 3.0, 7.0, 4.0, 6.0, 5.0];
/// let separatrices = Separatrices::new(&values).unwrap();
///
/// assert_eq!(separatrices.get("Q1"), Some(3.0));
/// assert_eq!(separatrices.get("Q2"), Some(5.5));
/// assert_eq!(separatrices.get("D5"), Some(5.5));
/// assert_eq!(separatrices.get("D9"), Some(10.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Separatrices {
    values: Vec<Quantile>,
}

impl Separatrices {
    /// Computes separatrices from unsorted values.
    ///
    /// Returns `None` if `values` is empty or contains NaN.
    #[must_use]
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.iter().any(|value| value.is_nan()) {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted)
    }

    /// Computes separatrices from values sorted in ascending order.
    ///
    /// Returns `None` if `sorted_values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let median = median_by_average_of_middle_pair(sorted_values)?;
        let quartile = |name, value| Quantile {
            name,
            kind: QuantileKind::Quartile,
            value,
        };

        let mut values = Vec::with_capacity(QUARTILES.len() + 1 + DECILES.len());
        values.push(quartile("Q1", value_at(sorted_values, QUARTILES[0].1)));
        values.push(quartile("Q2", median));
        values.push(quartile("Q3", value_at(sorted_values, QUARTILES[1].1)));
        values.extend(DECILES.iter().map(|&(name, fraction)| Quantile {
            name,
            kind: QuantileKind::Decile,
            value: if name == "D5" {
                median
            } else {
                value_at(sorted_values, fraction)
            },
        }));

        Some(Self { values })
    }

    /// Value of the separatrix called `name` (`"Q1"`..`"Q3"`, `"D1"`..`"D9"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|quantile| quantile.name == name)
            .map(|quantile| quantile.value)
    }

    /// The median shared by `Q2` and `D5`.
    #[must_use]
    pub fn median(&self) -> f64 {
        self.values[1].value
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quantile> + '_ {
        self.values.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Quantile] {
        &self.values
    }
}

/// Median that averages the two middle elements when the count is even.
///
/// Returns `None` if `sorted_values` is empty. Compare
/// [`median_by_middle_index`](crate::central::median_by_middle_index).
///
/// # Examples
///
/// ```
/// use tabstat_stats::quantiles::median_by_average_of_middle_pair;
///
/// assert_eq!(median_by_average_of_middle_pair(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(median_by_average_of_middle_pair(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(median_by_average_of_middle_pair(&[]), None);
/// ```
#[must_use]
pub fn median_by_average_of_middle_pair(sorted_values: &[f64]) -> Option<f64> {
    let len = sorted_values.len();
    if len == 0 {
        return None;
    }
    let middle = len / 2;
    if len % 2 == 0 {
        Some(f64::midpoint(sorted_values[middle - 1], sorted_values[middle]))
    } else {
        Some(sorted_values[middle])
    }
}

/// Element at index `floor(N * fraction)`, clamped to the last element.
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
fn value_at(sorted_values: &[f64], fraction: f64) -> f64 {
    let index = (sorted_values.len() as f64 * fraction).floor() as usize;
    sorted_values[index.min(sorted_values.len() - 1)]
}
