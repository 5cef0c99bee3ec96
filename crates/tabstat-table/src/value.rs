//! Scalar cell values
//!
//! A dataset cell is one of four shapes: missing, boolean, number or text.
//! Upstream tooling (spreadsheet exporters, JSON APIs) freely mixes these in a
//! single column, so every consumer works with [`CellValue`] and asks for a
//! numeric view only when it needs one.
//!
//! # Numeric coercion
//!
//! [`CellValue::to_number`] uses the loose rules spreadsheet users expect:
//!
//! | cell                  | number            |
//! |-----------------------|-------------------|
//! | `Number(x)`           | `x`               |
//! | `Bool(true/false)`    | `1` / `0`         |
//! | `Null`                | `0`               |
//! | `Text("")`, `Text(" ")` | `0`             |
//! | `Text(" 12.5 ")`      | `12.5`            |
//! | `Text("Infinity")`    | `+inf`            |
//! | `Text("abc")`         | not a number      |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of a tabular dataset.
///
/// Serialized as the matching JSON scalar (`null`, boolean, number, string).
/// Whole numbers that a JSON integer represents exactly are written without a
/// fractional part, so `1` stays `1` rather than becoming `1.0`.
///
/// # Examples
///
/// ```
/// use tabstat_table::CellValue;
///
/// let cells: Vec<CellValue> = serde_json::from_str(r#"[null, true, 4.5, "x"]"#).unwrap();
/// assert_eq!(cells[0], CellValue::Null);
/// assert_eq!(cells[1], CellValue::Bool(true));
/// assert_eq!(cells[2], CellValue::Number(4.5));
/// assert_eq!(cells[3], CellValue::from("x"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, derive_more::IsVariant)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value. Integers and decimals share one representation.
    Number(f64),
    /// Free text.
    Text(String),
}

/// Error returned when a JSON value is not a scalar.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected a scalar cell value, found {kind}")]
pub struct NonScalarValue {
    kind: &'static str,
}

impl CellValue {
    /// Returns `true` if the cell counts as missing data.
    ///
    /// Only `Null` and the empty string are missing; whitespace-only text is
    /// kept as a value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(text) => text.is_empty(),
            CellValue::Bool(_) | CellValue::Number(_) => false,
        }
    }

    /// Returns the number stored in a `Number` cell, without coercion.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns `true` if the cell is a finite number without a fractional part.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.as_f64()
            .is_some_and(|value| value.is_finite() && value.fract() == 0.0)
    }

    /// Coerces the cell to a number.
    ///
    /// Returns `None` when the cell has no numeric reading (e.g. `"abc"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tabstat_table::CellValue;
    ///
    /// assert_eq!(CellValue::from(" 12.5 ").to_number(), Some(12.5));
    /// assert_eq!(CellValue::Bool(true).to_number(), Some(1.0));
    /// assert_eq!(CellValue::Null.to_number(), Some(0.0));
    /// assert_eq!(CellValue::from("abc").to_number(), None);
    /// ```
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::Null => Some(0.0),
            CellValue::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            CellValue::Number(value) => (!value.is_nan()).then_some(*value),
            CellValue::Text(text) => parse_loose_number(text),
        }
    }

    /// Converts the cell into a JSON value.
    ///
    /// Whole numbers become JSON integers. Non-finite numbers have no JSON
    /// representation and become `null`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Bool(value) => serde_json::Value::Bool(*value),
            CellValue::Number(value) => match exact_integer(*value) {
                Some(integer) => serde_json::Value::Number(integer.into()),
                None => serde_json::Number::from_f64(*value)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number),
            },
            CellValue::Text(text) => serde_json::Value::String(text.clone()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Bool(value) => serializer.serialize_bool(*value),
            CellValue::Number(value) => match exact_integer(*value) {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(*value),
            },
            CellValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Largest magnitude below which every whole `f64` is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns the value as an `i64` if it is whole and within the exact range.
#[expect(clippy::cast_possible_truncation)]
fn exact_integer(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER)
        .then(|| value as i64)
}

fn parse_loose_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    match trimmed {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // `str::parse` also accepts "inf" and "NaN", which are not numbers here.
    let plain_decimal = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !plain_decimal {
        return None;
    }
    trimmed.parse().ok()
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("null"),
            CellValue::Bool(value) => write!(f, "{value}"),
            // Avoid printing "-0"
            CellValue::Number(value) if *value == 0.0 => f.write_str("0"),
            CellValue::Number(value) => write!(f, "{value}"),
            CellValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for CellValue {
    type Error = NonScalarValue;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(CellValue::Null),
            serde_json::Value::Bool(value) => Ok(CellValue::Bool(value)),
            serde_json::Value::Number(number) => {
                Ok(number.as_f64().map_or(CellValue::Null, CellValue::Number))
            }
            serde_json::Value::String(text) => Ok(CellValue::Text(text)),
            serde_json::Value::Array(_) => Err(NonScalarValue { kind: "array" }),
            serde_json::Value::Object(_) => Err(NonScalarValue { kind: "object" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells() {
        assert!(CellValue::Null.is_missing());
        assert!(CellValue::from("").is_missing());
        assert!(!CellValue::from(" ").is_missing());
        assert!(!CellValue::Number(0.0).is_missing());
        assert!(!CellValue::Bool(false).is_missing());
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(CellValue::from("").to_number(), Some(0.0));
        assert_eq!(CellValue::from("  ").to_number(), Some(0.0));
        assert_eq!(CellValue::from("1e3").to_number(), Some(1000.0));
        assert_eq!(CellValue::from("-2.5").to_number(), Some(-2.5));
        assert_eq!(CellValue::from("-Infinity").to_number(), Some(f64::NEG_INFINITY));
        assert_eq!(CellValue::from("inf").to_number(), None);
        assert_eq!(CellValue::from("NaN").to_number(), None);
        assert_eq!(CellValue::from("12abc").to_number(), None);
        assert_eq!(CellValue::from("e").to_number(), None);
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(CellValue::Number(3.0).to_number(), Some(3.0));
        assert_eq!(CellValue::Number(f64::NAN).to_number(), None);
        assert_eq!(CellValue::Bool(false).to_number(), Some(0.0));
    }

    #[test]
    fn test_integer_detection() {
        assert!(CellValue::Number(4.0).is_integer());
        assert!(CellValue::Number(-0.0).is_integer());
        assert!(!CellValue::Number(4.5).is_integer());
        assert!(!CellValue::Number(f64::INFINITY).is_integer());
        assert!(!CellValue::from("4").is_integer());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(1.0).to_string(), "1");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Number(-0.0).to_string(), "0");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::Null.to_string(), "null");
        assert_eq!(CellValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let cells = vec![
            CellValue::Null,
            CellValue::Bool(false),
            CellValue::Number(2.0),
            CellValue::from("two"),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,false,2,"two"]"#);
        let parsed: Vec<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cells);
    }

    #[test]
    fn test_whole_numbers_serialize_as_integers() {
        let cells = vec![
            CellValue::Number(1.0),
            CellValue::Number(-3.0),
            CellValue::Number(-0.0),
            CellValue::Number(2.5),
            CellValue::Number(1e300),
            CellValue::Number(f64::INFINITY),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, "[1,-3,0,2.5,1e300,null]");

        let values: Vec<_> = cells.iter().map(CellValue::to_json).collect();
        assert_eq!(values[0], serde_json::json!(1));
        assert_eq!(values[1], serde_json::json!(-3));
        assert_eq!(values[2], serde_json::json!(0));
        assert_eq!(values[3], serde_json::json!(2.5));
        assert_eq!(values[4], serde_json::json!(1e300));
        assert_eq!(values[5], serde_json::Value::Null);
    }

    #[test]
    fn test_json_integers_survive_a_roundtrip() {
        let original = serde_json::json!([1, -7, 0.25, "x", true, null]);
        let cells: Vec<CellValue> = serde_json::from_value(original.clone()).unwrap();
        let back: Vec<_> = cells.iter().map(CellValue::to_json).collect();
        assert_eq!(serde_json::Value::Array(back), original);
    }

    #[test]
    fn test_try_from_json_rejects_containers() {
        assert!(CellValue::try_from(serde_json::json!([1, 2])).is_err());
        assert!(CellValue::try_from(serde_json::json!({"a": 1})).is_err());
        assert_eq!(
            CellValue::try_from(serde_json::json!(7)).unwrap(),
            CellValue::Number(7.0)
        );
    }
}
