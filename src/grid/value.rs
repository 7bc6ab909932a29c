//! Typed cell values and the total order used for sorting.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A value extracted from a row by a column accessor.
///
/// The grid never looks inside row records; everything it sorts, filters or
/// displays by default goes through a `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Rank used to order values of different kinds against each other.
    const fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
            Self::Null => 4,
        }
    }

    /// Compare two non-null values.
    ///
    /// Numbers compare exactly across `Int` and `Float`, with `-0.0 == 0.0`
    /// and NaN below or above every number depending on its sign. Text
    /// compares by Unicode scalar value (case-sensitive), dates
    /// chronologically. Nulls are handled by the sort engine so that they stay
    /// last in either direction; here they compare greater than everything
    /// else.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Int(a), Self::Float(b)) => compare_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => compare_int_float(*b, *a).reverse(),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

/// 2^63, the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float, without rounding the integer.
#[allow(clippy::cast_possible_truncation)]
fn compare_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= I64_LIMIT {
        return Ordering::Less;
    }
    if float < -I64_LIMIT {
        return Ordering::Greater;
    }
    // In range, so the truncated float is exactly representable as i64.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64
            .partial_cmp(&(float - whole))
            .unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "—"),
            Self::Bool(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:.2}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<V: Into<Self>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(Value::Int(9).compare(&Value::Int(10)), Ordering::Less);
        assert_eq!(Value::Int(2).compare(&Value::Float(1.5)), Ordering::Greater);
        assert_eq!(Value::Float(2.0).compare(&Value::Int(2)), Ordering::Equal);
    }

    #[test]
    fn test_large_numbers_compare_exactly() {
        let two_53 = 9_007_199_254_740_992_i64;
        assert_eq!(
            Value::Int(two_53 + 1).compare(&Value::Float(9_007_199_254_740_992.0)),
            Ordering::Greater
        );
        assert_eq!(
            Value::Float(9_007_199_254_740_992.0).compare(&Value::Int(two_53)),
            Ordering::Equal
        );
        assert_eq!(
            Value::Int(i64::MAX).compare(&Value::Float(I64_LIMIT)),
            Ordering::Less
        );
        assert_eq!(
            Value::Int(i64::MIN).compare(&Value::Float(-I64_LIMIT)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_fractions_and_signed_zero() {
        assert_eq!(Value::Int(0).compare(&Value::Float(0.5)), Ordering::Less);
        assert_eq!(Value::Float(0.5).compare(&Value::Int(1)), Ordering::Less);
        assert_eq!(Value::Int(0).compare(&Value::Float(-0.5)), Ordering::Greater);
        assert_eq!(Value::Int(-1).compare(&Value::Float(-0.5)), Ordering::Less);
        assert_eq!(Value::Int(0).compare(&Value::Float(-0.0)), Ordering::Equal);
        assert_eq!(Value::Float(-0.0).compare(&Value::Float(0.0)), Ordering::Equal);
    }

    #[test]
    fn test_nan_sorts_past_every_number() {
        assert_eq!(Value::Int(i64::MAX).compare(&Value::Float(f64::NAN)), Ordering::Less);
        assert_eq!(Value::Float(f64::NAN).compare(&Value::Int(0)), Ordering::Greater);
        assert_eq!(
            Value::Float(f64::INFINITY).compare(&Value::Float(f64::NAN)),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_large_numbers_sort_consistently() {
        let two_53 = 9_007_199_254_740_992_i64;
        let mut values = vec![
            Value::Int(two_53 + 1),
            Value::Float(9_007_199_254_740_992.0),
            Value::Int(two_53 - 1),
            Value::Float(9_007_199_254_740_994.0),
            Value::Int(two_53),
        ];
        values.sort_by(Value::compare);
        for pair in values.windows(2) {
            assert_ne!(pair[0].compare(&pair[1]), Ordering::Greater);
        }
        assert_eq!(values.first(), Some(&Value::Int(two_53 - 1)));
        assert_eq!(values.last(), Some(&Value::Float(9_007_199_254_740_994.0)));
    }

    #[test]
    fn test_text_is_case_sensitive() {
        // Uppercase letters precede lowercase ones in scalar-value order.
        assert_eq!(
            Value::from("Zebra").compare(&Value::from("apple")),
            Ordering::Less
        );
        assert_eq!(
            Value::from("apple").compare(&Value::from("apricot")),
            Ordering::Less
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let early = NaiveDate::from_ymd_opt(2025, 9, 25).unwrap();
        let late = NaiveDate::from_ymd_opt(2025, 9, 28).unwrap();
        assert_eq!(Value::from(early).compare(&Value::from(late)), Ordering::Less);
    }

    #[test]
    fn test_mixed_kinds_use_rank() {
        assert_eq!(Value::Int(1).compare(&Value::from("1")), Ordering::Less);
        assert_eq!(Value::Bool(true).compare(&Value::Int(0)), Ordering::Less);
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<&str>).is_null());
        assert_eq!(Value::from(Some(3_i64)), Value::Int(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "—");
        assert_eq!(Value::Float(12.5).to_string(), "12.50");
        let date = NaiveDate::from_ymd_opt(2025, 9, 28).unwrap();
        assert_eq!(Value::from(date).to_string(), "2025-09-28");
    }
}
