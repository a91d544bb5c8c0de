// used for timestamps behind instant values
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
// Order travels in configuration payloads
use serde::{Deserialize, Serialize};

// used to print out readable forms of a value
use std::fmt;
use std::str::FromStr;

use crate::error::SortError;

/// A value extracted from a record for comparison purposes.
///
/// The set of variants is closed on purpose: every branch of the value
/// comparator is exhaustive over these, so no comparison can fall outside
/// the rules. Anything a selector extracts is funneled into one of them,
/// with absent data becoming [`SortValue::Null`].
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    /// An absent value. Sorts before every present value in ascending order.
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
    /// A point in time, compared by its epoch milliseconds.
    Instant(DateTime<Utc>),
}

impl SortValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SortValue::Null)
    }

    // fixed rank per variant, used to order mixed-type pairs deterministically
    pub(crate) fn rank(&self) -> u8 {
        match self {
            SortValue::Null => 0,
            SortValue::Boolean(_) => 1,
            SortValue::Number(_) => 2,
            SortValue::Text(_) => 3,
            SortValue::Instant(_) => 4,
        }
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortValue::Null => write!(f, "null"),
            SortValue::Boolean(b) => write!(f, "{}", b),
            SortValue::Number(n) => write!(f, "{}", n),
            SortValue::Text(t) => write!(f, "{}", t),
            SortValue::Instant(i) => write!(f, "{}", i),
        }
    }
}

// ------------- conversions into SortValue --------------
impl From<bool> for SortValue {
    fn from(value: bool) -> SortValue {
        SortValue::Boolean(value)
    }
}
impl From<f64> for SortValue {
    fn from(value: f64) -> SortValue {
        SortValue::Number(value)
    }
}
impl From<f32> for SortValue {
    fn from(value: f32) -> SortValue {
        SortValue::Number(value as f64)
    }
}
impl From<i32> for SortValue {
    fn from(value: i32) -> SortValue {
        SortValue::Number(value as f64)
    }
}
impl From<i64> for SortValue {
    fn from(value: i64) -> SortValue {
        SortValue::Number(value as f64)
    }
}
impl From<u32> for SortValue {
    fn from(value: u32) -> SortValue {
        SortValue::Number(value as f64)
    }
}
impl From<u64> for SortValue {
    fn from(value: u64) -> SortValue {
        SortValue::Number(value as f64)
    }
}
impl From<usize> for SortValue {
    fn from(value: usize) -> SortValue {
        SortValue::Number(value as f64)
    }
}
impl From<&str> for SortValue {
    fn from(value: &str) -> SortValue {
        SortValue::Text(value.to_string())
    }
}
impl From<String> for SortValue {
    fn from(value: String) -> SortValue {
        SortValue::Text(value)
    }
}
impl From<DateTime<Utc>> for SortValue {
    fn from(value: DateTime<Utc>) -> SortValue {
        SortValue::Instant(value)
    }
}
impl From<NaiveDateTime> for SortValue {
    fn from(value: NaiveDateTime) -> SortValue {
        SortValue::Instant(value.and_utc())
    }
}
impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> SortValue {
        SortValue::Instant(value.and_time(NaiveTime::MIN).and_utc())
    }
}
impl<T> From<Option<T>> for SortValue
where
    T: Into<SortValue>,
{
    fn from(value: Option<T>) -> SortValue {
        match value {
            Some(v) => v.into(),
            None => SortValue::Null,
        }
    }
}

/// JSON scalars map onto the closed variants. A non-scalar leaf (array or
/// object) degrades to its serialized text, which at least orders equal
/// documents together. serde_json's default map keeps keys sorted, so the
/// serialization is canonical.
impl From<&serde_json::Value> for SortValue {
    fn from(value: &serde_json::Value) -> SortValue {
        match value {
            serde_json::Value::Null => SortValue::Null,
            serde_json::Value::Bool(b) => SortValue::Boolean(*b),
            serde_json::Value::Number(n) => {
                n.as_f64().map_or(SortValue::Null, SortValue::Number)
            }
            serde_json::Value::String(s) => SortValue::Text(s.clone()),
            other => serde_json::to_string(other).map_or(SortValue::Null, SortValue::Text),
        }
    }
}

/// Sort polarity for a criterion.
///
/// Descending reverses the *complete* comparison result, the null rule
/// included: absent values sort first in ascending order and last in
/// descending order.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl Order {
    /// Apply this polarity to a raw ascending comparison.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Order::Ascending => write!(f, "ascending"),
            Order::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for Order {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            other => Err(SortError::UnknownOrder(other.to_string())),
        }
    }
}
