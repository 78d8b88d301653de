use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::request::DATE_FORMAT;

/// A single value extracted from a vendor element.
///
/// Serializes untagged so tables render as plain JSON (`101.5`, `"USD"`, `"2024-01-02"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value.
    String(String),
    /// Floating point value (prices, ratios).
    Float(f64),
    /// Integer value (volumes, counts).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time without zone, as the vendor reports it.
    Datetime(NaiveDateTime),
}

impl Scalar {
    /// Numeric view of the value; integers are widened.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Borrow the text when the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the value as a calendar date.
    ///
    /// Datetimes are truncated; strings are accepted as `YYYY-MM-DD` or `YYYYMMDD`.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Datetime(dt) => Some(dt.date()),
            Self::String(s) => parse_date(s),
            _ => None,
        }
    }
}

/// Parse a date in either ISO (`YYYY-MM-DD`) or compact vendor (`YYYYMMDD`) form.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, DATE_FORMAT))
        .ok()
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Datetime(dt) => write!(f, "{dt}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(v: NaiveDateTime) -> Self {
        Self::Datetime(v)
    }
}

/// Value of one requested field for one security in a point-in-time table.
///
/// Array-typed vendor fields (chain or member lists) flatten into `List`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single scalar.
    Scalar(Scalar),
    /// Flattened sub-values of an array field, in record order.
    List(Vec<Scalar>),
}

impl FieldValue {
    /// Borrow the scalar when this is not a list.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Borrow the flattened values when this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::List(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }

    /// Whether this value came from an array-typed field.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<Scalar> for FieldValue {
    fn from(v: Scalar) -> Self {
        Self::Scalar(v)
    }
}

macro_rules! field_value_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    Self::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

field_value_from_scalar!(&str, String, f64, i64, bool, NaiveDate, NaiveDateTime);

impl From<Vec<Scalar>> for FieldValue {
    fn from(v: Vec<Scalar>) -> Self {
        Self::List(v)
    }
}
