//! Pieces of a data request that are independent of the vendor request object.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Textual form of dates attached to outgoing requests (`YYYYMMDD`).
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Which kind of data a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    /// Current field values, one row per security.
    PointInTime,
    /// Field values over a date range, one date-indexed table per security.
    Historical,
}

impl RequestKind {
    /// Vendor operation name used to create the request on the service.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::PointInTime => "ReferenceDataRequest",
            Self::Historical => "HistoricalDataRequest",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation())
    }
}

/// A single override: changes how the vendor computes `field_id` for this request.
///
/// Requests carry an ordered list of these; duplicate keys are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOverride {
    /// Override field identifier, e.g. `EQY_FUND_CRNCY`.
    pub field_id: String,
    /// Override value, always sent as text.
    pub value: String,
}

impl FieldOverride {
    /// Build an override from any string-like key and value.
    pub fn new(field_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for FieldOverride {
    fn from((k, v): (K, V)) -> Self {
        Self::new(k, v)
    }
}

/// Inclusive date bounds of a historical request.
///
/// Bounds are not ordered-checked: `start > end` is passed to the vendor as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date requested.
    pub start: NaiveDate,
    /// Last date requested.
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range from two dates.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Start date in `YYYYMMDD` form.
    #[must_use]
    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// End date in `YYYYMMDD` form.
    #[must_use]
    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Whether `date` lies within the bounds (always false for inverted ranges).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
