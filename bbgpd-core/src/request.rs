use chrono::NaiveDate;
use serde_json::Value;

use crate::names;
use crate::session::VendorRequest;
use crate::types::{BbgError, DateRange, FieldOverride, RequestKind, parse_date};

/// Validated, immutable description of one data request.
///
/// Built once per call and consumed immediately by [`RequestSpec::populate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    kind: RequestKind,
    securities: Vec<String>,
    fields: Vec<String>,
    overrides: Vec<FieldOverride>,
    date_range: Option<DateRange>,
}

impl RequestSpec {
    /// Validate typed inputs into a request.
    ///
    /// Order and duplicates of securities, fields and overrides are preserved.
    ///
    /// # Errors
    /// Returns `InvalidArgumentType` if `securities` or `fields` is empty, if a
    /// historical request has no date range, or if a point-in-time request has one.
    pub fn new<S, F>(
        kind: RequestKind,
        securities: S,
        fields: F,
        overrides: Vec<FieldOverride>,
        date_range: Option<DateRange>,
    ) -> Result<Self, BbgError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let securities: Vec<String> = securities.into_iter().map(Into::into).collect();
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();

        if securities.is_empty() {
            return Err(BbgError::invalid_argument(
                "securities must be a non-empty list of strings",
            ));
        }
        if fields.is_empty() {
            return Err(BbgError::invalid_argument(
                "fields must be a non-empty list of strings",
            ));
        }
        match (kind, date_range) {
            (RequestKind::Historical, None) => {
                return Err(BbgError::invalid_argument(
                    "historical requests need a start and end date",
                ));
            }
            (RequestKind::PointInTime, Some(_)) => {
                return Err(BbgError::invalid_argument(
                    "point-in-time requests take no date range",
                ));
            }
            _ => {}
        }

        Ok(Self {
            kind,
            securities,
            fields,
            overrides,
            date_range,
        })
    }

    /// Point-in-time request for current field values.
    ///
    /// # Errors
    /// See [`RequestSpec::new`].
    pub fn point_in_time<S, F>(
        securities: S,
        fields: F,
        overrides: Vec<FieldOverride>,
    ) -> Result<Self, BbgError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self::new(RequestKind::PointInTime, securities, fields, overrides, None)
    }

    /// Historical request over `[start, end]`. `start > end` is not rejected.
    ///
    /// # Errors
    /// See [`RequestSpec::new`].
    pub fn historical<S, F>(
        securities: S,
        fields: F,
        start: NaiveDate,
        end: NaiveDate,
        overrides: Vec<FieldOverride>,
    ) -> Result<Self, BbgError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self::new(
            RequestKind::Historical,
            securities,
            fields,
            overrides,
            Some(DateRange::new(start, end)),
        )
    }

    /// Validate loosely typed inputs, as received from configuration files or
    /// other dynamic callers.
    ///
    /// - `securities` and `fields` must be arrays of strings.
    /// - `overrides`, when present and not null, must be an array of objects;
    ///   every entry of every object becomes one override, in order. Numbers
    ///   and booleans are sent as their text form.
    /// - date bounds must be strings in `YYYY-MM-DD` or `YYYYMMDD` form.
    ///
    /// # Errors
    /// Returns `InvalidArgumentType` for any shape mismatch, and the errors of
    /// [`RequestSpec::new`].
    pub fn from_values(
        kind: RequestKind,
        securities: &Value,
        fields: &Value,
        overrides: Option<&Value>,
        date_range: Option<(&Value, &Value)>,
    ) -> Result<Self, BbgError> {
        let securities = string_list(names::SECURITIES, securities)?;
        let fields = string_list(names::FIELDS, fields)?;
        let overrides = match overrides {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => override_list(v)?,
        };
        let date_range = match date_range {
            None => None,
            Some((start, end)) => Some(DateRange::new(
                date_value(names::START_DATE, start)?,
                date_value(names::END_DATE, end)?,
            )),
        };
        Self::new(kind, securities, fields, overrides, date_range)
    }

    /// Request kind.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Requested tickers, in input order.
    #[must_use]
    pub fn securities(&self) -> &[String] {
        &self.securities
    }

    /// Requested fields, in input order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Overrides, in input order.
    #[must_use]
    pub fn overrides(&self) -> &[FieldOverride] {
        &self.overrides
    }

    /// Date bounds of a historical request.
    #[must_use]
    pub const fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    /// Write this request into a vendor request object.
    ///
    /// Dates are attached as `YYYYMMDD`. Each appended item is logged at
    /// DEBUG regardless of `Verbosity`; the subscriber's filter decides
    /// whether those lines are kept.
    ///
    /// # Errors
    /// Propagates any error the vendor request raises for an unknown slot.
    pub fn populate(&self, request: &mut dyn VendorRequest) -> Result<(), BbgError> {
        for ticker in &self.securities {
            request.append(names::SECURITIES, ticker)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(ticker = %ticker, "ticker added to request securities");
        }
        for field in &self.fields {
            request.append(names::FIELDS, field)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(field = %field, "field added to request fields");
        }
        for ov in &self.overrides {
            request.append_override(&ov.field_id, &ov.value)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(field_id = %ov.field_id, value = %ov.value, "override added to request");
        }
        if let Some(range) = self.date_range {
            request.set(names::START_DATE, &range.start_str())?;
            request.set(names::END_DATE, &range.end_str())?;
        }
        Ok(())
    }
}

const fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

fn reject(msg: String) -> BbgError {
    #[cfg(feature = "tracing")]
    tracing::error!(reason = %msg, "rejected request argument");
    BbgError::InvalidArgumentType(msg)
}

fn string_list(name: &str, v: &Value) -> Result<Vec<String>, BbgError> {
    let Some(items) = v.as_array() else {
        return Err(reject(format!(
            "{name} must be a list, got a {}: {v}",
            json_type(v)
        )));
    };
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                reject(format!(
                    "{name} must be a list of strings, element {item} is a {}",
                    json_type(item)
                ))
            })
        })
        .collect()
}

fn override_list(v: &Value) -> Result<Vec<FieldOverride>, BbgError> {
    let Some(items) = v.as_array() else {
        return Err(reject(format!(
            "overrides must be a list of mappings, got a {}: {v}",
            json_type(v)
        )));
    };
    let mut out = Vec::new();
    for item in items {
        let Some(map) = item.as_object() else {
            return Err(reject(format!(
                "overrides must be a list of mappings, element {item} is a {}",
                json_type(item)
            )));
        };
        for (key, val) in map {
            let text = match val {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(reject(format!(
                        "override {key} must have a string or number value, got a {}",
                        json_type(other)
                    )));
                }
            };
            out.push(FieldOverride::new(key.clone(), text));
        }
    }
    Ok(out)
}

fn date_value(name: &str, v: &Value) -> Result<NaiveDate, BbgError> {
    v.as_str().and_then(parse_date).ok_or_else(|| {
        reject(format!(
            "{name} must be a date (YYYY-MM-DD or YYYYMMDD), got a {}: {v}",
            json_type(v)
        ))
    })
}
