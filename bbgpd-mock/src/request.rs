use std::any::Any;
use std::collections::BTreeMap;

use bbgpd_core::names;
use bbgpd_core::{BbgError, FieldOverride, RequestKind, Service, VendorRequest, parse_date};
use chrono::NaiveDate;

/// Request object recorded by the mock session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    operation: String,
    securities: Vec<String>,
    fields: Vec<String>,
    overrides: Vec<FieldOverride>,
    values: BTreeMap<String, String>,
}

impl MockRequest {
    fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            securities: Vec::new(),
            fields: Vec::new(),
            overrides: Vec::new(),
            values: BTreeMap::new(),
        }
    }

    /// Tickers appended under `securities`.
    #[must_use]
    pub fn securities(&self) -> &[String] {
        &self.securities
    }

    /// Fields appended under `fields`.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Overrides appended, in order.
    #[must_use]
    pub fn overrides(&self) -> &[FieldOverride] {
        &self.overrides
    }

    /// Scalar field set on the request, as sent.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether this is a historical request.
    #[must_use]
    pub fn is_historical(&self) -> bool {
        self.operation == RequestKind::Historical.operation()
    }

    /// Parsed `startDate`/`endDate` of a historical request.
    #[must_use]
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.value(names::START_DATE).and_then(parse_date)?;
        let end = self.value(names::END_DATE).and_then(parse_date)?;
        Some((start, end))
    }
}

impl VendorRequest for MockRequest {
    fn operation(&self) -> &str {
        &self.operation
    }

    fn append(&mut self, slot: &str, value: &str) -> Result<(), BbgError> {
        match slot {
            names::SECURITIES => self.securities.push(value.to_string()),
            names::FIELDS => self.fields.push(value.to_string()),
            other => {
                return Err(BbgError::vendor(
                    "NOT_FOUND",
                    format!("{} has no repeated slot {other}", self.operation),
                ));
            }
        }
        Ok(())
    }

    fn append_override(&mut self, field_id: &str, value: &str) -> Result<(), BbgError> {
        self.overrides.push(FieldOverride::new(field_id, value));
        Ok(())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), BbgError> {
        let allowed = self.is_historical() && matches!(name, names::START_DATE | names::END_DATE);
        if !allowed {
            return Err(BbgError::vendor(
                "NOT_FOUND",
                format!("{} has no field {name}", self.operation),
            ));
        }
        self.values.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Service handle creating [`MockRequest`]s.
#[derive(Debug, Clone)]
pub struct MockService {
    name: String,
}

impl MockService {
    /// Handle for the named service.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Service for MockService {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_request(&self, operation: &str) -> Result<Box<dyn VendorRequest>, BbgError> {
        let known = [
            RequestKind::PointInTime.operation(),
            RequestKind::Historical.operation(),
        ];
        if !known.contains(&operation) {
            return Err(BbgError::vendor(
                "NOT_FOUND",
                format!("{} has no operation {operation}", self.name),
            ));
        }
        Ok(Box::new(MockRequest::new(operation)))
    }
}
