//! Builders for response messages and events, following the reference data
//! service schema.

use bbgpd_core::names;
use bbgpd_core::{Element, Event, EventKind, Scalar};
use chrono::NaiveDate;

use crate::element::MockElement;

/// Root name of reference data response messages.
pub const REFERENCE_RESPONSE: &str = "ReferenceDataResponse";
/// Root name of historical data response messages.
pub const HISTORICAL_RESPONSE: &str = "HistoricalDataResponse";

/// Cloneable event description, turned into a session `Event` on delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct MockEvent {
    /// Event kind.
    pub kind: EventKind,
    /// Message roots carried by the event.
    pub messages: Vec<MockElement>,
}

impl MockEvent {
    /// Non-terminal response event.
    #[must_use]
    pub const fn partial(messages: Vec<MockElement>) -> Self {
        Self {
            kind: EventKind::PartialResponse,
            messages,
        }
    }

    /// Terminal response event.
    #[must_use]
    pub const fn response(messages: Vec<MockElement>) -> Self {
        Self {
            kind: EventKind::Response,
            messages,
        }
    }

    /// Administrative heartbeat without messages.
    #[must_use]
    pub const fn heartbeat() -> Self {
        Self {
            kind: EventKind::Admin,
            messages: Vec::new(),
        }
    }

    /// Status event of any non-response kind, carrying a single named message.
    #[must_use]
    pub fn status(kind: EventKind, message: &str) -> Self {
        Self {
            kind,
            messages: vec![MockElement::complex(message, vec![])],
        }
    }

    /// Convert into the event type handed to the pump.
    #[must_use]
    pub fn into_event(self) -> Event {
        Event::new(
            self.kind,
            self.messages
                .into_iter()
                .map(|m| Box::new(m) as Box<dyn Element>)
                .collect(),
        )
    }
}

/// `errorInfo`-shaped block: `{category, subcategory?, message}`.
#[must_use]
pub fn error_info(name: &str, category: &str, message: &str) -> MockElement {
    MockElement::complex(
        name,
        vec![
            MockElement::scalar(names::CATEGORY, category),
            MockElement::scalar(names::MESSAGE, message),
        ],
    )
}

/// Reference data message rejected as a whole.
#[must_use]
pub fn response_error(category: &str, message: &str) -> MockElement {
    MockElement::complex(
        REFERENCE_RESPONSE,
        vec![error_info(names::RESPONSE_ERROR, category, message)],
    )
}

/// Reference data message wrapping security entries built with [`SecurityBuilder`].
#[must_use]
pub fn reference_response(securities: Vec<MockElement>) -> MockElement {
    MockElement::complex(
        REFERENCE_RESPONSE,
        vec![MockElement::array(names::SECURITY_DATA, securities)],
    )
}

/// Builder of one `securityData` entry of a reference data response.
#[derive(Debug, Clone)]
pub struct SecurityBuilder {
    ticker: String,
    error: Option<MockElement>,
    fields: Vec<MockElement>,
    exceptions: Vec<MockElement>,
}

impl SecurityBuilder {
    /// Entry echoing `ticker`.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            error: None,
            fields: Vec::new(),
            exceptions: Vec::new(),
        }
    }

    /// Scalar field value.
    #[must_use]
    pub fn field(mut self, name: &str, value: impl Into<Scalar>) -> Self {
        self.fields.push(MockElement::scalar(name, value));
        self
    }

    /// Array field made of records, each a list of `(sub-element, value)` pairs.
    #[must_use]
    pub fn array_field(mut self, name: &str, records: Vec<Vec<(&str, Scalar)>>) -> Self {
        let values = records
            .into_iter()
            .map(|rec| {
                MockElement::complex(
                    name,
                    rec.into_iter()
                        .map(|(k, v)| MockElement::scalar(k, v))
                        .collect(),
                )
            })
            .collect();
        self.fields.push(MockElement::array(name, values));
        self
    }

    /// Mark the security as rejected by the vendor.
    #[must_use]
    pub fn error(mut self, category: &str, message: &str) -> Self {
        self.error = Some(error_info(names::SECURITY_ERROR, category, message));
        self
    }

    /// Add a field exception for `field`.
    #[must_use]
    pub fn field_exception(mut self, field: &str, message: &str) -> Self {
        self.exceptions.push(MockElement::complex(
            names::FIELD_EXCEPTIONS,
            vec![
                MockElement::scalar(names::FIELD_ID, field),
                error_info(names::ERROR_INFO, "BAD_FLD", message),
            ],
        ));
        self
    }

    /// Build the entry.
    #[must_use]
    pub fn build(self) -> MockElement {
        let mut children = vec![MockElement::scalar(names::SECURITY, self.ticker)];
        if let Some(err) = self.error {
            children.push(err);
        }
        children.push(MockElement::array(names::FIELD_EXCEPTIONS, self.exceptions));
        children.push(MockElement::complex(names::FIELD_DATA, self.fields));
        MockElement::complex(names::SECURITY_DATA, children)
    }
}

/// Builder of one historical data response message (a single security).
#[derive(Debug, Clone)]
pub struct HistoryBuilder {
    ticker: String,
    error: Option<MockElement>,
    rows: Vec<MockElement>,
}

impl HistoryBuilder {
    /// Message for `ticker`.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            error: None,
            rows: Vec::new(),
        }
    }

    /// One dated record with the given field values; fields left out are absent.
    #[must_use]
    pub fn row(mut self, date: NaiveDate, values: Vec<(&str, Scalar)>) -> Self {
        let mut children = vec![MockElement::scalar(names::DATE, date)];
        children.extend(values.into_iter().map(|(k, v)| MockElement::scalar(k, v)));
        self.rows
            .push(MockElement::complex(names::FIELD_DATA, children));
        self
    }

    /// Mark the security as rejected by the vendor.
    #[must_use]
    pub fn error(mut self, category: &str, message: &str) -> Self {
        self.error = Some(error_info(names::SECURITY_ERROR, category, message));
        self
    }

    /// Build the message.
    #[must_use]
    pub fn build(self) -> MockElement {
        let mut children = vec![MockElement::scalar(names::SECURITY, self.ticker)];
        if let Some(err) = self.error {
            children.push(err);
        }
        children.push(MockElement::array(names::FIELD_DATA, self.rows));
        MockElement::complex(
            HISTORICAL_RESPONSE,
            vec![MockElement::complex(names::SECURITY_DATA, children)],
        )
    }
}
