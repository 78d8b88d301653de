//! Folding response events into tables.
//!
//! A [`Reducer`] is created per request and fed every event pulled from the
//! session. It moves `Awaiting → Accumulating → Done`; only a terminal
//! `Response` event completes it, and its messages are folded in before the
//! state changes. Events that carry no response (heartbeats, status updates)
//! are skipped without touching state.
//!
//! Vendor-reported errors never fail the reduction: a `responseError` drops
//! the message; a `securityError` drops the security in point-in-time mode but
//! only gets logged in historical mode, where the security's records are still
//! folded in.

mod historical;
mod reference;

use crate::names;
use crate::request::RequestSpec;
use crate::session::{Element, Event, array_values};
use crate::types::{BbgError, HistoricalTable, ReferenceTable, RequestKind, Verbosity};

/// Progress of a reducer over its event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducerState {
    /// No response event seen yet.
    Awaiting,
    /// At least one response event folded; the terminal one is still pending.
    Accumulating,
    /// The terminal event has been folded; the table is complete.
    Done,
}

/// Output of a completed reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced {
    /// Point-in-time table.
    Reference(ReferenceTable),
    /// Historical table.
    Historical(HistoricalTable),
}

impl Reduced {
    /// The point-in-time table, if this reduction produced one.
    #[must_use]
    pub fn into_reference(self) -> Option<ReferenceTable> {
        match self {
            Self::Reference(t) => Some(t),
            Self::Historical(_) => None,
        }
    }

    /// The historical table, if this reduction produced one.
    #[must_use]
    pub fn into_historical(self) -> Option<HistoricalTable> {
        match self {
            Self::Historical(t) => Some(t),
            Self::Reference(_) => None,
        }
    }
}

/// Event-stream state machine accumulating one request's table.
#[derive(Debug)]
pub struct Reducer {
    fields: Vec<String>,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    verbosity: Verbosity,
    state: ReducerState,
    acc: Reduced,
}

impl Reducer {
    /// Create a reducer for `fields` of a request of the given kind.
    #[must_use]
    pub fn new(kind: RequestKind, fields: Vec<String>, verbosity: Verbosity) -> Self {
        let acc = match kind {
            RequestKind::PointInTime => Reduced::Reference(ReferenceTable::new()),
            RequestKind::Historical => Reduced::Historical(HistoricalTable::new()),
        };
        Self {
            fields,
            verbosity,
            state: ReducerState::Awaiting,
            acc,
        }
    }

    /// Create a reducer matching a built request.
    #[must_use]
    pub fn for_request(spec: &RequestSpec, verbosity: Verbosity) -> Self {
        Self::new(spec.kind(), spec.fields().to_vec(), verbosity)
    }

    /// Kind of table being built.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self.acc {
            Reduced::Reference(_) => RequestKind::PointInTime,
            Reduced::Historical(_) => RequestKind::Historical,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ReducerState {
        self.state
    }

    /// Whether the terminal event has been folded.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, ReducerState::Done)
    }

    /// Fold one event and return the resulting state.
    pub fn on_event(&mut self, event: &Event) -> ReducerState {
        #[cfg(feature = "tracing")]
        if self.verbosity.dumps_messages() {
            tracing::debug!(kind = ?event.kind, messages = event.messages.len(), "event");
        }

        if self.is_done() {
            #[cfg(feature = "tracing")]
            tracing::warn!(kind = ?event.kind, "event after terminal response ignored");
            return self.state;
        }
        if !event.kind.is_response() {
            return self.state;
        }

        self.state = ReducerState::Accumulating;
        for msg in &event.messages {
            self.on_message(msg.as_ref());
        }
        if event.kind.is_terminal() {
            self.state = ReducerState::Done;
        }
        self.state
    }

    /// Fold one response message, regardless of the event that carried it.
    pub fn on_message(&mut self, msg: &dyn Element) {
        #[cfg(feature = "tracing")]
        if self.verbosity.dumps_messages() {
            tracing::debug!(msg = ?msg, "message");
        }

        if let Some(err) = msg.get_element(names::RESPONSE_ERROR) {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %error_summary(err), "response error; message skipped");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
            return;
        }
        let Some(security_data) = msg.get_element(names::SECURITY_DATA) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(name = msg.name(), "message without security data skipped");
            return;
        };

        match &mut self.acc {
            Reduced::Reference(table) => {
                reference::fold_security_data(table, &self.fields, security_data);
            }
            Reduced::Historical(table) => {
                historical::fold_security_data(table, &self.fields, security_data);
            }
        }
    }

    /// Consume the reducer and return its table, complete or not.
    #[must_use]
    pub fn finish(self) -> Reduced {
        self.acc
    }
}

/// Reduce an already recorded event stream.
///
/// Events after the terminal one are never consumed.
///
/// # Errors
/// Returns `Session` if the stream ends before a terminal event.
pub fn reduce<I>(kind: RequestKind, fields: &[String], events: I) -> Result<Reduced, BbgError>
where
    I: IntoIterator<Item = Event>,
{
    let mut reducer = Reducer::new(kind, fields.to_vec(), Verbosity::Quiet);
    for event in events {
        if reducer.on_event(&event) == ReducerState::Done {
            return Ok(reducer.finish());
        }
    }
    Err(BbgError::session(
        "event stream ended before the terminal response",
    ))
}

/// Security entries of a `securityData` element: its values when it is an
/// array, otherwise the element itself.
fn security_entries(security_data: &dyn Element) -> Vec<&dyn Element> {
    if security_data.is_array() {
        array_values(security_data).collect()
    } else {
        vec![security_data]
    }
}

/// Ticker echoed in a security entry.
fn ticker_of(security: &dyn Element) -> Option<String> {
    security
        .get_element(names::SECURITY)
        .and_then(Element::value)
        .map(|v| v.to_string())
}

/// One-line rendering of a vendor error block (`category/subcategory: message`).
fn error_summary(err: &dyn Element) -> String {
    let part = |name: &str| {
        err.get_element(name)
            .and_then(Element::value)
            .map(|v| v.to_string())
    };
    let category = part(names::CATEGORY).unwrap_or_else(|| "UNKNOWN".to_string());
    let message = part(names::MESSAGE).unwrap_or_default();
    match part(names::SUBCATEGORY) {
        Some(sub) => format!("{category}/{sub}: {message}"),
        None => format!("{category}: {message}"),
    }
}

/// Log the field exceptions of a security entry.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_field_exceptions(ticker: &str, security: &dyn Element) {
    let Some(exceptions) = security.get_element(names::FIELD_EXCEPTIONS) else {
        return;
    };
    for exception in security_entries(exceptions) {
        let field = exception
            .get_element(names::FIELD_ID)
            .and_then(Element::value)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let detail = exception
            .get_element(names::ERROR_INFO)
            .map(error_summary)
            .unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::warn!(ticker = %ticker, field = %field, error = %detail, "field exception");
    }
}
