use std::any::Any;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{BbgError, Scalar};

/// Read-only view of a node in a vendor response tree.
///
/// A message is itself an element (its root). Elements are either complex
/// (named children reachable by name or position), arrays (indexed values,
/// each possibly complex), or scalars.
pub trait Element: Send + Sync + fmt::Debug {
    /// Element name as defined by the service schema.
    fn name(&self) -> &str;

    /// True when the element holds an indexed sequence of values.
    fn is_array(&self) -> bool;

    /// Number of values held: array length, 1 for a set scalar, 0 otherwise.
    fn num_values(&self) -> usize;

    /// Number of named children of a complex element.
    fn num_elements(&self) -> usize;

    /// Child element by name.
    fn get_element(&self, name: &str) -> Option<&dyn Element>;

    /// Child element by position.
    fn element_at(&self, index: usize) -> Option<&dyn Element>;

    /// Complex value at `index` of an array element.
    fn value_as_element(&self, index: usize) -> Option<&dyn Element>;

    /// Scalar value at `index` (arrays of scalars, or index 0 for a scalar element).
    fn value_at(&self, index: usize) -> Option<Scalar>;

    /// Whether a child with the given name exists.
    fn has_element(&self, name: &str) -> bool {
        self.get_element(name).is_some()
    }

    /// Scalar value of a non-array element.
    fn value(&self) -> Option<Scalar> {
        self.value_at(0)
    }
}

/// Iterate the complex values of an array element.
pub fn array_values<'a>(el: &'a dyn Element) -> impl Iterator<Item = &'a dyn Element> + 'a {
    (0..el.num_values()).filter_map(move |i| el.value_as_element(i))
}

/// Iterate the named children of a complex element.
pub fn children<'a>(el: &'a dyn Element) -> impl Iterator<Item = &'a dyn Element> + 'a {
    (0..el.num_elements()).filter_map(move |i| el.element_at(i))
}

/// Kind of an event delivered by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EventKind {
    /// Part of a response; more events follow for the same request.
    PartialResponse,
    /// Final part of a response; no further messages follow for the request.
    Response,
    /// Session lifecycle notification (started, connection up/down, ...).
    SessionStatus,
    /// Service lifecycle notification (opened, failure, ...).
    ServiceStatus,
    /// Request-level status notification.
    RequestStatus,
    /// Administrative event, including heartbeats and slow-consumer warnings.
    Admin,
    /// Timer expiry delivered by the vendor library.
    Timeout,
    /// Anything else the vendor library may emit.
    Other,
}

impl EventKind {
    /// Whether the event carries response messages for an outstanding request.
    #[must_use]
    pub const fn is_response(self) -> bool {
        matches!(self, Self::PartialResponse | Self::Response)
    }

    /// Whether the event ends the current request.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Response)
    }
}

/// One event pulled from a session: a kind and zero or more messages.
#[derive(Debug)]
pub struct Event {
    /// Event kind.
    pub kind: EventKind,
    /// Messages carried by the event, each the root element of a response tree.
    pub messages: Vec<Box<dyn Element>>,
}

impl Event {
    /// Build an event from its parts.
    #[must_use]
    pub fn new(kind: EventKind, messages: Vec<Box<dyn Element>>) -> Self {
        Self { kind, messages }
    }

    /// An event without messages (heartbeats, status updates).
    #[must_use]
    pub const fn empty(kind: EventKind) -> Self {
        Self {
            kind,
            messages: Vec::new(),
        }
    }
}

/// A vendor request object under construction.
pub trait VendorRequest: Send + fmt::Debug {
    /// Operation this request was created for (e.g. `ReferenceDataRequest`).
    fn operation(&self) -> &str;

    /// Append a string value to a repeated slot (`securities`, `fields`).
    ///
    /// # Errors
    /// Returns an error if the slot does not exist for this operation.
    fn append(&mut self, slot: &str, value: &str) -> Result<(), BbgError>;

    /// Append one `{fieldId, value}` element under the `overrides` slot.
    ///
    /// # Errors
    /// Returns an error if the operation does not accept overrides.
    fn append_override(&mut self, field_id: &str, value: &str) -> Result<(), BbgError>;

    /// Set a scalar string field (`startDate`, `endDate`, ...).
    ///
    /// # Errors
    /// Returns an error if the field does not exist for this operation.
    fn set(&mut self, name: &str, value: &str) -> Result<(), BbgError>;

    /// Downcast hook for sessions that need to inspect their own request type.
    fn as_any(&self) -> &dyn Any;
}

/// Handle to an opened data service.
pub trait Service: Send + Sync {
    /// Service name, e.g. `//blp/refdata`.
    fn name(&self) -> &str;

    /// Create an empty request for the given operation.
    ///
    /// # Errors
    /// Returns an error if the service does not define the operation.
    fn create_request(&self, operation: &str) -> Result<Box<dyn VendorRequest>, BbgError>;
}

/// Connection to the vendor, owning the event queue.
///
/// Implementations wrap the vendor's client library. Callers use a session
/// sequentially: a request is submitted and its events drained to the terminal
/// event before the next request is sent.
#[async_trait]
pub trait Session: Send + Sync {
    /// Short label of the backing implementation, used in logs.
    fn vendor(&self) -> &'static str;

    /// Start the session.
    async fn start(&self) -> Result<(), BbgError>;

    /// Open a named data service on a started session.
    async fn open_service(&self, name: &str) -> Result<(), BbgError>;

    /// Handle of an opened service.
    async fn service(&self, name: &str) -> Result<Arc<dyn Service>, BbgError>;

    /// Submit a populated request.
    async fn send_request(&self, request: Box<dyn VendorRequest>) -> Result<(), BbgError>;

    /// Wait for the next event. Blocks until one is available.
    async fn next_event(&self) -> Result<Event, BbgError>;

    /// Stop the session; pending events are discarded.
    async fn stop(&self) -> Result<(), BbgError>;
}
