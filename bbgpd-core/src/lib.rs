//! bbgpd-core
//!
//! Core contracts and the request/response transformation shared across the
//! bbgpd workspace.
//!
//! - `session`: the `Session`, `Service`, `VendorRequest` and `Element` traits
//!   through which the vendor client library is reached.
//! - `request`: validation of tickers/fields/overrides/dates into an immutable
//!   `RequestSpec`, and population of vendor request objects.
//! - `reduce`: the state machine folding response events into point-in-time or
//!   historical tables.
//! - `pump`: submits a request and drains the session's events into the reducer.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `Session` methods are async and the optional per-event timeout in `pump`
//! uses `tokio::time::timeout`, so draining must run under a Tokio 1.x runtime.
//! The pump itself is sequential: one request is drained to its terminal event
//! before the next can be issued.
#![warn(missing_docs)]

/// Element and message names used by the reference data service schema.
pub mod names;
/// Request submission and event draining.
pub mod pump;
/// Response reducer state machine.
pub mod reduce;
/// Request validation and vendor request population.
pub mod request;
/// Vendor session abstraction.
pub mod session;
pub mod types;

pub use pump::{drain, execute, submit};
pub use reduce::{Reduced, Reducer, ReducerState, reduce};
pub use request::RequestSpec;
pub use session::{Element, Event, EventKind, Service, Session, VendorRequest};
pub use types::*;
