//! Async client for vendor reference data: `bdp` for current field values,
//! `bdh` for daily history.
//!
//! Overview
//! - [`Blp`] owns a vendor [`Session`], starts it and opens the reference
//!   data service on `connect`.
//! - Each request is validated into a `RequestSpec`, sent, and its events are
//!   drained until the terminal response, folding messages into a table.
//! - Errors the vendor reports inside responses are logged, not returned:
//!   `bdp` leaves rejected securities out, `bdh` keeps what came back and
//!   fills missing fields with nulls.
//!
//! Key behaviors and trade-offs
//! - One request at a time per client (`&mut self`); events are pulled
//!   sequentially from the session.
//! - No timeout by default. `BlpBuilder::event_timeout` bounds each wait for
//!   the next event and surfaces `BbgError::RequestTimeout`.
//! - Message dumps are logged at DEBUG through `tracing` only when the client
//!   is built with `Verbosity::Debug`; installing a subscriber is up to the
//!   application.
//!
//! Examples
//! ```rust,ignore
//! use bbgpd::Blp;
//! use chrono::NaiveDate;
//!
//! let mut blp = Blp::builder().session(session).connect().await?;
//! let px = blp.bdp(["IBM US Equity"], ["PX_LAST", "CRNCY"], vec![]).await?;
//! let hist = blp
//!     .bdh(
//!         ["IBM US Equity"],
//!         ["PX_LAST"],
//!         NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
//!         vec![],
//!     )
//!     .await?;
//! blp.close().await?;
//! ```
//!
//! See `bbgpd/examples/` for a runnable demonstration against the fixture session.
#![warn(missing_docs)]

pub(crate) mod core;
mod historical;
mod reference;

pub use core::{Blp, BlpBuilder};

pub use bbgpd_core::{RequestSpec, Session};
pub use bbgpd_types::{
    BbgConfig, BbgError, DEFAULT_SERVICE, DateRange, FieldOverride, FieldValue, HistoricalRow,
    HistoricalTable, ReferenceRow, ReferenceTable, RequestKind, Scalar, Verbosity,
};
