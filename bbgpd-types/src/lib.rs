//! bbgpd-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod request;
mod table;
mod value;

pub use config::{BbgConfig, DEFAULT_SERVICE, Verbosity};
pub use error::BbgError;
pub use request::{DATE_FORMAT, DateRange, FieldOverride, RequestKind};
pub use table::{HistoricalRow, HistoricalTable, ReferenceRow, ReferenceTable};
pub use value::{FieldValue, Scalar, parse_date};
