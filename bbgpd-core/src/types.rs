//! Re-export of foundational types from `bbgpd-types`.
// Consolidated re-exports so downstream crates can depend on `bbgpd-core` only

pub use bbgpd_types::{BbgConfig, BbgError, DEFAULT_SERVICE, Verbosity};
pub use bbgpd_types::{DATE_FORMAT, DateRange, FieldOverride, RequestKind};
pub use bbgpd_types::{FieldValue, Scalar, parse_date};
pub use bbgpd_types::{HistoricalRow, HistoricalTable, ReferenceRow, ReferenceTable};
