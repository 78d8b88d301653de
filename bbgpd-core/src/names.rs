// Request slots

/// Repeated slot holding requested tickers.
pub const SECURITIES: &str = "securities";
/// Repeated slot holding requested field mnemonics.
pub const FIELDS: &str = "fields";
/// Repeated slot holding `{fieldId, value}` override elements.
pub const OVERRIDES: &str = "overrides";
/// Override element: field identifier.
pub const FIELD_ID: &str = "fieldId";
/// Override element: override value.
pub const VALUE: &str = "value";
/// Historical request start bound (`YYYYMMDD`).
pub const START_DATE: &str = "startDate";
/// Historical request end bound (`YYYYMMDD`).
pub const END_DATE: &str = "endDate";

// Response elements

/// Message-level error: the whole request was rejected.
pub const RESPONSE_ERROR: &str = "responseError";
/// Per-security payload (an array for reference data, a single entry for history).
pub const SECURITY_DATA: &str = "securityData";
/// Ticker echoed back inside a security entry.
pub const SECURITY: &str = "security";
/// Security-level error: the ticker was rejected.
pub const SECURITY_ERROR: &str = "securityError";
/// Field values of a security (one block for reference data, an array of dated records for history).
pub const FIELD_DATA: &str = "fieldData";
/// Per-field errors inside a security entry.
pub const FIELD_EXCEPTIONS: &str = "fieldExceptions";
/// Date stamp of a historical record.
pub const DATE: &str = "date";
/// Error detail block inside field exceptions.
pub const ERROR_INFO: &str = "errorInfo";
/// Error detail: category.
pub const CATEGORY: &str = "category";
/// Error detail: subcategory.
pub const SUBCATEGORY: &str = "subcategory";
/// Error detail: human-readable message.
pub const MESSAGE: &str = "message";
