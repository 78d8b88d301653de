use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the bbgpd workspace.
///
/// Only argument validation and session-level failures surface here. Errors the
/// vendor reports inside response messages (`responseError`, `securityError`) are
/// logged by the reducer and never converted into a `BbgError`.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BbgError {
    /// A request argument has the wrong shape (not a list of strings, empty, not a date, ...).
    #[error("invalid argument type: {0}")]
    InvalidArgumentType(String),

    /// The vendor session could not be started, stopped, or failed while pumping events.
    #[error("session error: {0}")]
    Session(String),

    /// The named data service could not be opened or is not open on the session.
    #[error("service unavailable: {service}")]
    ServiceUnavailable {
        /// Service name, e.g. `//blp/refdata`.
        service: String,
    },

    /// No event arrived within the configured event timeout.
    #[error("request timed out: {operation}")]
    RequestTimeout {
        /// Vendor operation that was being drained (e.g. `ReferenceDataRequest`).
        operation: String,
    },

    /// The vendor client library rejected a call outside of response content.
    #[error("vendor error [{category}]: {message}")]
    Vendor {
        /// Vendor error category (e.g. `BAD_ARGS`, `NOT_AUTHORIZED`).
        category: String,
        /// Human-readable vendor message.
        message: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl BbgError {
    /// Helper: build an `InvalidArgumentType` error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgumentType(msg.into())
    }

    /// Helper: build a `Session` error.
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Helper: build a `ServiceUnavailable` error.
    pub fn service_unavailable(service: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(operation: impl Into<String>) -> Self {
        Self::RequestTimeout {
            operation: operation.into(),
        }
    }

    /// Helper: build a `Vendor` error.
    pub fn vendor(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Vendor {
            category: category.into(),
            message: message.into(),
        }
    }

    /// Returns true if the caller passed malformed input.
    ///
    /// Argument errors are raised before any event is read and are never worth
    /// retrying with the same input.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgumentType(_))
    }
}
