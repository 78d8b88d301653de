//! Configuration types shared by the client facade and the event pump.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reference data service opened by default on a fresh session.
pub const DEFAULT_SERVICE: &str = "//blp/refdata";

/// How much of the raw vendor traffic is dumped to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Verbosity {
    /// Only vendor-reported errors and warnings are logged.
    #[default]
    Quiet,
    /// Additionally log every event kind and every message at DEBUG level.
    Debug,
}

impl Verbosity {
    /// Whether raw events and messages should be dumped.
    #[must_use]
    pub const fn dumps_messages(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Global configuration for a `Blp` client.
///
/// Fixed once at construction; request methods never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BbgConfig {
    /// Data service opened on connect and used to create requests.
    pub service: String,
    /// Message dump verbosity.
    pub verbosity: Verbosity,
    /// Maximum wait for each event while draining a request.
    ///
    /// `None` waits forever: the pump only returns once the terminal event
    /// arrives or the session fails.
    pub event_timeout: Option<Duration>,
}

impl Default for BbgConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            verbosity: Verbosity::Quiet,
            event_timeout: None,
        }
    }
}
