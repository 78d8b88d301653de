//! In-memory stand-in for the vendor session.
//!
//! - [`MockElement`] builds response trees by hand.
//! - [`messages`] assembles reference and historical response messages.
//! - [`MockSession`] implements `Session`: it records every request it is sent and
//!   replies with scripted events, or with deterministic fixtures when nothing is
//!   scripted.
#![warn(missing_docs)]

mod element;
mod fixtures;
pub mod messages;
mod request;
mod session;

pub use element::MockElement;
pub use messages::{HistoryBuilder, MockEvent, SecurityBuilder};
pub use request::{MockRequest, MockService};
pub use session::{MockSession, MockSessionController, ReplyBehavior};
