use std::sync::Arc;

use bbgpd::{Blp, BlpBuilder, Session};
use bbgpd_mock::{MockSession, MockSessionController};
use chrono::NaiveDate;

/// Tickers known to the fixture session.
pub const ABC: &str = "ABC Equity";
pub const IBM: &str = "IBM US Equity";
pub const SX5E: &str = "SX5E Index";
/// Ticker the fixture session rejects.
pub const XYZ: &str = "XYZ Equity";

/// Build a date from components for readability in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// Mock session plus its controller, not started yet.
pub fn mock() -> (Arc<dyn Session>, MockSessionController) {
    MockSession::new_with_controller()
}

/// Connected client answering from fixtures, with the controller for inspection.
pub async fn connected() -> (Blp, MockSessionController) {
    connected_with(|b| b).await
}

/// Connected client with extra builder options.
pub async fn connected_with(
    f: impl FnOnce(BlpBuilder) -> BlpBuilder,
) -> (Blp, MockSessionController) {
    let (session, controller) = mock();
    let blp = f(Blp::builder().session(session))
        .connect()
        .await
        .expect("connect");
    (blp, controller)
}
