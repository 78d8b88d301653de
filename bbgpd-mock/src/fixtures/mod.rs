//! Deterministic replies for requests nobody scripted.

pub mod history;
pub mod reference;

use crate::messages::MockEvent;
use crate::request::MockRequest;

/// Events answering `req` from the fixture tables.
///
/// Reference requests get one terminal event holding every security.
/// Historical requests get one message per security, all but the last
/// delivered as partial responses.
pub fn reply_for(req: &MockRequest) -> Vec<MockEvent> {
    if req.is_historical() {
        history::reply(req)
    } else {
        vec![MockEvent::response(vec![reference::reply(req)])]
    }
}
