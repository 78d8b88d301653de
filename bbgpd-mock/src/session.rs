use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bbgpd_core::{BbgError, Event, EventKind, Service, Session, VendorRequest};

use crate::fixtures;
use crate::messages::MockEvent;
use crate::request::{MockRequest, MockService};

/// Instruction for how the session answers the next request it is sent.
#[derive(Debug, Clone)]
pub enum ReplyBehavior {
    /// Queue these events, in order.
    Events(Vec<MockEvent>),
    /// Answer from the fixture tables.
    Fixtures,
    /// Reject the request at `send_request`.
    Fail(BbgError),
    /// Accept the request and never deliver an event for it.
    Hang,
}

#[derive(Default)]
struct InternalState {
    started: bool,
    stopped: bool,
    start_failure: Option<BbgError>,
    unavailable: HashSet<String>,
    opened: Vec<String>,
    open_calls: usize,
    replies: VecDeque<ReplyBehavior>,
    queue: VecDeque<MockEvent>,
    requests: Vec<MockRequest>,
}

/// Controller handle used by tests to drive a [`MockSession`] from the outside.
#[derive(Clone)]
pub struct MockSessionController {
    state: Arc<Mutex<InternalState>>,
}

impl MockSessionController {
    /// Script the reply to the next unanswered request.
    pub async fn push_reply(&self, behavior: ReplyBehavior) {
        let mut guard = self.state.lock().await;
        guard.replies.push_back(behavior);
    }

    /// Shorthand for `push_reply(ReplyBehavior::Events(events))`.
    pub async fn push_events(&self, events: Vec<MockEvent>) {
        self.push_reply(ReplyBehavior::Events(events)).await;
    }

    /// Queue events right away, independent of any request (status noise, stray events).
    pub async fn inject(&self, event: MockEvent) {
        let mut guard = self.state.lock().await;
        guard.queue.push_back(event);
    }

    /// Make the next `start` call fail with `err`.
    pub async fn fail_start(&self, err: BbgError) {
        let mut guard = self.state.lock().await;
        guard.start_failure = Some(err);
    }

    /// Make `open_service` fail for the named service.
    pub async fn make_unavailable(&self, service: &str) {
        let mut guard = self.state.lock().await;
        guard.unavailable.insert(service.to_string());
    }

    /// Copy of every request sent so far.
    pub async fn requests(&self) -> Vec<MockRequest> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Whether the session has been started and not stopped.
    pub async fn is_running(&self) -> bool {
        let guard = self.state.lock().await;
        guard.started && !guard.stopped
    }

    /// Whether `stop` has been called.
    pub async fn is_stopped(&self) -> bool {
        let guard = self.state.lock().await;
        guard.stopped
    }

    /// Number of `open_service` calls received.
    pub async fn open_calls(&self) -> usize {
        let guard = self.state.lock().await;
        guard.open_calls
    }

    /// Events queued but not yet pulled.
    pub async fn pending_events(&self) -> usize {
        let guard = self.state.lock().await;
        guard.queue.len()
    }
}

/// Vendor session backed by in-memory state.
///
/// Starting the session queues a `SessionStatus` event and opening a service
/// queues a `ServiceStatus` event, as the vendor library does. With an empty
/// queue, `next_event` waits forever.
pub struct MockSession {
    state: Arc<Mutex<InternalState>>,
}

impl MockSession {
    /// Create a session and its controller.
    #[must_use]
    pub fn new_with_controller() -> (Arc<dyn Session>, MockSessionController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = MockSessionController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { state });
        (me as Arc<dyn Session>, controller)
    }

    /// Create a session answering every request from fixtures.
    #[must_use]
    pub fn with_fixtures() -> Arc<dyn Session> {
        Self::new_with_controller().0
    }
}

#[async_trait]
impl Session for MockSession {
    fn vendor(&self) -> &'static str {
        "bbgpd-mock"
    }

    async fn start(&self) -> Result<(), BbgError> {
        let mut guard = self.state.lock().await;
        if let Some(err) = guard.start_failure.take() {
            return Err(err);
        }
        guard.started = true;
        guard.stopped = false;
        guard
            .queue
            .push_back(MockEvent::status(EventKind::SessionStatus, "SessionStarted"));
        Ok(())
    }

    async fn open_service(&self, name: &str) -> Result<(), BbgError> {
        let mut guard = self.state.lock().await;
        guard.open_calls += 1;
        if !guard.started {
            return Err(BbgError::session("session not started"));
        }
        if guard.unavailable.contains(name) {
            guard.queue.push_back(MockEvent::status(
                EventKind::ServiceStatus,
                "ServiceOpenFailure",
            ));
            return Err(BbgError::service_unavailable(name));
        }
        if !guard.opened.iter().any(|s| s == name) {
            guard.opened.push(name.to_string());
        }
        guard
            .queue
            .push_back(MockEvent::status(EventKind::ServiceStatus, "ServiceOpened"));
        Ok(())
    }

    async fn service(&self, name: &str) -> Result<Arc<dyn Service>, BbgError> {
        let guard = self.state.lock().await;
        if guard.opened.iter().any(|s| s == name) {
            Ok(Arc::new(MockService::new(name)))
        } else {
            Err(BbgError::service_unavailable(name))
        }
    }

    async fn send_request(&self, request: Box<dyn VendorRequest>) -> Result<(), BbgError> {
        let Some(req) = request.as_any().downcast_ref::<MockRequest>() else {
            return Err(BbgError::vendor(
                "BAD_ARGS",
                "request was not created by this session",
            ));
        };
        let mut guard = self.state.lock().await;
        if !guard.started || guard.stopped {
            return Err(BbgError::session("session not running"));
        }
        guard.requests.push(req.clone());

        match guard.replies.pop_front().unwrap_or(ReplyBehavior::Fixtures) {
            ReplyBehavior::Events(events) => guard.queue.extend(events),
            ReplyBehavior::Fixtures => {
                let events = fixtures::reply_for(req);
                guard.queue.extend(events);
            }
            ReplyBehavior::Fail(err) => return Err(err),
            ReplyBehavior::Hang => {}
        }
        Ok(())
    }

    async fn next_event(&self) -> Result<Event, BbgError> {
        // Pop without holding the lock across the wait below
        let next = {
            let mut guard = self.state.lock().await;
            if guard.stopped {
                return Err(BbgError::session("session stopped"));
            }
            guard.queue.pop_front()
        };
        match next {
            Some(event) => Ok(event.into_event()),
            None => std::future::pending().await,
        }
    }

    async fn stop(&self) -> Result<(), BbgError> {
        let mut guard = self.state.lock().await;
        guard.stopped = true;
        guard.queue.clear();
        Ok(())
    }
}
