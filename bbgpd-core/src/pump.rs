use std::time::Duration;

use crate::reduce::{Reduced, Reducer};
use crate::request::RequestSpec;
use crate::session::{Service, Session};
use crate::types::{BbgError, Verbosity};

/// Create the vendor request for `spec` on `service`, populate it and send it.
///
/// # Errors
/// Returns any error raised while creating, populating or sending the request.
pub async fn submit(
    session: &dyn Session,
    service: &dyn Service,
    spec: &RequestSpec,
) -> Result<(), BbgError> {
    let mut request = service.create_request(spec.kind().operation())?;
    spec.populate(&mut *request)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        vendor = session.vendor(),
        service = service.name(),
        operation = %spec.kind(),
        securities = spec.securities().len(),
        fields = spec.fields().len(),
        "sending request"
    );
    session.send_request(request).await
}

/// Pull events from `session` into `reducer` until the terminal response.
///
/// With `timeout` set, each wait for the next event is bounded by it. With
/// `None` the pump waits as long as the session takes: a session that never
/// delivers the terminal event keeps this future pending.
///
/// # Errors
/// Returns `RequestTimeout` when an event wait exceeds `timeout`, or the
/// session's error if pulling an event fails.
pub async fn drain(
    session: &dyn Session,
    mut reducer: Reducer,
    timeout: Option<Duration>,
) -> Result<Reduced, BbgError> {
    let operation = reducer.kind().operation();
    while !reducer.is_done() {
        let event = match timeout {
            Some(limit) => tokio::time::timeout(limit, session.next_event())
                .await
                .map_err(|_| BbgError::request_timeout(operation))??,
            None => session.next_event().await?,
        };
        reducer.on_event(&event);
    }
    Ok(reducer.finish())
}

/// Submit `spec` and drain its response into a table.
///
/// # Errors
/// See [`submit`] and [`drain`].
pub async fn execute(
    session: &dyn Session,
    service: &dyn Service,
    spec: &RequestSpec,
    verbosity: Verbosity,
    timeout: Option<Duration>,
) -> Result<Reduced, BbgError> {
    submit(session, service, spec).await?;
    drain(session, Reducer::for_request(spec, verbosity), timeout).await
}
