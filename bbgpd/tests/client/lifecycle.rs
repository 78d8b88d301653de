use bbgpd::{BbgConfig, BbgError, Blp, DEFAULT_SERVICE, Verbosity};

use crate::helpers::{ABC, connected, connected_with, mock};

#[tokio::test]
async fn connect_starts_session_and_opens_service_once() {
    let (blp, controller) = connected().await;

    assert!(controller.is_running().await);
    assert_eq!(controller.open_calls().await, 1);
    assert_eq!(blp.config().service, DEFAULT_SERVICE);
    assert_eq!(blp.config().verbosity, Verbosity::Quiet);
    assert_eq!(blp.config().event_timeout, None);
}

#[tokio::test]
async fn close_stops_session() {
    let (blp, controller) = connected().await;
    blp.close().await.expect("close");
    assert!(controller.is_stopped().await);
}

#[tokio::test]
async fn connect_without_session_fails() {
    let err = Blp::builder().connect().await.err().expect("no session");
    assert!(matches!(err, BbgError::Session(_)));
}

#[tokio::test]
async fn connect_reports_start_failure() {
    let (session, controller) = mock();
    controller
        .fail_start(BbgError::session("terminal not running"))
        .await;

    let err = Blp::builder()
        .session(session)
        .connect()
        .await
        .err()
        .expect("start fails");
    assert_eq!(err, BbgError::session("terminal not running"));
    assert_eq!(controller.open_calls().await, 0);
}

#[tokio::test]
async fn connect_reports_unavailable_service() {
    let (session, controller) = mock();
    controller.make_unavailable(DEFAULT_SERVICE).await;

    let err = Blp::builder()
        .session(session)
        .connect()
        .await
        .err()
        .expect("open fails");
    assert_eq!(err, BbgError::service_unavailable(DEFAULT_SERVICE));
}

#[tokio::test]
async fn builder_options_land_in_config() {
    let (blp, _) = connected_with(|b| {
        b.debug(true)
            .event_timeout(std::time::Duration::from_secs(3))
    })
    .await;
    assert_eq!(blp.config().verbosity, Verbosity::Debug);
    assert_eq!(
        blp.config().event_timeout,
        Some(std::time::Duration::from_secs(3))
    );

    let cfg = BbgConfig {
        verbosity: Verbosity::Debug,
        ..BbgConfig::default()
    };
    let (blp, _) = connected_with(|b| b.config(cfg.clone())).await;
    assert_eq!(blp.config(), &cfg);
}

#[tokio::test]
async fn sequential_requests_on_one_client() {
    let (mut blp, controller) = connected().await;
    for _ in 0..3 {
        let table = blp.bdp([ABC], ["PX_LAST"], vec![]).await.expect("bdp");
        assert!(table.contains_ticker(ABC));
    }
    assert_eq!(controller.requests().await.len(), 3);
    assert_eq!(controller.pending_events().await, 0);
}
