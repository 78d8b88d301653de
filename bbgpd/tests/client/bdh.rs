use std::time::Duration;

use bbgpd::{BbgError, Scalar};
use bbgpd_mock::{HistoryBuilder, MockEvent, ReplyBehavior};
use serde_json::json;

use crate::helpers::{ABC, IBM, XYZ, connected, connected_with, d};

#[tokio::test]
async fn bdh_fills_missing_fields_with_null() {
    let (mut blp, _) = connected().await;
    let table = blp
        .bdh([ABC], ["PX_LAST", "VOLUME"], d(2024, 1, 2), d(2024, 1, 5), vec![])
        .await
        .expect("bdh");

    assert_eq!(table.dates(ABC).count(), 4);
    assert_eq!(
        table.get(ABC, d(2024, 1, 2), "PX_LAST"),
        Some(&Some(Scalar::Float(101.5)))
    );
    assert_eq!(table.get(ABC, d(2024, 1, 3), "PX_LAST"), Some(&None));
    assert_eq!(table.get(ABC, d(2024, 1, 5), "VOLUME"), Some(&None));
}

#[tokio::test]
async fn bdh_merges_one_message_per_security() {
    let (mut blp, _) = connected().await;
    let table = blp
        .bdh([ABC, IBM], ["PX_LAST"], d(2024, 1, 4), d(2024, 1, 5), vec![])
        .await
        .expect("bdh");

    assert_eq!(table.tickers().collect::<Vec<_>>(), [ABC, IBM]);
    assert_eq!(table.dates(IBM).collect::<Vec<_>>(), [d(2024, 1, 4), d(2024, 1, 5)]);
}

#[tokio::test]
async fn bdh_keeps_going_after_security_error() {
    let (mut blp, _) = connected().await;
    let table = blp
        .bdh([XYZ, ABC], ["PX_LAST"], d(2024, 1, 2), d(2024, 1, 2), vec![])
        .await
        .expect("bdh");

    assert_eq!(
        table.get(ABC, d(2024, 1, 2), "PX_LAST"),
        Some(&Some(Scalar::Float(101.5)))
    );
    assert_eq!(table.dates(XYZ).count(), 0);
}

#[tokio::test]
async fn bdh_keeps_records_of_a_rejected_security() {
    let (mut blp, controller) = connected().await;
    controller
        .push_events(vec![MockEvent::response(vec![
            HistoryBuilder::new(XYZ)
                .error("BAD_SEC", "Unknown/Invalid security")
                .row(d(2024, 1, 2), vec![("PX_LAST", Scalar::from(1.0))])
                .build(),
        ])])
        .await;

    let table = blp
        .bdh([XYZ], ["PX_LAST"], d(2024, 1, 2), d(2024, 1, 2), vec![])
        .await
        .expect("bdh");
    assert_eq!(
        table.get(XYZ, d(2024, 1, 2), "PX_LAST"),
        Some(&Some(Scalar::Float(1.0)))
    );
}

#[tokio::test]
async fn bdh_sends_compact_dates() {
    let (mut blp, controller) = connected().await;
    blp.bdh_values(
        &json!([ABC]),
        &json!(["PX_LAST"]),
        &json!("2024-01-02"),
        &json!("20240105"),
        None,
    )
    .await
    .expect("bdh");

    let reqs = controller.requests().await;
    assert_eq!(reqs[0].value("startDate"), Some("20240102"));
    assert_eq!(reqs[0].value("endDate"), Some("20240105"));
}

#[tokio::test]
async fn bdh_inverted_range_is_sent_and_returns_no_rows() {
    let (mut blp, controller) = connected().await;
    let table = blp
        .bdh([ABC], ["PX_LAST"], d(2024, 1, 5), d(2024, 1, 2), vec![])
        .await
        .expect("bdh");

    assert_eq!(table.dates(ABC).count(), 0);
    assert_eq!(controller.requests().await.len(), 1);
}

#[tokio::test]
async fn bdh_values_rejects_non_date_bounds() {
    let (mut blp, _) = connected().await;
    let err = blp
        .bdh_values(
            &json!([ABC]),
            &json!(["PX_LAST"]),
            &json!(20_240_102),
            &json!("2024-01-05"),
            None,
        )
        .await
        .expect_err("numeric date");
    assert!(err.is_argument_error());
}

#[tokio::test(start_paused = true)]
async fn bdh_times_out_on_a_silent_session() {
    let (mut blp, controller) =
        connected_with(|b| b.event_timeout(Duration::from_secs(2))).await;
    controller.push_reply(ReplyBehavior::Hang).await;

    let err = blp
        .bdh([ABC], ["PX_LAST"], d(2024, 1, 2), d(2024, 1, 5), vec![])
        .await
        .expect_err("timeout");
    assert!(matches!(err, BbgError::RequestTimeout { .. }));
}
