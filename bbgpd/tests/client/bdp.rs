use bbgpd::{BbgError, FieldOverride, FieldValue, Scalar};
use bbgpd_mock::messages::reference_response;
use bbgpd_mock::{MockEvent, SecurityBuilder};
use serde_json::json;

use crate::helpers::{ABC, IBM, SX5E, XYZ, connected};

#[tokio::test]
async fn bdp_returns_requested_fields() {
    let (mut blp, _) = connected().await;
    let table = blp
        .bdp([ABC, IBM], ["PX_LAST", "CRNCY"], vec![])
        .await
        .expect("bdp");

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get(ABC, "PX_LAST"),
        Some(&FieldValue::Scalar(Scalar::Float(101.5)))
    );
    assert_eq!(
        table.get(IBM, "CRNCY"),
        Some(&FieldValue::Scalar(Scalar::from("USD")))
    );
}

#[tokio::test]
async fn bdp_drops_rejected_securities() {
    let (mut blp, _) = connected().await;
    let table = blp.bdp([XYZ, ABC], ["PX_LAST"], vec![]).await.expect("bdp");

    assert!(!table.contains_ticker(XYZ));
    assert_eq!(table.tickers().collect::<Vec<_>>(), [ABC]);
}

#[tokio::test]
async fn bdp_omits_fields_not_returned() {
    let (mut blp, _) = connected().await;
    let table = blp
        .bdp(["VOD LN Equity"], ["PX_LAST", "VOLUME"], vec![])
        .await
        .expect("bdp");

    let row = table.row("VOD LN Equity").expect("row");
    assert!(row.contains_key("PX_LAST"));
    assert!(!row.contains_key("VOLUME"));
}

#[tokio::test]
async fn bdp_flattens_chain_fields() {
    let (mut blp, _) = connected().await;
    let table = blp
        .bdp([SX5E], ["CHAIN_TICKERS"], vec![])
        .await
        .expect("bdp");

    let chain = table
        .get(SX5E, "CHAIN_TICKERS")
        .and_then(FieldValue::as_list)
        .expect("list");
    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0], Scalar::from("SX5E 03/15/24 P4600 Index"));
}

#[tokio::test]
async fn bdp_sends_overrides_in_order() {
    let (mut blp, controller) = connected().await;
    let overrides = vec![
        FieldOverride::new("EQY_FUND_CRNCY", "EUR"),
        FieldOverride::new("BEST_FPERIOD_OVERRIDE", "1BF"),
    ];
    blp.bdp([ABC], ["PX_LAST"], overrides.clone())
        .await
        .expect("bdp");

    let reqs = controller.requests().await;
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].overrides(), overrides.as_slice());
    assert_eq!(reqs[0].securities(), [ABC.to_string()]);
}

#[tokio::test]
async fn bdp_values_validates_before_sending() {
    let (mut blp, controller) = connected().await;

    let err = blp
        .bdp_values(&json!(ABC), &json!(["PX_LAST"]), None)
        .await
        .expect_err("bare string");
    assert!(err.is_argument_error());

    let err = blp
        .bdp_values(
            &json!([ABC]),
            &json!(["PX_LAST"]),
            Some(&json!({"EQY_FUND_CRNCY": "EUR"})),
        )
        .await
        .expect_err("override mapping outside a list");
    assert!(err.is_argument_error());

    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn bdp_values_accepts_override_objects() {
    let (mut blp, controller) = connected().await;
    let table = blp
        .bdp_values(
            &json!([ABC]),
            &json!(["PX_LAST"]),
            Some(&json!([{"EQY_FUND_CRNCY": "EUR"}, {"FUND_PER": 4}])),
        )
        .await
        .expect("bdp");
    assert!(table.contains_ticker(ABC));

    let reqs = controller.requests().await;
    assert_eq!(
        reqs[0].overrides(),
        [
            FieldOverride::new("EQY_FUND_CRNCY", "EUR"),
            FieldOverride::new("FUND_PER", "4"),
        ]
    );
}

#[tokio::test]
async fn bdp_rejects_empty_lists() {
    let (mut blp, _) = connected().await;
    let err = blp
        .bdp(Vec::<String>::new(), ["PX_LAST"], vec![])
        .await
        .expect_err("empty tickers");
    assert!(matches!(err, BbgError::InvalidArgumentType(_)));
}

#[tokio::test]
async fn bdp_skips_heartbeats_between_partial_responses() {
    let (mut blp, controller) = connected().await;
    controller
        .push_events(vec![
            MockEvent::heartbeat(),
            MockEvent::partial(vec![reference_response(vec![
                SecurityBuilder::new(ABC).field("PX_LAST", 101.5).build(),
            ])]),
            MockEvent::heartbeat(),
            MockEvent::response(vec![reference_response(vec![
                SecurityBuilder::new(IBM).field("PX_LAST", 183.2).build(),
            ])]),
        ])
        .await;

    let table = blp.bdp([ABC, IBM], ["PX_LAST"], vec![]).await.expect("bdp");
    assert_eq!(table.len(), 2);
}
