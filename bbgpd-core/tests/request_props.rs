use bbgpd_core::{HistoricalTable, RequestKind, RequestSpec, Scalar, reduce};
use bbgpd_mock::{HistoryBuilder, MockEvent};
use chrono::NaiveDate;
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_ticker() -> impl Strategy<Value = String> {
    "[A-Z]{1,5} (Equity|Index|Curncy)"
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3_000).prop_map(|n| {
        NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date") + chrono::Days::new(n as u64)
    })
}

proptest! {
    #[test]
    fn from_values_preserves_order_and_duplicates(
        tickers in proptest::collection::vec(arb_ticker(), 1..8),
        fields in proptest::collection::vec("[A-Z_]{2,12}", 1..6),
    ) {
        let spec = RequestSpec::from_values(
            RequestKind::PointInTime,
            &json!(tickers),
            &json!(fields),
            None,
            None,
        ).unwrap();
        prop_assert_eq!(spec.securities(), tickers.as_slice());
        prop_assert_eq!(spec.fields(), fields.as_slice());
    }

    #[test]
    fn non_string_members_are_rejected(
        tickers in proptest::collection::vec(arb_ticker(), 0..4),
        bad in any::<i64>(),
        pos in 0usize..4,
    ) {
        let mut items: Vec<Value> = tickers.into_iter().map(Value::String).collect();
        let at = pos.min(items.len());
        items.insert(at, json!(bad));
        let err = RequestSpec::from_values(
            RequestKind::PointInTime,
            &Value::Array(items),
            &json!(["PX_LAST"]),
            None,
            None,
        ).unwrap_err();
        prop_assert!(err.is_argument_error());
    }

    #[test]
    fn historical_dates_are_sent_compact(start in arb_date(), end in arb_date()) {
        let spec = RequestSpec::from_values(
            RequestKind::Historical,
            &json!(["ABC Equity"]),
            &json!(["PX_LAST"]),
            None,
            Some((&json!(start.format("%Y-%m-%d").to_string()), &json!(end.format("%Y%m%d").to_string()))),
        ).unwrap();
        let range = spec.date_range().unwrap();
        prop_assert_eq!(range.start, start);
        prop_assert_eq!(range.end, end);
        prop_assert_eq!(range.start_str(), start.format("%Y%m%d").to_string());
    }

    #[test]
    fn historical_reduction_equals_per_message_merge(
        rows in proptest::collection::vec((arb_date(), proptest::option::of(0i64..1_000_000)), 0..40),
        split in 0usize..40,
    ) {
        // One security split across two messages must reduce like both halves merged.
        let split = split.min(rows.len());
        let (first, second) = rows.split_at(split);
        let build = |part: &[(NaiveDate, Option<i64>)]| {
            part.iter().fold(HistoryBuilder::new("ABC Equity"), |b, (date, px)| {
                let values = px.map(|v| vec![("PX_LAST", Scalar::Int(v))]).unwrap_or_default();
                b.row(*date, values)
            }).build()
        };
        let fields = vec!["PX_LAST".to_string()];

        let whole = reduce(
            RequestKind::Historical,
            &fields,
            vec![
                MockEvent::partial(vec![build(first)]).into_event(),
                MockEvent::response(vec![build(second)]).into_event(),
            ],
        ).unwrap().into_historical().unwrap();

        let mut merged = HistoricalTable::new();
        for part in [first, second] {
            let t = reduce(
                RequestKind::Historical,
                &fields,
                vec![MockEvent::response(vec![build(part)]).into_event()],
            ).unwrap().into_historical().unwrap();
            merged.merge(t);
        }
        prop_assert_eq!(whole, merged);
    }
}
