use bbgpd_types::{
    BbgConfig, BbgError, DateRange, FieldValue, HistoricalTable, ReferenceRow, ReferenceTable,
    Scalar, Verbosity,
};
use chrono::NaiveDate;
use serde_json::json;

#[test]
fn config_roundtrip() {
    let cfg = BbgConfig {
        service: "//blp/refdata".to_string(),
        verbosity: Verbosity::Debug,
        event_timeout: Some(std::time::Duration::from_millis(2500)),
    };

    let s = serde_json::to_string(&cfg).expect("serialize config");
    let de: BbgConfig = serde_json::from_str(&s).expect("deserialize config");

    assert_eq!(de, cfg);
    assert!(de.verbosity.dumps_messages());
}

#[test]
fn default_config_waits_forever_on_refdata() {
    let cfg = BbgConfig::default();
    assert_eq!(cfg.service, "//blp/refdata");
    assert_eq!(cfg.event_timeout, None);
    assert!(!cfg.verbosity.dumps_messages());
}

#[test]
fn error_roundtrip_and_classification() {
    let err = BbgError::invalid_argument("securities must be a list of strings");
    let s = serde_json::to_string(&err).expect("serialize error");
    let de: BbgError = serde_json::from_str(&s).expect("deserialize error");
    assert_eq!(de, err);
    assert!(de.is_argument_error());
    assert!(!BbgError::request_timeout("ReferenceDataRequest").is_argument_error());
}

#[test]
fn reference_table_renders_plain_json() {
    let mut row = ReferenceRow::new();
    row.insert("PX_LAST".into(), FieldValue::from(101.5));
    row.insert(
        "CHAIN_TICKERS".into(),
        FieldValue::List(vec![Scalar::from("A 1 C"), Scalar::from("A 1 P")]),
    );
    let mut table = ReferenceTable::new();
    table.insert_row("ABC Equity", row);

    let v = serde_json::to_value(&table).expect("serialize table");
    assert_eq!(
        v,
        json!({"ABC Equity": {"PX_LAST": 101.5, "CHAIN_TICKERS": ["A 1 C", "A 1 P"]}})
    );
}

#[test]
fn historical_table_renders_nulls_and_iso_dates() {
    let d1 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let d2 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let mut table = HistoricalTable::new();
    table.set("ABC Equity", d1, "PX_LAST", Some(Scalar::Float(101.5)));
    table.set("ABC Equity", d2, "PX_LAST", None);

    let v = serde_json::to_value(&table).expect("serialize table");
    assert_eq!(
        v,
        json!({"ABC Equity": {"2024-01-02": {"PX_LAST": 101.5}, "2024-01-03": {"PX_LAST": null}}})
    );
}

#[test]
fn date_range_formats_compact_dates() {
    let r = DateRange::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    );
    assert_eq!(r.start_str(), "20240301");
    assert_eq!(r.end_str(), "20231231");
    assert!(!r.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
}
