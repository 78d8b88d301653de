use bbgpd_core::Scalar;
use chrono::NaiveDate;

use crate::messages::{HistoryBuilder, MockEvent};
use crate::request::MockRequest;

type Row = (&'static str, Option<f64>, Option<i64>);

fn by_ticker(ticker: &str) -> Option<&'static [Row]> {
    const ABC: &[Row] = &[
        ("2024-01-02", Some(101.5), Some(1_000_000)),
        ("2024-01-03", None, Some(900_000)),
        ("2024-01-04", Some(102.25), Some(1_100_000)),
        ("2024-01-05", Some(103.0), None),
    ];
    const IBM: &[Row] = &[
        ("2024-01-02", Some(158.6), Some(4_100_000)),
        ("2024-01-03", Some(157.0), Some(3_900_000)),
        ("2024-01-04", Some(158.2), Some(3_700_000)),
        ("2024-01-05", Some(159.2), Some(3_500_000)),
    ];
    match ticker {
        "ABC Equity" => Some(ABC),
        "IBM US Equity" => Some(IBM),
        _ => None,
    }
}

/// One message per security; every security but the last arrives as a partial response.
pub fn reply(req: &MockRequest) -> Vec<MockEvent> {
    let bounds = req.date_bounds();
    let mut messages: Vec<_> = req
        .securities()
        .iter()
        .map(|ticker| security(ticker, req.fields(), bounds))
        .collect();

    let last = messages.pop();
    let mut events: Vec<MockEvent> = messages
        .into_iter()
        .map(|m| MockEvent::partial(vec![m]))
        .collect();
    events.push(MockEvent::response(last.into_iter().collect()));
    events
}

fn security(
    ticker: &str,
    fields: &[String],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> crate::element::MockElement {
    let Some(rows) = by_ticker(ticker) else {
        return HistoryBuilder::new(ticker)
            .error("BAD_SEC", "Unknown/Invalid security")
            .build();
    };
    let mut b = HistoryBuilder::new(ticker);
    for &(date, px, volume) in rows {
        let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            continue;
        };
        if let Some((start, end)) = bounds
            && !(start <= date && date <= end)
        {
            continue;
        }
        let mut values = Vec::new();
        for field in fields {
            match (field.as_str(), px, volume) {
                ("PX_LAST", Some(v), _) => values.push(("PX_LAST", Scalar::Float(v))),
                ("VOLUME", _, Some(v)) => values.push(("VOLUME", Scalar::Int(v))),
                _ => {}
            }
        }
        b = b.row(date, values);
    }
    b.build()
}
