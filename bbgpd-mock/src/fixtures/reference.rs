use bbgpd_core::Scalar;

use crate::element::MockElement;
use crate::messages::{SecurityBuilder, reference_response};
use crate::request::MockRequest;

enum Value {
    Px(f64),
    Text(&'static str),
    Count(i64),
    Chain(&'static [&'static str]),
}

fn by_ticker(ticker: &str) -> Option<Vec<(&'static str, Value)>> {
    use Value::{Chain, Count, Px, Text};
    match ticker {
        "ABC Equity" => Some(vec![
            ("PX_LAST", Px(101.5)),
            ("NAME", Text("ABC Corp")),
            ("CRNCY", Text("USD")),
            ("VOLUME", Count(1_250_000)),
        ]),
        "IBM US Equity" => Some(vec![
            ("PX_LAST", Px(183.2)),
            ("NAME", Text("International Business Machines Corp")),
            ("CRNCY", Text("USD")),
            ("VOLUME", Count(3_410_000)),
        ]),
        "VOD LN Equity" => Some(vec![
            ("PX_LAST", Px(72.38)),
            ("NAME", Text("Vodafone Group PLC")),
            ("CRNCY", Text("GBp")),
        ]),
        "SX5E Index" => Some(vec![
            ("PX_LAST", Px(4890.3)),
            ("NAME", Text("Euro Stoxx 50 Pr")),
            (
                "CHAIN_TICKERS",
                Chain(&[
                    "SX5E 03/15/24 P4600 Index",
                    "SX5E 03/15/24 P4800 Index",
                    "SX5E 03/15/24 P5000 Index",
                ]),
            ),
        ]),
        _ => None,
    }
}

/// Reference data message answering every security of `req`.
pub fn reply(req: &MockRequest) -> MockElement {
    let securities = req
        .securities()
        .iter()
        .map(|ticker| security(ticker, req.fields()))
        .collect();
    reference_response(securities)
}

fn security(ticker: &str, fields: &[String]) -> MockElement {
    let Some(values) = by_ticker(ticker) else {
        return SecurityBuilder::new(ticker)
            .error("BAD_SEC", "Unknown/Invalid security")
            .build();
    };
    let mut b = SecurityBuilder::new(ticker);
    for (name, value) in values {
        if !fields.iter().any(|f| f == name) {
            continue;
        }
        b = match value {
            Value::Px(v) => b.field(name, v),
            Value::Text(v) => b.field(name, v),
            Value::Count(v) => b.field(name, v),
            Value::Chain(tickers) => b.array_field(
                name,
                tickers
                    .iter()
                    .map(|t| vec![("Security Description", Scalar::from(*t))])
                    .collect(),
            ),
        };
    }
    b.build()
}
