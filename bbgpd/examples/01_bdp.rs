use bbgpd::{Blp, FieldOverride};
use bbgpd_mock::MockSession;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Route logs through tracing; RUST_LOG=debug shows the message dumps.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 2. Connect a client over the fixture session.
    let mut blp = Blp::builder()
        .session(MockSession::with_fixtures())
        .debug(true)
        .connect()
        .await?;

    // 3. Current values, with one security the vendor rejects.
    let px = blp
        .bdp(
            ["ABC Equity", "IBM US Equity", "XYZ Equity"],
            ["PX_LAST", "CRNCY"],
            vec![FieldOverride::new("EQY_FUND_CRNCY", "USD")],
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&px)?);

    // 4. Daily history; missing values come back as null.
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).ok_or("bad date")?;
    let end = NaiveDate::from_ymd_opt(2024, 1, 5).ok_or("bad date")?;
    let hist = blp
        .bdh(["ABC Equity"], ["PX_LAST", "VOLUME"], start, end, vec![])
        .await?;
    println!("{}", serde_json::to_string_pretty(&hist)?);

    blp.close().await?;
    Ok(())
}
