use bbgpd_core::{BbgError, FieldOverride, HistoricalTable, RequestKind, RequestSpec};
use chrono::NaiveDate;
use serde_json::Value;

use crate::Blp;

impl Blp {
    /// Daily values of `fields` for each ticker over `[start, end]`.
    ///
    /// Every date the vendor returns gets a row with all requested fields;
    /// fields missing that day are null. A rejected security is logged and
    /// whatever records came with it are kept.
    ///
    /// # Errors
    /// Returns `InvalidArgumentType` for an empty ticker or field list, and any
    /// session error raised while the request is sent or drained.
    pub async fn bdh<S, F>(
        &mut self,
        tickers: S,
        fields: F,
        start: NaiveDate,
        end: NaiveDate,
        overrides: Vec<FieldOverride>,
    ) -> Result<HistoricalTable, BbgError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let spec = RequestSpec::historical(tickers, fields, start, end, overrides)?;
        self.historical(&spec).await
    }

    /// [`Blp::bdh`] taking loosely typed arguments.
    ///
    /// Dates must be strings in `YYYY-MM-DD` or `YYYYMMDD` form.
    ///
    /// # Errors
    /// Returns `InvalidArgumentType` for any argument of the wrong shape, and
    /// the errors of [`Blp::bdh`].
    pub async fn bdh_values(
        &mut self,
        tickers: &Value,
        fields: &Value,
        start: &Value,
        end: &Value,
        overrides: Option<&Value>,
    ) -> Result<HistoricalTable, BbgError> {
        let spec = RequestSpec::from_values(
            RequestKind::Historical,
            tickers,
            fields,
            overrides,
            Some((start, end)),
        )?;
        self.historical(&spec).await
    }

    async fn historical(&mut self, spec: &RequestSpec) -> Result<HistoricalTable, BbgError> {
        self.run(spec)
            .await?
            .into_historical()
            .ok_or_else(|| BbgError::Other("historical request produced no historical table".into()))
    }
}
