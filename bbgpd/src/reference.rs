use bbgpd_core::{BbgError, FieldOverride, ReferenceTable, RequestKind, RequestSpec};
use serde_json::Value;

use crate::Blp;

impl Blp {
    /// Current values of `fields` for each ticker.
    ///
    /// Securities the vendor rejects get no row; fields it does not return are
    /// left out of their row. Array fields are flattened into one list.
    ///
    /// # Errors
    /// Returns `InvalidArgumentType` for an empty ticker or field list, and any
    /// session error raised while the request is sent or drained.
    pub async fn bdp<S, F>(
        &mut self,
        tickers: S,
        fields: F,
        overrides: Vec<FieldOverride>,
    ) -> Result<ReferenceTable, BbgError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        let spec = RequestSpec::point_in_time(tickers, fields, overrides)?;
        self.reference(&spec).await
    }

    /// [`Blp::bdp`] taking loosely typed arguments.
    ///
    /// `tickers` and `fields` must be arrays of strings; `overrides`, when given
    /// and not null, an array of `{field: value}` objects.
    ///
    /// # Errors
    /// Returns `InvalidArgumentType` for any argument of the wrong shape, and
    /// the errors of [`Blp::bdp`].
    pub async fn bdp_values(
        &mut self,
        tickers: &Value,
        fields: &Value,
        overrides: Option<&Value>,
    ) -> Result<ReferenceTable, BbgError> {
        let spec =
            RequestSpec::from_values(RequestKind::PointInTime, tickers, fields, overrides, None)?;
        self.reference(&spec).await
    }

    async fn reference(&mut self, spec: &RequestSpec) -> Result<ReferenceTable, BbgError> {
        self.run(spec)
            .await?
            .into_reference()
            .ok_or_else(|| BbgError::Other("point-in-time request produced no reference table".into()))
    }
}
