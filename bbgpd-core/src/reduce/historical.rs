use crate::names;
use crate::session::Element;
use crate::types::HistoricalTable;

use super::{error_summary, log_field_exceptions, security_entries, ticker_of};

/// Fold the `securityData` of a historical data message.
///
/// A security error is logged but does not stop its records from being folded.
/// Each dated record writes every requested field: the value when present,
/// null when the record lacks it. Cells from earlier messages are kept.
pub(super) fn fold_security_data(
    table: &mut HistoricalTable,
    fields: &[String],
    security_data: &dyn Element,
) {
    for security in security_entries(security_data) {
        let Some(ticker) = ticker_of(security) else {
            #[cfg(feature = "tracing")]
            tracing::warn!("security entry without ticker skipped");
            continue;
        };
        if let Some(err) = security.get_element(names::SECURITY_ERROR) {
            #[cfg(feature = "tracing")]
            tracing::error!(ticker = %ticker, error = %error_summary(err), "security error");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
        }
        log_field_exceptions(&ticker, security);

        let Some(field_data) = security.get_element(names::FIELD_DATA) else {
            continue;
        };
        table.touch(&ticker);
        for record in security_entries(field_data) {
            let Some(date) = record
                .get_element(names::DATE)
                .and_then(Element::value)
                .and_then(|v| v.as_date())
            else {
                #[cfg(feature = "tracing")]
                tracing::warn!(ticker = %ticker, "historical record without a date skipped");
                continue;
            };
            for name in fields {
                let value = record.get_element(name).and_then(Element::value);
                table.set(&ticker, date, name, value);
            }
        }
    }
}
