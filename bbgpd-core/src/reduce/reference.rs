use crate::names;
use crate::session::{Element, children};
use crate::types::{FieldValue, ReferenceRow, ReferenceTable, Scalar};

use super::{error_summary, log_field_exceptions, security_entries, ticker_of};

/// Fold the `securityData` array of a reference data message.
///
/// Rejected securities get no row. Requested fields the vendor did not return
/// are left out of the row rather than stored as null.
pub(super) fn fold_security_data(
    table: &mut ReferenceTable,
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
            tracing::error!(ticker = %ticker, error = %error_summary(err), "wrong ticker");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
            continue;
        }
        log_field_exceptions(&ticker, security);

        let mut row = ReferenceRow::new();
        if let Some(field_data) = security.get_element(names::FIELD_DATA) {
            for name in fields {
                let Some(field) = field_data.get_element(name) else {
                    continue;
                };
                if field.is_array() {
                    row.insert(name.clone(), FieldValue::List(flatten_array(field)));
                } else if let Some(v) = field.value() {
                    row.insert(name.clone(), FieldValue::Scalar(v));
                }
            }
        }
        table.insert_row(ticker, row);
    }
}

/// Flatten an array-valued field (chain, member lists, ...) into one list.
///
/// Every sub-element of every record is taken, record order first, then
/// sub-element order. Arrays of plain scalars are taken as they are.
fn flatten_array(field: &dyn Element) -> Vec<Scalar> {
    let mut out = Vec::new();
    for i in 0..field.num_values() {
        if let Some(record) = field.value_as_element(i) {
            for sub in children(record) {
                match sub.value() {
                    Some(v) => out.push(v),
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(field = field.name(), sub = sub.name(), "non-scalar sub-element skipped");
                    }
                }
            }
        } else if let Some(v) = field.value_at(i) {
            out.push(v);
        }
    }
    out
}
