//! Result tables produced by the response reducer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::value::{FieldValue, Scalar};

/// Field name → value for one security in a point-in-time table.
pub type ReferenceRow = BTreeMap<String, FieldValue>;

/// Field name → value (or null) for one security on one date.
pub type HistoricalRow = BTreeMap<String, Option<Scalar>>;

/// Point-in-time result: ticker → field → value.
///
/// Fields the vendor did not return are absent from the row rather than null,
/// and securities the vendor rejected have no row at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    rows: BTreeMap<String, ReferenceRow>,
}

impl ReferenceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the row for `ticker`, replacing any row previously stored for it.
    pub fn insert_row(&mut self, ticker: impl Into<String>, row: ReferenceRow) {
        self.rows.insert(ticker.into(), row);
    }

    /// Row of a ticker, if the vendor returned one.
    #[must_use]
    pub fn row(&self, ticker: &str) -> Option<&ReferenceRow> {
        self.rows.get(ticker)
    }

    /// Single cell lookup.
    #[must_use]
    pub fn get(&self, ticker: &str, field: &str) -> Option<&FieldValue> {
        self.rows.get(ticker).and_then(|r| r.get(field))
    }

    /// Whether a row exists for `ticker`.
    #[must_use]
    pub fn contains_ticker(&self, ticker: &str) -> bool {
        self.rows.contains_key(ticker)
    }

    /// Tickers with a row, sorted.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Iterate over `(ticker, row)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceRow)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of securities with a row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no security produced a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Transpose into field → ticker → value: fields as rows, securities as columns.
    #[must_use]
    pub fn fields_by_ticker(&self) -> BTreeMap<String, BTreeMap<String, FieldValue>> {
        let mut out: BTreeMap<String, BTreeMap<String, FieldValue>> = BTreeMap::new();
        for (ticker, row) in &self.rows {
            for (field, value) in row {
                out.entry(field.clone())
                    .or_default()
                    .insert(ticker.clone(), value.clone());
            }
        }
        out
    }

    /// Consume the table into its underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, ReferenceRow> {
        self.rows
    }
}

/// Historical result: ticker → date → field → value or null.
///
/// Cells accumulate across partial responses; writing one cell never drops
/// other dates or fields already stored for the same ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoricalTable {
    series: BTreeMap<String, BTreeMap<NaiveDate, HistoricalRow>>,
}

impl HistoricalTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `ticker` has a (possibly empty) series.
    pub fn touch(&mut self, ticker: &str) {
        if !self.series.contains_key(ticker) {
            self.series.insert(ticker.to_string(), BTreeMap::new());
        }
    }

    /// Write one cell, creating the ticker and date rows as needed.
    pub fn set(&mut self, ticker: &str, date: NaiveDate, field: &str, value: Option<Scalar>) {
        self.touch(ticker);
        if let Some(series) = self.series.get_mut(ticker) {
            series
                .entry(date)
                .or_default()
                .insert(field.to_string(), value);
        }
    }

    /// Cell lookup: `None` when the cell was never written, `Some(None)` for an explicit null.
    #[must_use]
    pub fn get(&self, ticker: &str, date: NaiveDate, field: &str) -> Option<&Option<Scalar>> {
        self.series
            .get(ticker)
            .and_then(|s| s.get(&date))
            .and_then(|r| r.get(field))
    }

    /// Date-indexed rows of a ticker.
    #[must_use]
    pub fn series(&self, ticker: &str) -> Option<&BTreeMap<NaiveDate, HistoricalRow>> {
        self.series.get(ticker)
    }

    /// Dates present for a ticker, ascending.
    pub fn dates(&self, ticker: &str) -> impl Iterator<Item = NaiveDate> + '_ {
        self.series
            .get(ticker)
            .into_iter()
            .flat_map(|s| s.keys().copied())
    }

    /// Tickers present, sorted.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Whether a series exists for `ticker`.
    #[must_use]
    pub fn contains_ticker(&self, ticker: &str) -> bool {
        self.series.contains_key(ticker)
    }

    /// Number of tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when no ticker has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Fold another table into this one cell by cell.
    pub fn merge(&mut self, other: Self) {
        for (ticker, series) in other.series {
            self.touch(&ticker);
            for (date, row) in series {
                for (field, value) in row {
                    self.set(&ticker, date, &field, value);
                }
            }
        }
    }

    /// Consume the table into its underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, BTreeMap<NaiveDate, HistoricalRow>> {
        self.series
    }
}
