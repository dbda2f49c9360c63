//! One-shot loading of a [`CountryStore`] from a [`RecordSource`].

use log::{error, info, warn};
use thiserror::Error;

use super::CountryStore;
use crate::{
    Country, NormaliseError, RawRecord, RecordError, RecordSource, SourceError,
    has_required_fields, normalise_record,
};

/// Why a single row was discarded.
#[derive(Debug, Error)]
pub enum RowError {
    /// The adapter could not decode the row.
    #[error(transparent)]
    Unreadable(#[from] RecordError),
    /// The row decoded but failed normalisation.
    #[error(transparent)]
    Invalid(#[from] NormaliseError),
}

/// Diagnostic for a discarded row.
#[derive(Debug)]
pub struct RowRejection {
    /// One-based data row number.
    pub row: usize,
    /// Row content as read; empty when the row could not be decoded.
    pub record: RawRecord,
    /// Reason the row was discarded.
    pub reason: RowError,
}

/// Outcome of [`CountryStore::load_with_report`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Distinct countries held by the store.
    pub loaded: usize,
    /// Rows lacking a name or capital, skipped before normalisation.
    pub skipped: usize,
    /// Valid rows that duplicated an earlier country exactly.
    pub duplicates: usize,
    /// Rows discarded with a diagnostic.
    pub rejections: Vec<RowRejection>,
    /// Set when the source could not be read at all.
    pub source_error: Option<SourceError>,
}

impl LoadReport {
    /// Whether every row made it into the store.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.source_error.is_none() && self.rejections.is_empty() && self.skipped == 0
    }
}

impl CountryStore {
    /// Load, normalise and index every row from `source`.
    ///
    /// Failures never escape: rejected rows are logged and dropped, and an
    /// unreadable source leaves the store empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use capital_core::{CountryQuery, CountryStore, RawRecord, columns};
    ///
    /// let records = vec![
    ///     RawRecord::from([
    ///         (columns::NAME.to_owned(), "Chile".to_owned()),
    ///         (columns::CAPITAL.to_owned(), "Santiago".to_owned()),
    ///     ]),
    ///     RawRecord::from([(columns::NAME.to_owned(), "Nowhere".to_owned())]),
    /// ];
    /// let store = CountryStore::load(&records);
    /// assert_eq!(store.all().len(), 1);
    /// ```
    #[must_use]
    pub fn load<S>(source: &S) -> Self
    where
        S: RecordSource + ?Sized,
    {
        Self::load_with_report(source).0
    }

    /// Load like [`CountryStore::load`], also returning per-row outcomes.
    pub fn load_with_report<S>(source: &S) -> (Self, LoadReport)
    where
        S: RecordSource + ?Sized,
    {
        let location = source.describe();
        let mut report = LoadReport::default();
        let mut accepted = Vec::new();

        match source.records() {
            Ok(records) => {
                for (position, outcome) in records.enumerate() {
                    let row = position + 1;
                    match outcome {
                        Ok(record) => {
                            accept_record(row, record, &mut accepted, &mut report);
                        }
                        Err(err) => {
                            warn!("Skipping unreadable row {row} in {location}: {err}");
                            report.rejections.push(RowRejection {
                                row,
                                record: RawRecord::new(),
                                reason: RowError::from(err),
                            });
                        }
                    }
                }
            }
            Err(err) => {
                error!("Error reading country source: {err}");
                report.source_error = Some(err);
            }
        }

        let accepted_count = accepted.len();
        let store = Self::from_countries(accepted);
        report.loaded = store.len();
        report.duplicates = accepted_count - store.len();
        info!(
            "{} countries loaded from {location} ({} skipped, {} rejected, {} duplicates)",
            report.loaded,
            report.skipped,
            report.rejections.len(),
            report.duplicates
        );
        (store, report)
    }
}

fn accept_record(
    row: usize,
    record: RawRecord,
    accepted: &mut Vec<Country>,
    report: &mut LoadReport,
) {
    if !has_required_fields(&record) {
        report.skipped += 1;
        return;
    }
    match normalise_record(&record) {
        Ok(country) => accepted.push(country),
        Err(err) => {
            warn!("Error parsing country on row {row}: {err} ({record:?})");
            report.rejections.push(RowRejection {
                row,
                record,
                reason: RowError::from(err),
            });
        }
    }
}
