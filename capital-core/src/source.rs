//! Raw record sources consumed by [`CountryStore::load`](crate::CountryStore::load).

use std::collections::HashMap;
use std::error::Error as StdError;

use thiserror::Error;

/// One untyped row keyed by column label.
pub type RawRecord = HashMap<String, String>;

/// Iterator over the rows of a source; each row may fail independently.
pub type RecordIter<'a> = Box<dyn Iterator<Item = Result<RawRecord, RecordError>> + 'a>;

/// Column labels understood by the normaliser.
///
/// Labels are matched exactly, including case and punctuation.
pub mod columns {
    /// Country name.
    pub const NAME: &str = "Country";
    /// Capital or major city.
    pub const CAPITAL: &str = "Capital/Major City";
    /// Population with optional thousands separators.
    pub const POPULATION: &str = "Population";
    /// Country abbreviation.
    pub const CODE: &str = "Abbreviation";
    /// Land area in square kilometres.
    pub const AREA: &str = "Land Area(Km2)";
    /// Currency name or code.
    pub const CURRENCY: &str = "Currency-Code";
    /// Official language.
    pub const LANGUAGE: &str = "Official language";
}

/// The source as a whole could not be read.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Opening the underlying resource failed.
    #[error("failed to open country source {location}: {source}")]
    Open {
        /// Human-readable location of the source.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The resource opened but its structure could not be read.
    #[error("failed to read country source {location}: {source}")]
    Read {
        /// Human-readable location of the source.
        location: String,
        /// Decoder error raised by the adapter.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// A single row could not be decoded.
#[derive(Debug, Error)]
#[error("row {row} could not be read: {source}")]
pub struct RecordError {
    /// One-based data row number.
    pub row: usize,
    /// Decoder error raised by the adapter.
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

/// Supplies raw country rows to the store at load time.
///
/// Adapters (CSV files, fixtures, in-memory tables) implement this trait;
/// the store never performs I/O itself.
///
/// # Examples
///
/// ```
/// use capital_core::{RawRecord, RecordSource};
///
/// let rows: Vec<RawRecord> = vec![RawRecord::from([("Country".into(), "Peru".into())])];
/// let read: Vec<_> = rows.records().expect("in-memory rows").collect();
/// assert_eq!(read.len(), 1);
/// ```
pub trait RecordSource {
    /// Describe where the rows come from, for diagnostics.
    fn describe(&self) -> String;

    /// Open the source and iterate over its rows.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the source cannot be opened or its
    /// structure (such as a header row) cannot be read.
    fn records(&self) -> Result<RecordIter<'_>, SourceError>;
}

impl RecordSource for [RawRecord] {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.len())
    }

    fn records(&self) -> Result<RecordIter<'_>, SourceError> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl RecordSource for Vec<RawRecord> {
    fn describe(&self) -> String {
        self.as_slice().describe()
    }

    fn records(&self) -> Result<RecordIter<'_>, SourceError> {
        self.as_slice().records()
    }
}
