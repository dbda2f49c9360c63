//! File adapters that feed country rows into `capital-core`.
//!
//! Responsibilities:
//! - Read the tabular country file with the `csv` crate.
//! - Present rows as [`capital_core::RawRecord`] values through
//!   [`capital_core::RecordSource`].
//!
//! Boundaries:
//! - Normalisation and validation live in `capital-core`.
//! - Files are opened through `capital-fs`; nothing here touches `std::fs`.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use capital_core::{CountryStore, LoadReport};

mod source;

pub use source::CsvRecordSource;

/// Location of the bundled country table, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data/countries.csv";

/// Load every country from the CSV file at `path`.
///
/// A missing or unreadable file yields an empty store; the report carries the
/// reason.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use capital_core::CountryQuery;
///
/// let (store, report) = capital_data::load_countries(Utf8Path::new("data/countries.csv"));
/// println!("{} countries, {} rejected", store.all().len(), report.rejections.len());
/// ```
#[must_use]
pub fn load_countries(path: &Utf8Path) -> (CountryStore, LoadReport) {
    CountryStore::load_with_report(&CsvRecordSource::from_path(path))
}
