//! CSV-backed [`RecordSource`].

use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use capital_core::{RawRecord, RecordError, RecordIter, RecordSource, SourceError};
use capital_fs::open_utf8_file;
use csv::{ReaderBuilder, StringRecord};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    File(Utf8PathBuf),
    Text(String),
}

/// Country rows read from CSV with a header line.
///
/// Header labels become record keys. Short rows leave the trailing columns
/// absent and surplus fields are dropped, so ragged files still load.
///
/// # Examples
///
/// ```
/// use capital_core::{CountryQuery, CountryStore};
/// use capital_data::CsvRecordSource;
///
/// let source = CsvRecordSource::from_text(
///     "Country,Capital/Major City,Abbreviation\nNorway,Oslo,NO\n",
/// );
/// let store = CountryStore::load(&source);
/// assert_eq!(store.search("no").map(|c| c.capital()), Some("Oslo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecordSource {
    origin: Origin,
}

impl CsvRecordSource {
    /// Read rows from the file at `path` when the store loads.
    #[must_use]
    pub fn from_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            origin: Origin::File(path.into()),
        }
    }

    /// Read rows from CSV text held in memory.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Text(text.into()),
        }
    }

    /// Path of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match &self.origin {
            Origin::File(path) => Some(path),
            Origin::Text(_) => None,
        }
    }
}

impl RecordSource for CsvRecordSource {
    fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.to_string(),
            Origin::Text(_) => "inline CSV".to_owned(),
        }
    }

    fn records(&self) -> Result<RecordIter<'_>, SourceError> {
        let location = self.describe();
        debug!("Reading country rows from {location}");
        match &self.origin {
            Origin::File(path) => {
                let file = open_utf8_file(path).map_err(|source| SourceError::Open {
                    location: location.clone(),
                    source,
                })?;
                read_rows(file, location)
            }
            Origin::Text(text) => read_rows(text.as_bytes(), location),
        }
    }
}

fn read_rows<'a, R>(input: R, location: String) -> Result<RecordIter<'a>, SourceError>
where
    R: Read + 'a,
{
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader
        .headers()
        .map_err(|err| SourceError::Read {
            location,
            source: Box::new(err),
        })?
        .clone();

    Ok(Box::new(reader.into_records().enumerate().map(
        move |(position, row)| {
            row.map(|fields| to_record(&headers, &fields))
                .map_err(|err| RecordError {
                    row: position + 1,
                    source: Box::new(err),
                })
        },
    )))
}

fn to_record(headers: &StringRecord, fields: &StringRecord) -> RawRecord {
    headers
        .iter()
        .zip(fields.iter())
        .map(|(column, value)| (column.to_owned(), value.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use capital_core::{CountryQuery, CountryStore, columns};
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Country,Abbreviation,Population,Capital/Major City,Land Area(Km2),Currency-Code,Official language";

    fn rows(source: &CsvRecordSource) -> Vec<RawRecord> {
        source
            .records()
            .expect("readable source")
            .map(|row| row.expect("readable row"))
            .collect()
    }

    #[rstest]
    fn maps_headers_to_keys() {
        let source = CsvRecordSource::from_text(format!(
            "{HEADER}\nFrance,FR,\"67,391,582\",Paris,\"551,695\",EUR,French\n"
        ));
        let [france] = rows(&source).try_into().expect("one row");
        assert_eq!(france.get(columns::NAME).map(String::as_str), Some("France"));
        assert_eq!(
            france.get(columns::POPULATION).map(String::as_str),
            Some("67,391,582")
        );
        assert_eq!(france.get(columns::LANGUAGE).map(String::as_str), Some("French"));
    }

    #[rstest]
    fn short_rows_omit_trailing_columns() {
        let source = CsvRecordSource::from_text(format!("{HEADER}\nNauru,NR\n"));
        let [nauru] = rows(&source).try_into().expect("one row");
        assert_eq!(nauru.len(), 2);
        assert!(!nauru.contains_key(columns::CAPITAL));
    }

    #[rstest]
    fn unknown_columns_are_kept_but_ignored_on_load() {
        let source = CsvRecordSource::from_text(
            "Country,Capital/Major City,Anthem\nPeru,Lima,Somos libres\n",
        );
        let store = CountryStore::load(&source);
        assert_eq!(store.search("peru").map(|c| c.capital()), Some("Lima"));
    }

    #[rstest]
    fn invalid_utf8_rows_are_row_errors() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"Country,Capital/Major City\nChile,Santiago\n\xff\xfe,Bad\n")
            .expect("write csv");
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 path");

        let source = CsvRecordSource::from_path(path);
        let outcomes: Vec<_> = source.records().expect("readable source").collect();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.first().is_some_and(Result::is_ok));
        let Some(Err(err)) = outcomes.get(1) else {
            panic!("expected the second row to fail");
        };
        assert_eq!(err.row, 2);
    }

    #[rstest]
    fn missing_file_is_an_open_error() {
        let source = CsvRecordSource::from_path("definitely/not/here.csv");
        assert_eq!(source.path(), Some(Utf8Path::new("definitely/not/here.csv")));
        assert!(matches!(
            source.records(),
            Err(SourceError::Open { ref location, .. }) if location == "definitely/not/here.csv"
        ));
    }

    #[rstest]
    fn describes_inline_text() {
        let source = CsvRecordSource::from_text("Country\n");
        assert_eq!(source.describe(), "inline CSV");
        assert_eq!(source.path(), None);
        assert!(rows(&source).is_empty());
    }
}
