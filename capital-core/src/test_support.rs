//! Builders and stand-in stores shared by unit and behaviour tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::RngCore;

use crate::{
    Country, CountryDraft, CountryQuery, RawRecord, RecordIter, RecordSource, SourceError, columns,
};

/// Build a country with only a name, capital and optional code.
///
/// # Panics
/// Panics when `name` or `capital` is blank.
#[must_use]
#[expect(clippy::expect_used, reason = "test builders fail loudly on bad input")]
pub fn country(name: &str, capital: &str, code: Option<&str>) -> Country {
    Country::new(CountryDraft {
        name: name.to_owned(),
        capital: capital.to_owned(),
        code: code.map(str::to_owned),
        ..CountryDraft::default()
    })
    .expect("test countries need a name and a capital")
}

/// Build a raw row carrying a name, capital and optional code.
#[must_use]
pub fn record(name: &str, capital: &str, code: Option<&str>) -> RawRecord {
    let mut row = RawRecord::from([
        (columns::NAME.to_owned(), name.to_owned()),
        (columns::CAPITAL.to_owned(), capital.to_owned()),
    ]);
    if let Some(code) = code {
        row.insert(columns::CODE.to_owned(), code.to_owned());
    }
    row
}

/// France, Germany, Japan and Brazil with their codes and capitals.
#[must_use]
pub fn sample_countries() -> Vec<Country> {
    vec![
        country("France", "Paris", Some("FR")),
        country("Germany", "Berlin", Some("DE")),
        country("Japan", "Tokyo", Some("JP")),
        country("Brazil", "Brasília", Some("BR")),
    ]
}

/// A [`RecordSource`] that can never be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSource;

impl RecordSource for FailingSource {
    fn describe(&self) -> String {
        "unavailable test source".to_owned()
    }

    fn records(&self) -> Result<RecordIter<'_>, SourceError> {
        Err(SourceError::Open {
            location: self.describe(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such source"),
        })
    }
}

/// A [`CountryQuery`] whose random draws follow a fixed script.
///
/// Each call to [`CountryQuery::random`] returns the country at the next
/// scripted position, cycling once the script runs out. Lookups scan
/// linearly.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    countries: Vec<Country>,
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl ScriptedStore {
    /// Create a store drawing `countries` in `script` order.
    #[must_use]
    pub const fn new(countries: Vec<Country>, script: Vec<usize>) -> Self {
        Self {
            countries,
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of random draws served so far.
    #[must_use]
    pub fn draws_taken(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl CountryQuery for ScriptedStore {
    fn all(&self) -> &[Country] {
        &self.countries
    }

    fn random(&self, _rng: &mut dyn RngCore) -> Option<&Country> {
        let draw = self.cursor.fetch_add(1, Ordering::Relaxed);
        let position = self.script.iter().cycle().nth(draw)?;
        self.countries.get(*position)
    }

    fn search(&self, query: &str) -> Option<&Country> {
        let key = query.to_lowercase();
        self.countries.iter().find(|country| {
            country.name().to_lowercase() == key
                || country.code().is_some_and(|code| code.to_lowercase() == key)
        })
    }
}
