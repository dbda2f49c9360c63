//! Conversion of raw rows into [`Country`] values.
//!
//! Field validators run first (`parse_number`, `clean_language`), then
//! [`Country::new`] trims every string and collapses empty strings, zeroes and
//! short codes to `None`.

use thiserror::Error;

use crate::{Country, CountryDraft, CountryError, RawRecord, columns};

/// Separator stripped from numeric fields before parsing.
const THOUSANDS_SEPARATOR: char = ',';

/// Word removed from language values.
const LANGUAGE_WORD: &str = "language";

/// Reasons a row fails normalisation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormaliseError {
    /// A numeric column held something other than digit groups.
    #[error("{column} value {value:?} is not a whole number")]
    InvalidNumber {
        /// Column label of the offending value.
        column: &'static str,
        /// Raw value as read from the source.
        value: String,
    },
    /// The required fields did not survive validation.
    #[error(transparent)]
    Country(#[from] CountryError),
}

/// Report whether a row carries non-blank name and capital values.
///
/// The loader skips rows failing this check before normalisation.
#[must_use]
pub fn has_required_fields(record: &RawRecord) -> bool {
    [columns::NAME, columns::CAPITAL]
        .iter()
        .all(|column| record.get(*column).is_some_and(|value| !value.trim().is_empty()))
}

/// Normalise one raw row into a [`Country`].
///
/// # Errors
/// Returns [`NormaliseError::InvalidNumber`] when the population or area is
/// not numeric, and [`NormaliseError::Country`] when the name or capital is
/// blank.
///
/// # Examples
///
/// ```
/// use capital_core::{RawRecord, columns, normalise_record};
///
/// let record = RawRecord::from([
///     (columns::NAME.to_owned(), "France".to_owned()),
///     (columns::CAPITAL.to_owned(), "Paris".to_owned()),
///     (columns::POPULATION.to_owned(), "67,391,582".to_owned()),
///     (columns::LANGUAGE.to_owned(), "French language".to_owned()),
/// ]);
/// let country = normalise_record(&record).expect("valid row");
/// assert_eq!(country.population(), Some(67_391_582));
/// assert_eq!(country.language(), Some("French"));
/// ```
pub fn normalise_record(record: &RawRecord) -> Result<Country, NormaliseError> {
    let field = |column: &str| record.get(column).map(String::as_str);

    let draft = CountryDraft {
        name: field(columns::NAME).unwrap_or_default().to_owned(),
        capital: field(columns::CAPITAL).unwrap_or_default().to_owned(),
        population: optional_number(columns::POPULATION, field(columns::POPULATION))?,
        code: field(columns::CODE).map(str::to_owned),
        area: optional_number(columns::AREA, field(columns::AREA))?,
        currency: field(columns::CURRENCY).map(str::to_owned),
        language: field(columns::LANGUAGE).and_then(clean_language),
    };
    Country::new(draft).map_err(NormaliseError::from)
}

fn optional_number(
    column: &'static str,
    value: Option<&str>,
) -> Result<Option<u64>, NormaliseError> {
    value.map_or(Ok(None), |raw| parse_number(column, raw))
}

/// Parse a whole number that may contain thousands separators.
///
/// Blank input yields `Ok(None)`; zero is returned as `Some(0)` and collapsed
/// later by [`Country::new`].
///
/// # Errors
/// Returns [`NormaliseError::InvalidNumber`] when anything other than digits
/// remains after removing separators and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use capital_core::parse_number;
///
/// assert_eq!(parse_number("Population", "67,391,582"), Ok(Some(67_391_582)));
/// assert_eq!(parse_number("Population", " "), Ok(None));
/// assert!(parse_number("Population", "unknown").is_err());
/// ```
pub fn parse_number(column: &'static str, raw: &str) -> Result<Option<u64>, NormaliseError> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|ch| *ch != THOUSANDS_SEPARATOR)
        .collect();
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| NormaliseError::InvalidNumber {
            column,
            value: raw.to_owned(),
        })
}

/// Remove every literal `language` from a value and trim the remainder.
///
/// Matching is case-sensitive. Returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use capital_core::clean_language;
///
/// assert_eq!(clean_language("English language"), Some("English".to_owned()));
/// assert_eq!(clean_language("language"), None);
/// assert_eq!(clean_language("Language"), Some("Language".to_owned()));
/// ```
#[must_use]
pub fn clean_language(raw: &str) -> Option<String> {
    let cleaned = raw.replace(LANGUAGE_WORD, "");
    let trimmed = cleaned.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
