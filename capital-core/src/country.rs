//! Immutable country entities.
//!
//! A [`Country`] can only be obtained through [`Country::new`], which trims
//! every string and collapses "unknown" values to `None`. Fields are private
//! and exposed through accessors, so a constructed value never changes.

use thiserror::Error;

/// Shortest country code kept on a [`Country`]; shorter codes become `None`.
pub const MIN_CODE_LENGTH: usize = 2;

/// Normalised reference data for a single country.
///
/// Equality and hashing cover every field, so two countries built from the
/// same values are interchangeable and collapse to one entry in a set.
///
/// # Examples
///
/// ```
/// use capital_core::{Country, CountryDraft};
///
/// # fn main() -> Result<(), capital_core::CountryError> {
/// let country = Country::new(CountryDraft {
///     name: " France ".into(),
///     capital: "Paris".into(),
///     population: Some(0),
///     code: Some("FR".into()),
///     currency: Some("   ".into()),
///     ..CountryDraft::default()
/// })?;
/// assert_eq!(country.name(), "France");
/// assert_eq!(country.population(), None);
/// assert_eq!(country.code(), Some("FR"));
/// assert_eq!(country.currency(), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Country {
    name: String,
    capital: String,
    population: Option<u64>,
    code: Option<String>,
    area: Option<u64>,
    currency: Option<String>,
    language: Option<String>,
}

/// Unvalidated field values used to construct a [`Country`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryDraft {
    /// Country name; required.
    pub name: String,
    /// Capital or major city; required.
    pub capital: String,
    /// Head count; `0` means unknown.
    pub population: Option<u64>,
    /// Country abbreviation such as `FR`.
    pub code: Option<String>,
    /// Land area in square kilometres; `0` means unknown.
    pub area: Option<u64>,
    /// Currency name or code.
    pub currency: Option<String>,
    /// Official language.
    pub language: Option<String>,
}

/// Errors returned by [`Country::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountryError {
    /// The name was empty after trimming.
    #[error("country name must not be empty")]
    MissingName,
    /// The capital was empty after trimming.
    #[error("capital of {name} must not be empty")]
    MissingCapital {
        /// Name of the country lacking a capital.
        name: String,
    },
}

impl Country {
    /// Validate a draft and construct a [`Country`].
    ///
    /// All strings are trimmed. Afterwards optional strings that are empty
    /// collapse to `None`, as do numeric fields equal to zero and codes
    /// shorter than [`MIN_CODE_LENGTH`] characters.
    ///
    /// # Errors
    /// Returns [`CountryError`] when the name or capital is blank.
    pub fn new(draft: CountryDraft) -> Result<Self, CountryError> {
        let name = draft.name.trim().to_owned();
        if name.is_empty() {
            return Err(CountryError::MissingName);
        }
        let capital = draft.capital.trim().to_owned();
        if capital.is_empty() {
            return Err(CountryError::MissingCapital { name });
        }

        Ok(Self {
            name,
            capital,
            population: non_zero(draft.population),
            code: non_blank(draft.code).filter(|code| code.chars().count() >= MIN_CODE_LENGTH),
            area: non_zero(draft.area),
            currency: non_blank(draft.currency),
            language: non_blank(draft.language),
        })
    }

    /// Country name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capital or major city.
    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }

    /// Population, when known.
    #[must_use]
    pub const fn population(&self) -> Option<u64> {
        self.population
    }

    /// Country abbreviation, when known.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Land area in square kilometres, when known.
    #[must_use]
    pub const fn area(&self) -> Option<u64> {
        self.area
    }

    /// Currency, when known.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Official language, when known.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn non_zero(value: Option<u64>) -> Option<u64> {
    value.filter(|number| *number != 0)
}
