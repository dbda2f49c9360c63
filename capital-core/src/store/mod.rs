//! Read-only access to loaded countries.
//!
//! The [`CountryQuery`] trait is the contract consumed by the quiz generator
//! and by outer service layers. [`CountryStore`] is the in-memory
//! implementation: it is built once, indexed once, and then shared by
//! reference for concurrent reads without locking.

use std::collections::HashSet;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::Country;

mod index;
mod load;

use index::CountryIndex;
pub use load::{LoadReport, RowError, RowRejection};

/// Queries over an immutable set of countries.
///
/// Misses are reported as `None` rather than errors; callers decide how to
/// present an absent country.
///
/// # Examples
///
/// ```rust
/// use capital_core::{Country, CountryDraft, CountryQuery};
/// use rand::RngCore;
///
/// struct Single(Country);
///
/// impl CountryQuery for Single {
///     fn all(&self) -> &[Country] {
///         std::slice::from_ref(&self.0)
///     }
///
///     fn random(&self, _rng: &mut dyn RngCore) -> Option<&Country> {
///         Some(&self.0)
///     }
///
///     fn search(&self, query: &str) -> Option<&Country> {
///         self.0.name().eq_ignore_ascii_case(query).then_some(&self.0)
///     }
/// }
///
/// let peru = Country::new(CountryDraft {
///     name: "Peru".into(),
///     capital: "Lima".into(),
///     ..CountryDraft::default()
/// })
/// .expect("valid country");
/// let store = Single(peru);
/// assert_eq!(store.search("PERU").map(Country::capital), Some("Lima"));
/// assert_eq!(store.distinct_capitals(), 1);
/// ```
pub trait CountryQuery: Send + Sync {
    /// Every loaded country; empty when nothing was loaded.
    fn all(&self) -> &[Country];

    /// One country drawn uniformly at random, or `None` when empty.
    fn random(&self, rng: &mut dyn RngCore) -> Option<&Country>;

    /// Case-insensitive exact match on name, falling back to code.
    fn search(&self, query: &str) -> Option<&Country>;

    /// Number of distinct capital strings among [`CountryQuery::all`].
    fn distinct_capitals(&self) -> usize {
        self.all()
            .iter()
            .map(Country::capital)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// In-memory, indexed country store.
///
/// Structural duplicates collapse on construction; the first occurrence
/// keeps its position.
///
/// # Examples
///
/// ```
/// use capital_core::{Country, CountryDraft, CountryQuery, CountryStore};
///
/// let country = |name: &str, capital: &str, code: &str| {
///     Country::new(CountryDraft {
///         name: name.into(),
///         capital: capital.into(),
///         code: Some(code.into()),
///         ..CountryDraft::default()
///     })
///     .expect("valid country")
/// };
/// let store = CountryStore::from_countries([
///     country("France", "Paris", "FR"),
///     country("France", "Paris", "FR"),
///     country("Japan", "Tokyo", "JP"),
/// ]);
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.search("fr").map(Country::name), Some("France"));
/// assert!(store.search("Frannce").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountryStore {
    countries: Vec<Country>,
    index: CountryIndex,
}

impl CountryStore {
    /// Build an indexed store from normalised countries.
    pub fn from_countries<I>(countries: I) -> Self
    where
        I: IntoIterator<Item = Country>,
    {
        let mut seen = HashSet::new();
        let countries: Vec<Country> = countries
            .into_iter()
            .filter(|country| seen.insert(country.clone()))
            .collect();
        let mut store = Self {
            countries,
            index: CountryIndex::default(),
        };
        store.build_indexes();
        store
    }

    /// Rebuild the name and code indexes from the current entity set.
    ///
    /// Construction already calls this; invoking it again yields identical
    /// indexes.
    pub fn build_indexes(&mut self) {
        self.index = CountryIndex::build(&self.countries);
    }

    /// Number of distinct countries held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the store holds no countries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Draw a random country using the thread-local generator.
    #[must_use]
    pub fn random_country(&self) -> Option<&Country> {
        self.random(&mut rand::thread_rng())
    }
}

impl CountryQuery for CountryStore {
    fn all(&self) -> &[Country] {
        &self.countries
    }

    fn random(&self, rng: &mut dyn RngCore) -> Option<&Country> {
        self.countries.choose(rng)
    }

    fn search(&self, query: &str) -> Option<&Country> {
        self.index
            .lookup(query)
            .and_then(|position| self.countries.get(position))
    }

    fn distinct_capitals(&self) -> usize {
        self.index.distinct_capitals()
    }
}
