//! Case-insensitive lookup tables over the loaded countries.

use std::collections::{HashMap, HashSet};

use crate::Country;

/// Name and code lookups plus the distinct capital count.
///
/// Positions refer to the slice the index was built from. Later entries
/// overwrite earlier ones sharing a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CountryIndex {
    by_name: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
    distinct_capitals: usize,
}

impl CountryIndex {
    /// Build the lookups in a single pass over `countries`.
    pub(crate) fn build(countries: &[Country]) -> Self {
        let mut by_name = HashMap::with_capacity(countries.len());
        let mut by_code = HashMap::with_capacity(countries.len());
        let mut capitals = HashSet::with_capacity(countries.len());

        for (position, country) in countries.iter().enumerate() {
            by_name.insert(country.name().to_lowercase(), position);
            if let Some(code) = country.code() {
                by_code.insert(code.to_lowercase(), position);
            }
            capitals.insert(country.capital());
        }

        Self {
            by_name,
            by_code,
            distinct_capitals: capitals.len(),
        }
    }

    /// Position of the country matching `query` by name, then by code.
    pub(crate) fn lookup(&self, query: &str) -> Option<usize> {
        let key = query.to_lowercase();
        self.by_name
            .get(&key)
            .or_else(|| self.by_code.get(&key))
            .copied()
    }

    pub(crate) const fn distinct_capitals(&self) -> usize {
        self.distinct_capitals
    }
}
