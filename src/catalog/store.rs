//! Catalog storage and lookup.
//!
//! The `Catalog` is loaded once per session and immutable afterwards. It is
//! the only data shared across rounds, so it clones cheaply (persistent
//! spine) and every lookup is total: a code that is not in the catalog
//! resolves to the designated fallback entry instead of failing the round.

use im::Vector;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use super::entry::{CountryCode, CountryEntry, ImageRef};

/// Asset path of the placeholder flag shown for unknown codes.
pub const DEFAULT_FLAG_ASSET: &str = "flags/default.png";

/// Errors on the fallible catalog-parsing path.
///
/// These never reach round logic: the loading entry points fail closed to a
/// default catalog instead of propagating.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only collection of country records.
///
/// ## Example
///
/// ```
/// use flag_quiz::catalog::{Catalog, CountryCode};
///
/// let catalog = Catalog::bundled();
///
/// let france = catalog.resolve(&CountryCode::new("FR"));
/// assert_eq!(france.name, "France");
///
/// // Unknown codes degrade to the fallback entry, never an error
/// let unknown = catalog.resolve(&CountryCode::new("ZZ"));
/// assert_eq!(unknown, catalog.fallback());
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Entries sorted by code, so seeded target selection is reproducible.
    entries: Vector<CountryEntry>,
    index: FxHashMap<CountryCode, usize>,
    fallback: CountryEntry,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog holding only the fallback entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vector::new(),
            index: FxHashMap::default(),
            fallback: default_fallback(),
        }
    }

    /// Build a catalog from entries.
    ///
    /// Entries are sorted by code; a duplicated code keeps the last entry.
    #[must_use]
    pub fn from_entries(mut entries: Vec<CountryEntry>) -> Self {
        entries.sort_by(|a, b| a.code.cmp(&b.code));
        entries.dedup_by(|later, earlier| {
            if later.code == earlier.code {
                // dedup_by removes `later`; keep its value instead.
                std::mem::swap(later, earlier);
                true
            } else {
                false
            }
        });

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.code.clone(), i))
            .collect();

        Self {
            entries: entries.into(),
            index,
            fallback: default_fallback(),
        }
    }

    /// Parse a `code -> name` JSON map.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        // BTreeMap for stable ordering independent of source layout.
        let map: BTreeMap<String, String> = serde_json::from_str(source)?;
        let entries = map
            .into_iter()
            .filter(|(_, name)| !name.trim().is_empty())
            .map(|(code, name)| CountryEntry::new(code.as_str(), name))
            .collect();
        Ok(Self::from_entries(entries))
    }

    /// The compiled-in country table.
    ///
    /// Falls closed to the empty catalog if the embedded source is
    /// malformed; never fails to the caller.
    #[must_use]
    pub fn bundled() -> Self {
        match Self::from_json(include_str!("../../data/countries.json")) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(%err, "bundled catalog failed to parse, using empty catalog");
                Self::new()
            }
        }
    }

    /// Load a JSON catalog from disk, failing closed to the empty catalog.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path).map_err(CatalogError::from).and_then(|s| Self::from_json(&s)) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(%err, path = %path.display(), "catalog load failed, using empty catalog");
                Self::new()
            }
        }
    }

    /// Replace the fallback entry.
    #[must_use]
    pub fn with_fallback(mut self, fallback: CountryEntry) -> Self {
        self.fallback = fallback;
        self
    }

    /// Look up an entry by code.
    #[must_use]
    pub fn get(&self, code: &CountryCode) -> Option<&CountryEntry> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    /// Look up an entry by code, substituting the fallback on a miss.
    ///
    /// Total: the round stays playable no matter what code reaches it.
    #[must_use]
    pub fn resolve(&self, code: &CountryCode) -> &CountryEntry {
        match self.get(code) {
            Some(entry) => entry,
            None => {
                tracing::debug!(%code, "unknown country code, resolving to fallback entry");
                &self.fallback
            }
        }
    }

    /// The designated fallback entry.
    #[must_use]
    pub fn fallback(&self) -> &CountryEntry {
        &self.fallback
    }

    /// Check if a code is present.
    #[must_use]
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.index.contains_key(code)
    }

    /// Entry at a catalog position (sorted-by-code order).
    #[must_use]
    pub fn entry_at(&self, index: usize) -> Option<&CountryEntry> {
        self.entries.get(index)
    }

    /// Number of entries, excluding the fallback.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog holds no real entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in sorted-by-code order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryEntry> {
        self.entries.iter()
    }
}

fn default_fallback() -> CountryEntry {
    CountryEntry {
        code: CountryCode::new("XX"),
        name: "Unknown".to_string(),
        image: ImageRef::new(DEFAULT_FLAG_ASSET),
    }
}
