//! Country entries - static catalog data.
//!
//! `CountryEntry` holds the immutable properties of one catalog record:
//! its code, display name, and flag-image handle. Round state (targets,
//! masks, attempts) is stored separately in `RoundState`.

use serde::{Deserialize, Serialize};

/// Short country identifier (ISO-3166-alpha-2 style).
///
/// Codes are normalized to uppercase on construction, so `"fr"` and `"FR"`
/// identify the same entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a new code, normalizing to uppercase.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// The normalized code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Opaque handle to a flag image asset.
///
/// The engine never decodes images; it hands this to the presentation
/// layer, which maps it to an actual drawable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a handle from an explicit asset path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Derive the conventional asset path for a country code.
    #[must_use]
    pub fn for_code(code: &CountryCode) -> Self {
        Self(format!("flags/{}.png", code.as_str().to_lowercase()))
    }

    /// The asset path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

/// One immutable catalog record.
///
/// ## Example
///
/// ```
/// use flag_quiz::catalog::CountryEntry;
///
/// let france = CountryEntry::new("FR", "France");
/// assert_eq!(france.code.as_str(), "FR");
/// assert_eq!(france.image.path(), "flags/fr.png");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Unique code within the catalog.
    pub code: CountryCode,

    /// Display name. Non-empty.
    pub name: String,

    /// Flag image handle, derived from the code.
    pub image: ImageRef,
}

impl CountryEntry {
    /// Create a new entry. The image handle is derived from the code.
    ///
    /// Panics if `name` is empty.
    #[must_use]
    pub fn new(code: impl Into<CountryCode>, name: impl Into<String>) -> Self {
        let code = code.into();
        let name = name.into();
        assert!(!name.trim().is_empty(), "Country name must be non-empty");

        let image = ImageRef::for_code(&code);
        Self { code, name, image }
    }

    /// Case-insensitive, whitespace-trimmed name comparison.
    ///
    /// This is the single definition of "the answer matches" used by every
    /// name-guessing mode.
    #[must_use]
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.trim().to_lowercase() == candidate.trim().to_lowercase()
    }
}
