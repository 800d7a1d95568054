//! Flag image resolution.
//!
//! Maps country codes to image handles. Pure lookup with a fixed default:
//! a miss is logged and the placeholder flag comes back, so a bad code
//! shows a wrong flag instead of interrupting the round.

use rustc_hash::FxHashMap;

use super::entry::{CountryCode, ImageRef};
use super::store::{Catalog, DEFAULT_FLAG_ASSET};

/// Resolver from country code to flag image handle.
///
/// ## Example
///
/// ```
/// use flag_quiz::catalog::{Catalog, CountryCode, ImageResolver};
///
/// let resolver = ImageResolver::from_catalog(&Catalog::bundled());
///
/// assert_eq!(resolver.resolve(&CountryCode::new("FR")).path(), "flags/fr.png");
/// assert_eq!(resolver.resolve(&CountryCode::new("ZZ")).path(), "flags/default.png");
/// ```
#[derive(Clone, Debug)]
pub struct ImageResolver {
    assets: FxHashMap<CountryCode, ImageRef>,
    default: ImageRef,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageResolver {
    /// Create an empty resolver; everything resolves to the default image.
    #[must_use]
    pub fn new() -> Self {
        Self {
            assets: FxHashMap::default(),
            default: ImageRef::new(DEFAULT_FLAG_ASSET),
        }
    }

    /// Build a resolver covering every entry in a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let assets = catalog
            .iter()
            .map(|e| (e.code.clone(), e.image.clone()))
            .collect();
        Self {
            assets,
            default: ImageRef::new(DEFAULT_FLAG_ASSET),
        }
    }

    /// Register an explicit code -> image mapping.
    pub fn register(&mut self, code: CountryCode, image: ImageRef) {
        self.assets.insert(code, image);
    }

    /// Replace the default image.
    #[must_use]
    pub fn with_default(mut self, image: ImageRef) -> Self {
        self.default = image;
        self
    }

    /// Resolve a code to its image handle, or the default on a miss.
    ///
    /// Total: never panics, never errors.
    #[must_use]
    pub fn resolve(&self, code: &CountryCode) -> &ImageRef {
        match self.assets.get(code) {
            Some(image) => image,
            None => {
                tracing::debug!(%code, "no flag asset for code, using default image");
                &self.default
            }
        }
    }

    /// Check if a code has a registered image.
    #[must_use]
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.assets.contains_key(code)
    }

    /// Number of registered images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if no images are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
