//! Country catalog: entries, storage, and image resolution.
//!
//! ## Key Types
//!
//! - `CountryCode`: Uppercase-normalized short identifier
//! - `CountryEntry`: Immutable code/name/image record
//! - `Catalog`: Read-only collection with fallback-on-miss lookup
//! - `ImageResolver`: Code -> flag image handle with a fixed default
//!
//! ## Failure Semantics
//!
//! Nothing here surfaces a hard failure to round logic: unknown codes
//! resolve to the fallback entry or default image, and catalog loading
//! fails closed to an empty catalog.

pub mod entry;
pub mod images;
pub mod store;

pub use entry::{CountryCode, CountryEntry, ImageRef};
pub use images::ImageResolver;
pub use store::{Catalog, CatalogError, DEFAULT_FLAG_ASSET};
