//! Catalog module - WHAT games are known and where they launch from
//!
//! Each storefront has its own title -> identifier mapping:
//! - Steam: numeric app ids, refreshed from the Steam Web API
//! - Epic: app name slugs, maintained by hand
//! - Roguelikes: a Steam sub-catalog used by `random`
//!
//! ## Module Structure
//! - `types.rs`: Catalog, CatalogEntry, StorePlatform, Library
//! - `store.rs`: CatalogStore, the on-disk set of catalogs
//! - `operations/`: JSON persistence and the remote fetch

mod operations;
mod store;
mod types;

pub use operations::{CatalogFetcher, SteamWebApi};
pub use store::CatalogStore;
pub use types::{Library, StorePlatform};

#[cfg(test)]
pub use operations::StubFetcher;
#[cfg(test)]
pub use store::CatalogPaths;
#[cfg(test)]
pub use types::Catalog;
