//! Operations module (atomic side effects)

pub mod fetch;
pub mod io;

pub use fetch::{CatalogFetcher, SteamWebApi};
pub use io::{load_catalog, load_catalog_or, save_catalog};

#[cfg(test)]
pub use fetch::StubFetcher;
