//! Catalog JSON persistence
//!
//! Files are flat JSON objects `{ "<lowercase title>": "<identifier>" }`,
//! written whole with two-space indentation.

use crate::catalog::types::Catalog;
use crate::error::CatalogError;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Load a catalog. A missing file is an empty catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    load_catalog_or(path, Catalog::new)
}

/// Load a catalog, using `default` when the file does not exist yet.
pub fn load_catalog_or(
    path: &Path,
    default: impl FnOnce() -> Catalog,
) -> Result<Catalog, CatalogError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(default()),
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let catalog: Catalog =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(catalog.normalized())
}

pub fn save_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let io_err = |source: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, catalog).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;

    log::debug!("saved {} titles to {}", catalog.len(), path.display());
    Ok(())
}
