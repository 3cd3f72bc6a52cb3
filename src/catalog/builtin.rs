use crate::catalog::{parse_catalog_json, Catalog};
use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../datafiles/catalog.json");

/// Reference catalog shipped with the binary, used when no catalog file is
/// configured.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog_json(BUILTIN_CATALOG, "builtin")
}
