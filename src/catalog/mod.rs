//! Catalog Store: mapa inmutable id de curso -> `Course`.
//!
//! Submódulos:
//! - `io`: helpers de normalización y conversión de celdas
//! - `json`: lectura del catálogo desde JSON indexado por id
//! - `excel`: lectura del catálogo desde una hoja de cálculo (calamine)
//! - `builtin`: catálogo de referencia embebido en el binario
//! - `lookup`: resolución de texto libre a un curso (código, título, fuzzy)

pub mod io;
mod json;
mod excel;
mod builtin;
pub mod lookup;

pub use builtin::builtin_catalog;
pub use excel::{courses_from_rows, load_catalog_excel};
pub use json::{load_catalog_json, parse_catalog_json};

use crate::error::CatalogError;
use crate::models::Course;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Read-only course catalog. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Builds the store, rejecting duplicate ids. Prerequisites naming
    /// courses outside the catalog are kept and logged.
    pub fn from_courses<I>(courses: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Course>,
    {
        let mut map = BTreeMap::new();
        for course in courses {
            if map.contains_key(&course.id) {
                return Err(CatalogError::DuplicateCourse { id: course.id });
            }
            map.insert(course.id.clone(), course);
        }

        let catalog = Catalog { courses: map };
        for (course, missing) in catalog.dangling_prerequisites() {
            warn!(course = %course, prerequisite = %missing, "prerequisite not present in catalog");
        }
        debug!(courses = catalog.len(), "catalog built");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.courses.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Pairs (course id, missing prerequisite id).
    pub fn dangling_prerequisites(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        for course in self.courses.values() {
            for p in course.prerequisites.iter() {
                if !self.courses.contains_key(p) {
                    out.push((course.id.clone(), p.clone()));
                }
            }
        }
        out
    }
}

/// Carga un catálogo eligiendo el lector según la extensión del fichero.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => load_catalog_json(path),
        "xlsx" | "xlsm" | "xls" | "ods" => load_catalog_excel(path),
        _ => Err(CatalogError::UnsupportedFormat { path: path.to_path_buf() }),
    }
}
