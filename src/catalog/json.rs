use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::Course;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Entradas del objeto JSON en orden de aparición, claves repetidas incluidas.
struct CatalogEntries(Vec<(String, Course)>);

impl<'de> Deserialize<'de> for CatalogEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = CatalogEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of courses keyed by id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Course>()? {
                    entries.push(entry);
                }
                Ok(CatalogEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parsea un catálogo JSON con la forma `{ "<id>": { ...course... }, ... }`.
///
/// A record may omit `id`; it is then taken from its key. When present it
/// must equal the key. A key that appears twice is a `DuplicateCourse`.
pub fn parse_catalog_json(json_str: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let CatalogEntries(raw) = serde_json::from_str(json_str).map_err(|source| CatalogError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let mut seen = BTreeSet::new();
    let mut courses = Vec::with_capacity(raw.len());
    for (key, mut course) in raw.into_iter() {
        if !seen.insert(key.clone()) {
            return Err(CatalogError::DuplicateCourse { id: key });
        }
        if course.id.is_empty() {
            course.id = key;
        } else if course.id != key {
            return Err(CatalogError::KeyMismatch { key, id: course.id });
        }
        courses.push(course);
    }

    debug!(origin, courses = courses.len(), "parsed JSON catalog");
    Catalog::from_courses(courses)
}

pub fn load_catalog_json<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog_json(&s, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_tomado_de_la_clave() {
        let json = r#"{ "CS1428": { "title": "Foundations I", "code": "CS 1428", "credits": 4, "department": "Computer Science" } }"#;
        let cat = parse_catalog_json(json, "inline").unwrap();
        assert_eq!(cat.get("CS1428").map(|c| c.id.as_str()), Some("CS1428"));
    }

    #[test]
    fn test_key_mismatch() {
        let json = r#"{ "CS1428": { "id": "CS2308", "title": "T", "code": "C", "credits": 3, "department": "D" } }"#;
        let err = parse_catalog_json(json, "inline").unwrap_err();
        assert!(matches!(err, CatalogError::KeyMismatch { .. }));
    }

    #[test]
    fn test_clave_repetida_rechazada() {
        let json = r#"{
            "CS1428": { "title": "A", "code": "CS 1428", "credits": 4, "department": "Computer Science" },
            "CS1428": { "title": "B", "code": "CS 1428", "credits": 9, "department": "Computer Science" }
        }"#;
        match parse_catalog_json(json, "inline") {
            Err(CatalogError::DuplicateCourse { id }) => assert_eq!(id, "CS1428"),
            other => panic!("expected DuplicateCourse, got {:?}", other.map(|c| c.len())),
        }
    }

    #[test]
    fn test_json_no_objeto() {
        let err = parse_catalog_json("[]", "inline").unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
    }

    #[test]
    fn test_json_invalido() {
        let err = parse_catalog_json("[1, 2", "inline").unwrap_err();
        assert!(matches!(err, CatalogError::Json { .. }));
    }

    #[test]
    fn test_credits_negativos_rechazados() {
        let json = r#"{ "X": { "title": "T", "code": "C", "credits": -3, "department": "D" } }"#;
        assert!(parse_catalog_json(json, "inline").is_err());
    }
}
