//! Configuración desde variables de entorno (con soporte `.env`).
//!
//! Keys:
//! - `COURSEGRAPH_CATALOG`: catalog file (.json / .xlsx / .xls / .ods)
//! - `COURSEGRAPH_DATAFILES_DIR`: directory searched for `catalog.json`
//! - `COURSEGRAPH_TARGET_CS`, `COURSEGRAPH_TARGET_MATH`,
//!   `COURSEGRAPH_TARGET_GENERAL`, `COURSEGRAPH_TARGET_ELECTIVE`
//! - `COURSEGRAPH_DEGREE_CREDITS`

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::algorithm::progress::RequirementTargets;
use crate::catalog::{builtin_catalog, load_catalog, Catalog};
use crate::error::{ConfigError, Result};

pub const ENV_CATALOG: &str = "COURSEGRAPH_CATALOG";
pub const ENV_DATAFILES_DIR: &str = "COURSEGRAPH_DATAFILES_DIR";
pub const ENV_TARGET_CS: &str = "COURSEGRAPH_TARGET_CS";
pub const ENV_TARGET_MATH: &str = "COURSEGRAPH_TARGET_MATH";
pub const ENV_TARGET_GENERAL: &str = "COURSEGRAPH_TARGET_GENERAL";
pub const ENV_TARGET_ELECTIVE: &str = "COURSEGRAPH_TARGET_ELECTIVE";
pub const ENV_DEGREE_CREDITS: &str = "COURSEGRAPH_DEGREE_CREDITS";

/// Directorios relativos donde buscar `catalog.json` si no hay ruta explícita.
pub const DEFAULT_DATAFILES_DIRS: [&str; 2] = ["src/datafiles", "datafiles"];
pub const CATALOG_FILE_NAME: &str = "catalog.json";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub datafiles_dir: Option<PathBuf>,
    pub targets: RequirementTargets,
}

impl AppConfig {
    /// Lee `.env` (si existe) y luego el entorno del proceso.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construye la config con un lookup inyectable (tests sin tocar el entorno).
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let number = |key: &str, default: u32| -> std::result::Result<u32, ConfigError> {
            match non_empty(key) {
                Some(v) => v.parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
                    key: key.to_string(),
                    value: v,
                }),
                None => Ok(default),
            }
        };

        let defaults = RequirementTargets::default();
        let targets = RequirementTargets {
            computer_science: number(ENV_TARGET_CS, defaults.computer_science)?,
            math: number(ENV_TARGET_MATH, defaults.math)?,
            general_education: number(ENV_TARGET_GENERAL, defaults.general_education)?,
            elective: number(ENV_TARGET_ELECTIVE, defaults.elective)?,
            degree_total: number(ENV_DEGREE_CREDITS, defaults.degree_total)?,
        };

        Ok(AppConfig {
            catalog_path: non_empty(ENV_CATALOG).map(PathBuf::from),
            datafiles_dir: non_empty(ENV_DATAFILES_DIR).map(PathBuf::from),
            targets,
        })
    }

    /// Ruta del catálogo: explícita, luego `<datafiles_dir>/catalog.json`,
    /// luego los directorios por defecto relativos a `base`.
    pub fn resolve_catalog_path(&self, base: &Path) -> Option<PathBuf> {
        if let Some(p) = &self.catalog_path {
            return Some(p.clone());
        }
        if let Some(dir) = &self.datafiles_dir {
            let candidate = dir.join(CATALOG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        DEFAULT_DATAFILES_DIRS
            .iter()
            .map(|d| base.join(d).join(CATALOG_FILE_NAME))
            .find(|p| p.is_file())
    }

    /// Carga el catálogo configurado o, si no hay fichero, el de referencia.
    pub fn load_catalog(&self, base: &Path) -> Result<Catalog> {
        match self.resolve_catalog_path(base) {
            Some(path) => {
                info!(path = %path.display(), "loading catalog");
                Ok(load_catalog(&path)?)
            }
            None => {
                info!("no catalog file found, using builtin reference catalog");
                Ok(builtin_catalog()?)
            }
        }
    }
}
