// Biblioteca raíz del crate `coursegraph`.
// Catálogo de cursos, evaluación de prerequisitos, progreso por categoría y
// el estado de sesión que decide qué selecciones se aceptan.
pub mod algorithm;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use algorithm::{Classifier, RequirementTargets};
pub use catalog::Catalog;
pub use error::{CatalogError, ConfigError, Error, Result};
pub use models::{Category, Course, CourseStatus, CourseView, ProgressReport};
pub use session::{CompletionSet, Event, Notification, NotificationLevel, Session, Snapshot, ToggleOutcome};
