// Evaluadores puros sobre (catálogo, conjunto de completados).
// Todo se recalcula desde cero en cada lectura; no hay caché incremental.
pub mod classify;
pub mod grades;
pub mod graph;
pub mod prereqs;
pub mod progress;
pub mod view;

pub use classify::{ClassificationRule, Classifier, RulePredicate};
pub use grades::{grade_breakdown, GradeShare};
pub use graph::{GraphEdge, PrerequisiteGraph};
pub use prereqs::{prerequisites_met, unmet_prerequisites};
pub use progress::{aggregate, RequirementTargets};
pub use view::{course_view, view_states};
