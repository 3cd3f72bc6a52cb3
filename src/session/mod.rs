//! Estado de sesión del estudiante y Toggle Controller.
//!
//! `Session` es el único dueño del conjunto de completados. Cada evento de
//! selección corre hasta el final antes del siguiente; las vistas y el
//! progreso se recalculan desde cero en cada lectura.
//!
//! Retracting a completion never cascades: dependents that were completed
//! while the prerequisite was present stay completed.

mod completion;
mod notification;

pub use completion::CompletionSet;
pub use notification::{Notification, NotificationLevel, UnmetPrerequisite};

use serde::Serialize;
use tracing::{info, warn};

use crate::algorithm::classify::Classifier;
use crate::algorithm::graph::{GraphEdge, PrerequisiteGraph};
use crate::algorithm::progress::{aggregate, RequirementTargets};
use crate::algorithm::{prereqs, view};
use crate::catalog::{lookup, Catalog};
use crate::models::{Course, CourseStatus, CourseView, ProgressReport};

/// Inbound events from the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A course node was clicked: toggles its completion.
    CourseSelected(String),
    /// The details panel was dismissed.
    DetailsClosed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// Available -> Completed.
    Completed { id: String, credits: u32 },
    /// Completed -> Available/Locked.
    Uncompleted { id: String, credits: u32 },
    /// Locked: nothing changed.
    Rejected(Notification),
    /// Id not in the catalog: nothing changed.
    Unknown(Notification),
}

impl ToggleOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ToggleOutcome::Completed { .. } | ToggleOutcome::Uncompleted { .. })
    }

    pub fn notification(&self) -> Option<&Notification> {
        match self {
            ToggleOutcome::Rejected(n) | ToggleOutcome::Unknown(n) => Some(n),
            _ => None,
        }
    }

    /// Una línea legible para la consola.
    pub fn describe(&self) -> String {
        match self {
            ToggleOutcome::Completed { id, credits } => format!("✔ {} completed (+{} credits)", id, credits),
            ToggleOutcome::Uncompleted { id, credits } => format!("↺ {} marked incomplete (-{} credits)", id, credits),
            ToggleOutcome::Rejected(n) | ToggleOutcome::Unknown(n) => format!("⊘ {}", n.message),
        }
    }
}

/// Payload completo para el adaptador de renderizado.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub courses: Vec<CourseView>,
    pub edges: Vec<GraphEdge>,
    pub progress: ProgressReport,
    pub completed: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    graph: PrerequisiteGraph,
    classifier: Classifier,
    targets: RequirementTargets,
    completed: CompletionSet,
    selected: Option<String>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_policy(catalog, Classifier::default(), RequirementTargets::default())
    }

    pub fn with_policy(catalog: Catalog, classifier: Classifier, targets: RequirementTargets) -> Self {
        let graph = PrerequisiteGraph::build(&catalog);
        Session {
            catalog,
            graph,
            classifier,
            targets,
            completed: CompletionSet::new(),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn targets(&self) -> &RequirementTargets {
        &self.targets
    }

    pub fn graph(&self) -> &PrerequisiteGraph {
        &self.graph
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn handle(&mut self, event: Event) -> Option<ToggleOutcome> {
        match event {
            Event::CourseSelected(id) => Some(self.toggle(&id)),
            Event::DetailsClosed => {
                self.selected = None;
                None
            }
        }
    }

    /// Toggle Controller.
    ///
    /// - Completed -> removed from the set, no permission check.
    /// - Available -> added to the set.
    /// - Locked -> rejected with the unmet prerequisites, set untouched.
    /// - Unknown id -> no-op with close-match suggestions.
    pub fn toggle(&mut self, course_id: &str) -> ToggleOutcome {
        let Some(course) = self.catalog.get(course_id) else {
            let suggestions = lookup::suggest(&self.catalog, course_id, 3);
            warn!(course = %course_id, "toggle on unknown course ignored");
            return ToggleOutcome::Unknown(Notification::unknown_course(course_id, suggestions));
        };
        let id = course.id.clone();
        let credits = course.credits;
        self.selected = Some(id.clone());

        if self.completed.contains(&id) {
            self.completed.remove(&id);
            let still_completed: Vec<String> = self
                .graph
                .dependents(&id)
                .into_iter()
                .filter(|d| self.completed.contains(d))
                .collect();
            if !still_completed.is_empty() {
                info!(course = %id, dependents = ?still_completed, "dependents stay completed");
            }
            info!(course = %id, credits, "course marked incomplete");
            return ToggleOutcome::Uncompleted { id, credits };
        }

        let unmet = prereqs::unmet_prerequisites(&self.catalog, &self.completed, &id);
        if !unmet.is_empty() {
            let unmet: Vec<UnmetPrerequisite> = unmet
                .into_iter()
                .map(|p| UnmetPrerequisite {
                    id: p.to_string(),
                    title: self.catalog.get(p).map(|c| c.title.clone()),
                })
                .collect();
            let notification = Notification::prerequisites_unmet(&id, &course.code, unmet);
            warn!(course = %id, unmet = ?notification.unmet_ids(), "toggle rejected: prerequisites not met");
            return ToggleOutcome::Rejected(notification);
        }

        self.completed.insert(&id);
        info!(course = %id, credits, "course marked complete");
        ToggleOutcome::Completed { id, credits }
    }

    /// Replays selections in order; each one goes through `toggle`.
    pub fn replay<I, S>(&mut self, ids: I) -> Vec<ToggleOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| self.toggle(id.as_ref())).collect()
    }

    pub fn prerequisites_met(&self, course_id: &str) -> bool {
        prereqs::prerequisites_met(&self.catalog, &self.completed, course_id)
    }

    pub fn status(&self, course_id: &str) -> Option<CourseStatus> {
        self.catalog.get(course_id).map(|_| {
            CourseStatus::from_flags(self.completed.contains(course_id), self.prerequisites_met(course_id))
        })
    }

    pub fn view(&self, course_id: &str) -> Option<CourseView> {
        self.catalog
            .get(course_id)
            .map(|c| view::course_view(&self.catalog, &self.completed, &self.classifier, c))
    }

    pub fn views(&self) -> Vec<CourseView> {
        view::view_states(&self.catalog, &self.completed, &self.classifier)
    }

    pub fn progress(&self) -> ProgressReport {
        aggregate(&self.catalog, &self.completed, &self.classifier, &self.targets)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            courses: self.views(),
            edges: self.graph.edges(),
            progress: self.progress(),
            completed: self.completed.iter().map(str::to_string).collect(),
            selected: self.selected.clone(),
        }
    }
}
