use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmetPrerequisite {
    pub id: String,
    /// `None` when the id is not in the catalog.
    pub title: Option<String>,
}

/// Severidad del aviso: decide el estilo del toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationLevel {
    /// Unknown course: nothing the student did was refused.
    Info,
    /// A toggle was refused because prerequisites are missing.
    Warning,
}

/// Aviso transitorio (toast) que se muestra al estudiante.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub course_id: String,
    /// Human-readable code ("CS 2308"); the raw id when the course is unknown.
    pub course_code: String,
    pub message: String,
    pub unmet: Vec<UnmetPrerequisite>,
    pub suggestions: Vec<String>,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn prerequisites_unmet(course_id: &str, course_code: &str, unmet: Vec<UnmetPrerequisite>) -> Self {
        let names: Vec<String> = unmet
            .iter()
            .map(|u| match &u.title {
                Some(t) => format!("{} ({})", u.id, t),
                None => u.id.clone(),
            })
            .collect();
        Notification {
            level: NotificationLevel::Warning,
            course_id: course_id.to_string(),
            course_code: course_code.to_string(),
            message: format!("Cannot complete {}: complete {} first", course_code, names.join(", ")),
            unmet,
            suggestions: Vec::new(),
            at: Utc::now(),
        }
    }

    pub fn unknown_course(course_id: &str, suggestions: Vec<String>) -> Self {
        let message = if suggestions.is_empty() {
            format!("Unknown course '{}'", course_id)
        } else {
            format!("Unknown course '{}'. Did you mean {}?", course_id, suggestions.join(", "))
        };
        Notification {
            level: NotificationLevel::Info,
            course_id: course_id.to_string(),
            course_code: course_id.to_string(),
            message,
            unmet: Vec::new(),
            suggestions,
            at: Utc::now(),
        }
    }

    /// Ids of the unmet prerequisites, in catalog order.
    pub fn unmet_ids(&self) -> Vec<&str> {
        self.unmet.iter().map(|u| u.id.as_str()).collect()
    }
}
