// Estructuras de datos principales: cursos del catálogo y vistas derivadas.
//
// Todo lo que se serializa hacia el adaptador de renderizado usa camelCase,
// igual que el payload de catálogo que se carga al inicio.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Historical grade counts, keyed by letter grade ("A", "B", ...).
///
/// The sum of all counts is the enrollment used as the percentage
/// denominator when the distribution is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeDistribution(pub BTreeMap<String, u32>);

impl GradeDistribution {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, grade: &str, count: u32) -> Self {
        self.0.insert(grade.to_string(), count);
        self
    }

    /// Suma de todas las notas; satura en `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.0.values().fold(0u32, |acc, n| acc.saturating_add(*n))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(g, c)| (g.as_str(), *c))
    }
}

/// Course record as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub code: String,
    pub credits: u32,
    pub department: String,
    /// Ids of required courses. May name ids that are not in the catalog.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub grade_distribution: GradeDistribution,
}

impl Course {
    pub fn new(id: &str, code: &str, title: &str, credits: u32, department: &str) -> Self {
        Course {
            id: id.to_string(),
            title: title.to_string(),
            code: code.to_string(),
            credits,
            department: department.to_string(),
            prerequisites: Vec::new(),
            description: String::new(),
            grade_distribution: GradeDistribution::new(),
        }
    }

    pub fn with_prerequisites(mut self, prereqs: &[&str]) -> Self {
        self.prerequisites = prereqs.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_grades(mut self, grades: GradeDistribution) -> Self {
        self.grade_distribution = grades;
        self
    }
}

/// Requirement bucket that completed credits are counted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ComputerScienceMajor,
    Math,
    GeneralEducation,
    Elective,
}

impl Category {
    /// Fixed display order used by every progress report.
    pub const ALL: [Category; 4] = [
        Category::ComputerScienceMajor,
        Category::Math,
        Category::GeneralEducation,
        Category::Elective,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::ComputerScienceMajor => "Computer Science",
            Category::Math => "Math",
            Category::GeneralEducation => "General Education",
            Category::Elective => "Elective",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::ComputerScienceMajor => "computer-science-major",
            Category::Math => "math",
            Category::GeneralEducation => "general-education",
            Category::Elective => "elective",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Per-course state as seen by the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// Prerequisites unmet and not completed.
    Locked,
    /// Prerequisites met, not completed yet.
    Available,
    /// Marked done, whatever the current state of its prerequisites.
    Completed,
}

impl CourseStatus {
    pub fn from_flags(completed: bool, prerequisites_met: bool) -> Self {
        if completed {
            CourseStatus::Completed
        } else if prerequisites_met {
            CourseStatus::Available
        } else {
            CourseStatus::Locked
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseStatus::Locked => "locked",
            CourseStatus::Available => "available",
            CourseStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// Derived view-state of one course. Never stored, rebuilt on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseView {
    pub id: String,
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub department: String,
    pub completed: bool,
    pub prerequisites_met: bool,
    pub status: CourseStatus,
    pub category: Category,
    pub unmet_prerequisites: Vec<String>,
    /// Tooltip text for the course node.
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub category: Category,
    pub label: String,
    pub completed_credits: u32,
    pub target_credits: u32,
    /// completed / target, not clamped to 1.0.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub categories: Vec<CategoryProgress>,
    pub total_completed_credits: u32,
    pub degree_target_credits: u32,
    pub degree_ratio: f64,
}

impl ProgressReport {
    pub fn credits_for(&self, category: Category) -> u32 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.completed_credits)
            .unwrap_or(0)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryProgress> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_deserializa_con_defaults() {
        let json = r#"{ "title": "Calculus I", "code": "MATH 2471", "credits": 4, "department": "Mathematics" }"#;
        let c: Course = serde_json::from_str(json).expect("course json");
        assert!(c.id.is_empty());
        assert!(c.prerequisites.is_empty());
        assert!(c.grade_distribution.is_empty());
    }

    #[test]
    fn test_grade_distribution_camel_case() {
        let json = r#"{ "id": "X1", "title": "T", "code": "X 1", "credits": 3, "department": "D",
            "gradeDistribution": { "A": 3, "B": 2, "F": 1 } }"#;
        let c: Course = serde_json::from_str(json).unwrap();
        assert_eq!(c.grade_distribution.total(), 6);
    }

    #[test]
    fn test_grade_total_satura() {
        let g = GradeDistribution::new().with("A", u32::MAX).with("B", 1);
        assert_eq!(g.total(), u32::MAX);
    }

    #[test]
    fn test_status_completed_wins() {
        assert_eq!(CourseStatus::from_flags(true, false), CourseStatus::Completed);
        assert_eq!(CourseStatus::from_flags(false, true), CourseStatus::Available);
        assert_eq!(CourseStatus::from_flags(false, false), CourseStatus::Locked);
    }

    #[test]
    fn test_category_serializa_kebab() {
        let s = serde_json::to_string(&Category::ComputerScienceMajor).unwrap();
        assert_eq!(s, "\"computer-science-major\"");
        assert_eq!(Category::GeneralEducation.to_string(), "general-education");
    }
}
