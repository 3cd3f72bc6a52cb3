//! Clasificación de cursos en categorías de requisito.
//!
//! La política es una lista ordenada de reglas (predicado -> categoría);
//! gana la primera que coincide y, si ninguna lo hace, se usa la categoría
//! de respaldo.

use regex::Regex;

use crate::models::{Category, Course};

/// Title keywords that mark a course as an elective, whatever its department.
pub const ELECTIVE_KEYWORDS: [&str; 5] = ["internship", "cooperative", "research", "independent", "elective"];

#[derive(Debug, Clone)]
pub enum RulePredicate {
    /// Case-insensitive match anywhere in the title.
    TitleMatches(Regex),
    /// Exact department label.
    DepartmentEquals(String),
}

impl RulePredicate {
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            RulePredicate::TitleMatches(re) => re.is_match(&course.title),
            RulePredicate::DepartmentEquals(dept) => course.department == *dept,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub predicate: RulePredicate,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<ClassificationRule>,
    fallback: Category,
}

impl Classifier {
    pub fn new(rules: Vec<ClassificationRule>, fallback: Category) -> Self {
        Classifier { rules, fallback }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    pub fn classify(&self, course: &Course) -> Category {
        self.rules
            .iter()
            .find(|r| r.predicate.matches(course))
            .map(|r| r.category)
            .unwrap_or(self.fallback)
    }
}

impl Default for Classifier {
    /// elective keywords > Computer Science > Mathematics > general education.
    fn default() -> Self {
        let pattern = format!("(?i){}", ELECTIVE_KEYWORDS.join("|"));
        let rules = vec![
            ClassificationRule {
                name: "elective-keyword",
                predicate: RulePredicate::TitleMatches(keyword_regex(&pattern)),
                category: Category::Elective,
            },
            ClassificationRule {
                name: "cs-department",
                predicate: RulePredicate::DepartmentEquals("Computer Science".to_string()),
                category: Category::ComputerScienceMajor,
            },
            ClassificationRule {
                name: "math-department",
                predicate: RulePredicate::DepartmentEquals("Mathematics".to_string()),
                category: Category::Math,
            },
        ];
        Classifier::new(rules, Category::GeneralEducation)
    }
}

// El patrón se arma con literales conocidos; un fallo aquí es un bug del crate.
fn keyword_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("elective keyword pattern is a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, dept: &str) -> Course {
        Course::new("X1", "X 1", title, 3, dept)
    }

    #[test]
    fn test_keyword_gana_sobre_departamento() {
        let c = Classifier::default();
        assert_eq!(
            c.classify(&course("Software Engineering Internship", "Computer Science")),
            Category::Elective
        );
        assert_eq!(c.classify(&course("Undergraduate RESEARCH", "Mathematics")), Category::Elective);
    }

    #[test]
    fn test_departamentos() {
        let c = Classifier::default();
        assert_eq!(c.classify(&course("Assembly Language", "Computer Science")), Category::ComputerScienceMajor);
        assert_eq!(c.classify(&course("Calculus I", "Mathematics")), Category::Math);
        assert_eq!(c.classify(&course("World History", "History")), Category::GeneralEducation);
    }

    #[test]
    fn test_departamento_es_exacto() {
        let c = Classifier::default();
        assert_eq!(c.classify(&course("Discrete Math", "computer science")), Category::GeneralEducation);
    }

    #[test]
    fn test_keyword_como_subcadena() {
        // "independently" contiene "independent"
        let c = Classifier::default();
        assert_eq!(c.classify(&course("Working Independently", "History")), Category::Elective);
    }

    #[test]
    fn test_reglas_personalizadas_y_fallback() {
        let c = Classifier::new(
            vec![ClassificationRule {
                name: "physics",
                predicate: RulePredicate::DepartmentEquals("Physics".into()),
                category: Category::Math,
            }],
            Category::Elective,
        );
        assert_eq!(c.classify(&course("Mechanics", "Physics")), Category::Math);
        assert_eq!(c.classify(&course("Calculus I", "Mathematics")), Category::Elective);
        assert_eq!(c.rules().len(), 1);
    }
}
