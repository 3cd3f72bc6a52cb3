use serde::Serialize;

use crate::models::Course;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeShare {
    pub grade: String,
    pub count: u32,
    /// Porcentaje 0.0 - 100.0 sobre el total histórico.
    pub percent: f64,
}

/// Porcentaje por nota de la distribución histórica del curso.
/// Un total de 0 estudiantes da 0% en todas las notas.
pub fn grade_breakdown(course: &Course) -> Vec<GradeShare> {
    let total = course.grade_distribution.total();
    course
        .grade_distribution
        .iter()
        .map(|(grade, count)| GradeShare {
            grade: grade.to_string(),
            count,
            percent: if total == 0 { 0.0 } else { count as f64 / total as f64 * 100.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GradeDistribution;

    #[test]
    fn test_porcentajes() {
        let grades = GradeDistribution::new().with("A", 35).with("B", 30).with("C", 20).with("D", 10).with("F", 5);
        let c = Course::new("CS1428", "CS 1428", "Foundations I", 4, "Computer Science").with_grades(grades);
        let shares = grade_breakdown(&c);
        assert_eq!(shares.len(), 5);
        assert_eq!(shares[0].grade, "A");
        assert!((shares[0].percent - 35.0).abs() < 1e-9);
        let sum: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_cero() {
        let grades = GradeDistribution::new().with("A", 0).with("B", 0);
        let c = Course::new("X1", "X 1", "T", 3, "D").with_grades(grades);
        assert!(grade_breakdown(&c).iter().all(|s| s.percent == 0.0));
        let empty = Course::new("X2", "X 2", "T", 3, "D");
        assert!(grade_breakdown(&empty).is_empty());
    }

    #[test]
    fn test_conteos_enormes() {
        let grades = GradeDistribution::new().with("A", u32::MAX).with("B", 1);
        let c = Course::new("X3", "X 3", "T", 3, "D").with_grades(grades);
        let shares = grade_breakdown(&c);
        assert_eq!(shares.len(), 2);
        assert!((shares[0].percent - 100.0).abs() < 1e-6);
        assert!(shares[1].percent < 1e-6);
    }
}
