use crate::algorithm::classify::Classifier;
use crate::algorithm::prereqs::unmet_prerequisites;
use crate::catalog::Catalog;
use crate::models::{Course, CourseStatus, CourseView};
use crate::session::CompletionSet;

/// View-state de un curso, recalculado desde catálogo + completados.
pub fn course_view(
    catalog: &Catalog,
    completed: &CompletionSet,
    classifier: &Classifier,
    course: &Course,
) -> CourseView {
    let unmet: Vec<String> = unmet_prerequisites(catalog, completed, &course.id)
        .into_iter()
        .map(str::to_string)
        .collect();
    let is_completed = completed.contains(&course.id);
    let prerequisites_met = unmet.is_empty();
    let status = CourseStatus::from_flags(is_completed, prerequisites_met);

    let hint = match status {
        CourseStatus::Completed => "Completed".to_string(),
        CourseStatus::Available => "Click to mark complete".to_string(),
        CourseStatus::Locked => format!("You must complete: {}", unmet.join(", ")),
    };

    CourseView {
        id: course.id.clone(),
        code: course.code.clone(),
        title: course.title.clone(),
        credits: course.credits,
        department: course.department.clone(),
        completed: is_completed,
        prerequisites_met,
        status,
        category: classifier.classify(course),
        unmet_prerequisites: unmet,
        hint,
    }
}

/// Todas las vistas, en orden de id.
pub fn view_states(catalog: &Catalog, completed: &CompletionSet, classifier: &Classifier) -> Vec<CourseView> {
    catalog
        .iter()
        .map(|c| course_view(catalog, completed, classifier, c))
        .collect()
}
