use crate::catalog::Catalog;
use crate::session::CompletionSet;

/// `true` si todos los prerequisitos directos de `course_id` están en el
/// conjunto de completados.
///
/// Membership is checked per id, without transitive closure. An id absent
/// from the catalog is treated as a course without prerequisites.
pub fn prerequisites_met(catalog: &Catalog, completed: &CompletionSet, course_id: &str) -> bool {
    match catalog.get(course_id) {
        Some(course) => course.prerequisites.iter().all(|p| completed.contains(p)),
        None => true,
    }
}

/// Prerequisites of `course_id` not yet completed, in catalog order.
pub fn unmet_prerequisites<'a>(catalog: &'a Catalog, completed: &CompletionSet, course_id: &str) -> Vec<&'a str> {
    catalog
        .get(course_id)
        .map(|course| {
            course
                .prerequisites
                .iter()
                .filter(|p| !completed.contains(p))
                .map(String::as_str)
                .collect()
        })
        .unwrap_or_default()
}
