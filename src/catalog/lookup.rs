//! Resolución de texto libre ("cs 2308", "Calculus I") a un curso del catálogo.

use crate::catalog::io::{normalize_code, normalize_title};
use crate::catalog::Catalog;
use crate::models::Course;
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity accepted as a fuzzy match.
pub const FUZZY_THRESHOLD: f64 = 0.88;

/// Resolves `query` to a course: exact id, then normalised id or code, then
/// normalised title, then the closest fuzzy match above `FUZZY_THRESHOLD`.
pub fn resolve<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a Course> {
    resolve_exact(catalog, query)
        .or_else(|| best_match(catalog, query.trim()).and_then(|(c, score)| (score >= FUZZY_THRESHOLD).then_some(c)))
}

/// Like `resolve` but without the fuzzy step: only unambiguous spellings of
/// an id, code or title match. Used before mutating the completion set.
pub fn resolve_exact<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a Course> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    if let Some(c) = catalog.get(query) {
        return Some(c);
    }

    let code_key = normalize_code(query);
    if let Some(c) = catalog
        .iter()
        .find(|c| normalize_code(&c.id) == code_key || normalize_code(&c.code) == code_key)
    {
        return Some(c);
    }

    let title_key = normalize_title(query);
    catalog.iter().find(|c| normalize_title(&c.title) == title_key)
}

/// Up to `n` course ids closest to `query`, best first.
pub fn suggest(catalog: &Catalog, query: &str, n: usize) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = catalog
        .iter()
        .map(|c| (similarity(c, query), c.id.as_str()))
        .filter(|(score, _)| *score > 0.5)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored.into_iter().take(n).map(|(_, id)| id.to_string()).collect()
}

fn best_match<'a>(catalog: &'a Catalog, query: &str) -> Option<(&'a Course, f64)> {
    catalog
        .iter()
        .map(|c| (c, similarity(c, query)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
}

fn similarity(course: &Course, query: &str) -> f64 {
    let by_code = jaro_winkler(&normalize_code(&course.code), &normalize_code(query));
    let by_title = jaro_winkler(&normalize_title(&course.title), &normalize_title(query));
    by_code.max(by_title)
}
