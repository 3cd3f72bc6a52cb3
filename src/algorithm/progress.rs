//! Progress Aggregator: créditos completados por categoría y totales.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithm::classify::Classifier;
use crate::catalog::Catalog;
use crate::models::{Category, CategoryProgress, ProgressReport};
use crate::session::CompletionSet;

/// Credit targets per category plus the overall degree total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementTargets {
    pub computer_science: u32,
    pub math: u32,
    pub general_education: u32,
    pub elective: u32,
    pub degree_total: u32,
}

impl Default for RequirementTargets {
    fn default() -> Self {
        RequirementTargets {
            computer_science: 43,
            math: 14,
            general_education: 42,
            elective: 9,
            degree_total: 120,
        }
    }
}

impl RequirementTargets {
    pub fn target_for(&self, category: Category) -> u32 {
        match category {
            Category::ComputerScienceMajor => self.computer_science,
            Category::Math => self.math,
            Category::GeneralEducation => self.general_education,
            Category::Elective => self.elective,
        }
    }
}

/// Recalcula el progreso completo desde cero.
///
/// Completed ids missing from the catalog add 0 credits. Each completed
/// course lands in exactly one category, so category totals always add up
/// to `total_completed_credits`. Sums saturate at `u32::MAX`.
pub fn aggregate(
    catalog: &Catalog,
    completed: &CompletionSet,
    classifier: &Classifier,
    targets: &RequirementTargets,
) -> ProgressReport {
    let mut per_category: HashMap<Category, u32> = HashMap::new();
    let mut total: u32 = 0;

    for id in completed.iter() {
        let Some(course) = catalog.get(id) else { continue };
        let category = classifier.classify(course);
        let entry = per_category.entry(category).or_insert(0);
        *entry = entry.saturating_add(course.credits);
        total = total.saturating_add(course.credits);
    }

    let categories = Category::ALL
        .iter()
        .map(|&category| {
            let completed_credits = per_category.get(&category).copied().unwrap_or(0);
            let target_credits = targets.target_for(category);
            CategoryProgress {
                category,
                label: category.label().to_string(),
                completed_credits,
                target_credits,
                ratio: ratio(completed_credits, target_credits),
            }
        })
        .collect();

    ProgressReport {
        categories,
        total_completed_credits: total,
        degree_target_credits: targets.degree_total,
        degree_ratio: ratio(total, targets.degree_total),
    }
}

/// Sin recorte a 1.0; un objetivo 0 da 0.0.
fn ratio(completed: u32, target: u32) -> f64 {
    if target == 0 {
        0.0
    } else {
        completed as f64 / target as f64
    }
}
