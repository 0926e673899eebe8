//! Facet summaries used to build the filter controls.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog_const::{GRADUATE_LEVEL, GRADUATE_LEVEL_ALIAS};
use crate::course_record::CourseRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetItem {
    pub value: String,
    pub count: u64,
}

/// Distinct departments with their record counts, most common first and
/// ties broken by name. Records without a department are not counted.
pub fn department_facets(courses: &[CourseRecord]) -> Vec<FacetItem> {
    let mut counts = BTreeMap::<&str, u64>::new();
    for department in courses.iter().filter_map(|c| c.department.as_deref()) {
        if department.trim().is_empty() {
            continue;
        }
        *counts.entry(department).or_default() += 1;
    }
    let mut facets = counts
        .into_iter()
        .map(|(value, count)| FacetItem { value: value.to_string(), count })
        .collect::<Vec<_>>();
    facets.sort_by_key(|item| (u64::MAX - item.count, item.value.clone()));
    facets
}

/// Distinct level values, sorted. "graduate" in any case folds into the
/// `500` option since the level filter treats the two alike.
pub fn level_options(courses: &[CourseRecord]) -> Vec<String> {
    let mut levels = BTreeSet::new();
    for level in courses.iter().filter_map(CourseRecord::level_text) {
        let level = level.trim().to_string();
        if level.is_empty() {
            continue;
        }
        if level.to_lowercase() == GRADUATE_LEVEL_ALIAS {
            levels.insert(GRADUATE_LEVEL.to_string());
        } else {
            levels.insert(level);
        }
    }
    levels.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Vec<CourseRecord> {
        serde_json::from_str(
            r#"[
                {"department":"Physics","level":"100"},
                {"department":"Math","level":200},
                {"department":"Math","level":"Graduate"},
                {"department":"Biology","level":"500"},
                {"department":"  "},
                {"level":"300"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn departments_sorted_by_count_then_name() {
        let facets = department_facets(&courses());
        let pairs: Vec<_> = facets.iter().map(|f| (f.value.as_str(), f.count)).collect();
        assert_eq!(pairs, vec![("Math", 2), ("Biology", 1), ("Physics", 1)]);
    }

    #[test]
    fn levels_fold_graduate_into_500() {
        assert_eq!(level_options(&courses()), vec!["100", "200", "300", "500"]);
        assert!(level_options(&[]).is_empty());
    }
}
