//! The four independent course predicates.
//!
//! Each one narrows a list of borrowed records by a single criterion and
//! returns its input untouched when the criterion is empty. None of them can
//! fail: records with missing or malformed fields simply do not match.

use std::collections::BTreeSet;

use crate::catalog_const::{GRADUATE_LEVEL, GRADUATE_LEVEL_ALIAS};
use crate::course_record::CourseRecord;

pub fn by_department<'a>(records: Vec<&'a CourseRecord>, departments: &BTreeSet<String>) -> Vec<&'a CourseRecord> {
    if departments.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.department.as_ref().is_some_and(|d| departments.contains(d)))
        .collect()
}

/// `"500"` also matches records whose level reads "graduate" in any case;
/// every other level is an exact string match.
pub fn by_level<'a>(records: Vec<&'a CourseRecord>, level: &str) -> Vec<&'a CourseRecord> {
    if level.trim().is_empty() {
        return records;
    }
    if level.trim().to_lowercase() == GRADUATE_LEVEL {
        return records
            .into_iter()
            .filter(|r| {
                r.level_text()
                    .map(|l| l.to_lowercase())
                    .is_some_and(|l| l == GRADUATE_LEVEL || l == GRADUATE_LEVEL_ALIAS)
            })
            .collect();
    }
    records
        .into_iter()
        .filter(|r| r.level_text().is_some_and(|l| l == level))
        .collect()
}

/// An unparseable or negative threshold leaves the list unchanged.
pub fn by_min_credits<'a>(records: Vec<&'a CourseRecord>, min_credits: &str) -> Vec<&'a CourseRecord> {
    let Some(threshold) = parse_threshold(min_credits) else {
        return records;
    };
    records
        .into_iter()
        .filter(|r| r.credits_value().is_some_and(|c| c >= threshold))
        .collect()
}

pub fn by_text<'a>(records: Vec<&'a CourseRecord>, query: &str) -> Vec<&'a CourseRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| r.searchable_text().contains(&query))
        .collect()
}

fn parse_threshold(min_credits: &str) -> Option<f64> {
    let raw = min_credits.trim();
    if raw.is_empty() {
        return None;
    }
    let threshold = raw.parse::<f64>().ok()?;
    (threshold.is_finite() && threshold >= 0.0).then_some(threshold)
}
