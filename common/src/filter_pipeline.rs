//! Runs the four predicates over the full catalog.

use crate::course_record::CourseRecord;
use crate::filter_criteria::FilterCriteria;
use crate::filter_predicates::{by_department, by_level, by_min_credits, by_text};

/// Filters `courses` by `criteria`, always starting from the whole slice.
///
/// Order is department, level, minimum credits, text; the cheap equality
/// checks run before the text scan. The returned references point into
/// `courses` and keep its order.
pub fn filter_courses<'a>(courses: &'a [CourseRecord], criteria: &FilterCriteria) -> Vec<&'a CourseRecord> {
    let filtered = courses.iter().collect::<Vec<_>>();
    let filtered = by_department(filtered, &criteria.departments);
    let filtered = by_level(filtered, &criteria.level);
    let filtered = by_min_credits(filtered, &criteria.min_credits);
    by_text(filtered, &criteria.query)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::course_record::LooseValue;

    fn catalog() -> Vec<CourseRecord> {
        let raw = r#"[
            {"code":"CS 101","title":"Introduction to Programming","department":"Computer Science","level":"100","credits":4,"description":"First course."},
            {"code":"CS 310","title":"Algorithms","department":"Computer Science","level":"300","credits":"3","description":"Covers introductory concepts of complexity."},
            {"code":"CS 510","title":"Advanced Compilers","department":"Computer Science","level":"Graduate","credits":3},
            {"code":"MATH 500","title":"Measure Theory","department":"Mathematics","level":500,"credits":"4.5"},
            {"code":"MATH 210","title":"Linear Algebra","department":"Mathematics","level":"200","credits":"bad"},
            {"title":"Independent Study","department":"Physics"},
            {}
        ]"#;
        serde_json::from_str(raw).unwrap()
    }

    fn is_subset_by_identity(out: &[&CourseRecord], base: &[CourseRecord]) -> bool {
        out.iter().all(|r| base.iter().any(|b| std::ptr::eq(*r, b)))
    }

    #[test]
    fn default_criteria_return_everything_in_order() {
        let courses = catalog();
        let out = filter_courses(&courses, &FilterCriteria::default());
        assert_eq!(out.len(), courses.len());
        for (a, b) in out.iter().zip(courses.iter()) {
            assert!(std::ptr::eq(*a, b));
        }
    }

    #[test]
    fn combined_criteria_narrow_the_catalog() {
        let courses = catalog();
        let criteria = FilterCriteria {
            departments: BTreeSet::from(["Computer Science".to_string()]),
            level: "500".into(),
            min_credits: "3".into(),
            query: "compil".into(),
        };
        let out = filter_courses(&courses, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code.as_deref(), Some("CS 510"));
    }

    #[test]
    fn intro_query_matches_title_and_description() {
        let courses = catalog();
        let criteria = FilterCriteria { query: "intro".into(), ..Default::default() };
        let codes: Vec<_> = filter_courses(&courses, &criteria).iter().filter_map(|r| r.code.clone()).collect();
        assert_eq!(codes, vec!["CS 101", "CS 310"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let courses = catalog();
        let criteria = FilterCriteria { min_credits: "4".into(), ..Default::default() };
        let a = filter_courses(&courses, &criteria);
        let b = filter_courses(&courses, &criteria);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    fn arb_record() -> impl Strategy<Value = CourseRecord> {
        let department = prop::option::of(prop::sample::select(vec!["CS", "Math", "Physics"]));
        let level = prop::option::of(prop::sample::select(vec!["100", "400", "500", "Graduate", "graduate"]));
        let credits = prop::option::of(prop_oneof![
            (0u8..6).prop_map(|c| LooseValue::Number(c as f64)),
            prop::sample::select(vec!["2", "3.5", "bad", ""]).prop_map(LooseValue::from),
        ]);
        let title = prop::option::of(prop::sample::select(vec!["Intro to Rust", "Algorithms", "Optics"]));
        (department, level, credits, title).prop_map(|(department, level, credits, title)| CourseRecord {
            code: None,
            title: title.map(str::to_string),
            department: department.map(str::to_string),
            level: level.map(LooseValue::from),
            credits,
            description: None,
        })
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            prop::collection::btree_set(prop::sample::select(vec!["CS".to_string(), "Math".to_string()]), 0..3),
            prop::sample::select(vec!["", "100", "500", "400"]),
            prop::sample::select(vec!["", "2", "3", "-1", "x"]),
            prop::sample::select(vec!["", "intro", "ALGO", " op "]),
        )
            .prop_map(|(departments, level, min_credits, query)| FilterCriteria {
                departments,
                level: level.to_string(),
                min_credits: min_credits.to_string(),
                query: query.to_string(),
            })
    }

    proptest! {
        #[test]
        fn output_is_subset_of_input(courses in prop::collection::vec(arb_record(), 0..20), criteria in arb_criteria()) {
            let out = filter_courses(&courses, &criteria);
            prop_assert!(out.len() <= courses.len());
            prop_assert!(is_subset_by_identity(&out, &courses));
            prop_assert_eq!(filter_courses(&courses, &criteria), out);
        }

        #[test]
        fn predicates_commute(courses in prop::collection::vec(arb_record(), 0..20), criteria in arb_criteria()) {
            let all = || courses.iter().collect::<Vec<_>>();
            let text_then_department = by_department(by_text(all(), &criteria.query), &criteria.departments);
            let department_then_text = by_text(by_department(all(), &criteria.departments), &criteria.query);
            prop_assert_eq!(text_then_department, department_then_text);

            let credits_then_level = by_level(by_min_credits(all(), &criteria.min_credits), &criteria.level);
            let level_then_credits = by_min_credits(by_level(all(), &criteria.level), &criteria.min_credits);
            prop_assert_eq!(credits_then_level, level_then_credits);

            let reversed = by_department(
                by_level(by_min_credits(by_text(all(), &criteria.query), &criteria.min_credits), &criteria.level),
                &criteria.departments,
            );
            prop_assert_eq!(reversed, filter_courses(&courses, &criteria));
        }
    }
}
