//! Boundary between the controller and whatever draws the catalog.

use std::fmt;

use common::course_record::CourseRecord;
use serde::{Deserialize, Serialize};

/// Receives render updates from the controller.
pub trait CatalogView {
    fn set_busy(&mut self, busy: bool);

    fn set_status(&mut self, status: &str);

    /// Called once with the full catalog after a successful load.
    fn loaded(&mut self, _courses: &[CourseRecord]) {}

    fn render(&mut self, courses: &[&CourseRecord], summary: ResultSummary);

    /// Replaces the result area with a static error notice.
    fn show_error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl ResultSummary {
    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }

    /// "0 courses found", "1 course found", "2 courses found", ...
    pub fn message(&self) -> String {
        format!("{} {} found", self.shown, course_noun(self.shown))
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub fn loaded_message(count: usize) -> String {
    format!("Loaded {} {}", count, course_noun(count))
}

fn course_noun(count: usize) -> &'static str {
    if count == 1 { "course" } else { "courses" }
}

pub const CODE_PLACEHOLDER: &str = "N/A";
pub const TITLE_PLACEHOLDER: &str = "Untitled course";
pub const DEPARTMENT_PLACEHOLDER: &str = "Unknown department";
pub const LEVEL_PLACEHOLDER: &str = "N/A";
pub const CREDITS_PLACEHOLDER: &str = "N/A";
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

/// Display strings for one course, with placeholders for absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCard {
    pub code: String,
    pub title: String,
    pub department: String,
    pub level: String,
    pub credits: String,
    pub description: String,
}

impl CourseCard {
    pub fn from_record(record: &CourseRecord) -> Self {
        Self {
            code: or_placeholder(record.code.clone(), CODE_PLACEHOLDER),
            title: or_placeholder(record.title.clone(), TITLE_PLACEHOLDER),
            department: or_placeholder(record.department.clone(), DEPARTMENT_PLACEHOLDER),
            level: or_placeholder(record.level_text(), LEVEL_PLACEHOLDER),
            credits: or_placeholder(record.credits_text(), CREDITS_PLACEHOLDER),
            description: or_placeholder(record.description.clone(), DESCRIPTION_PLACEHOLDER),
        }
    }
}

pub fn course_cards(courses: &[&CourseRecord]) -> Vec<CourseCard> {
    courses.iter().map(|c| CourseCard::from_record(c)).collect()
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}
