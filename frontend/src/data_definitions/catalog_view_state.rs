//! Signal-backed view state fed by the catalog controller.

use common::{
    course_record::CourseRecord,
    facets::{FacetItem, department_facets, level_options},
};
use dioxus::prelude::*;
use engine::view::{CatalogView, CourseCard, ResultSummary, course_cards};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogViewState {
    pub busy: bool,
    pub status: String,
    pub cards: Vec<CourseCard>,
    pub summary: Option<ResultSummary>,
    pub error: Option<String>,
    pub departments: Vec<FacetItem>,
    pub levels: Vec<String>,
}

/// [`CatalogView`] that writes every update into a signal.
pub struct SignalView {
    pub state: Signal<CatalogViewState>,
}

impl CatalogView for SignalView {
    fn set_busy(&mut self, busy: bool) {
        self.state.write().busy = busy;
    }

    fn set_status(&mut self, status: &str) {
        self.state.write().status = status.to_string();
    }

    fn loaded(&mut self, courses: &[CourseRecord]) {
        let mut state = self.state.write();
        state.departments = department_facets(courses);
        state.levels = level_options(courses);
    }

    fn render(&mut self, courses: &[&CourseRecord], summary: ResultSummary) {
        let mut state = self.state.write();
        state.cards = course_cards(courses);
        state.summary = Some(summary);
    }

    fn show_error(&mut self, message: &str) {
        let mut state = self.state.write();
        state.cards.clear();
        state.summary = None;
        state.error = Some(message.to_string());
    }
}
