//! Result count line and the empty-results indicator.

use dioxus::prelude::*;
use engine::view::ResultSummary;

#[component]
pub fn ResultSummaryLine(summary: ReadSignal<Option<ResultSummary>>, status: ReadSignal<String>) -> Element {
    let text = match summary.read().as_ref() {
        Some(summary) => summary.message(),
        None => status.read().clone(),
    };
    rsx! {
        h1 {
            "aria-live": "polite",
            style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
            "{text}"
        }
    }
}

#[component]
pub fn EmptyResults() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 40px;
                font-size: 20px;
                color: rgba(28, 33, 45, 0.7);
            ",
            "No courses match the current filters."
        }
    }
}
