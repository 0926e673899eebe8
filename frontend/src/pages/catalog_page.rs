use common::filter_criteria::FilterCriteria;
use dioxus::{logger::tracing, prelude::*};
use engine::controller::{CatalogController, InputEvent};
use futures::channel::mpsc::UnboundedReceiver;

use crate::{
    components::{
        catalog_components::{
            catalog_filters::CatalogFilters,
            course_card::CourseCardItem,
            result_summary::{EmptyResults, ResultSummaryLine},
        },
        error_boundary::CatalogErrorNotice,
        loading_indicator::LoadingIndicator,
    },
    data_definitions::{
        catalog_view_state::{CatalogViewState, SignalView},
        injected_sources::{build_loader, page_config},
    },
};

/// Catalog page
#[component]
pub fn CatalogPage() -> Element {
    let criteria = use_signal(FilterCriteria::default);
    let view_state = use_signal(CatalogViewState::default);

    // The controller lives inside this coroutine for the whole page session;
    // the filter controls talk to it through the coroutine channel.
    let controller = use_coroutine(move |events: UnboundedReceiver<InputEvent>| async move {
        let config = page_config();
        let loader = build_loader(&config);
        let view = SignalView { state: view_state };
        let mut controller = CatalogController::new(&config, view, move || criteria.peek().clone());
        let state = controller.run(loader, events, gloo_timers::future::sleep).await;
        tracing::debug!("catalog controller stopped in state {state:?}");
    });

    let state = view_state.read().clone();
    let loading = state.summary.is_none() && state.error.is_none();

    rsx! {
        div {
            id: "x-catalog-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
            "#,
            div {
                id: "x-catalog-filters-left-panel",
                style: "
                    height: 100%;
                    min-width: 280px;
                    width: 25%;
                ",
                CatalogFilters {
                    criteria,
                    departments: state.departments.clone(),
                    levels: state.levels.clone(),
                    disabled: state.error.is_some() || loading,
                    on_input_event: move |event: InputEvent| controller.send(event),
                }
            }
            div {
                id: "x-catalog-results-right-panel",
                "aria-busy": "{state.busy}",
                style: "
                    height: 100%;
                    flex-grow: 1;
                    display: flex;
                    flex-direction: column;
                    padding: 7px;
                ",
                ResultSummaryLine { summary: state.summary, status: state.status.clone() }

                if let Some(error) = state.error.clone() {
                    CatalogErrorNotice { error_txt: error }
                } else if loading {
                    LoadingIndicator { status: state.status.clone() }
                } else if state.cards.is_empty() {
                    EmptyResults {}
                } else {
                    ul {
                        id: "x-catalog-results-wrapper",
                        style: "
                            width: 100%;
                            height: 100%;
                            overflow-y: auto;
                            list-style: none;
                            padding: 0;
                        ",
                        for (index, card) in state.cards.iter().cloned().enumerate() {
                            li {
                                key: "{index}-{card.code}-{card.title}",
                                CourseCardItem { card }
                            }
                        }
                    }
                }
            }
        }
    }
}
