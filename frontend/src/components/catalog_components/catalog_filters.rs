//! Filter form: departments, level, minimum credits and the text query.
//!
//! The controls own the criteria signal; every change is reported to the
//! controller as an [`InputEvent`] and the controller reads the signal when
//! its debounced run fires.

use common::{catalog_const::GRADUATE_LEVEL, facets::FacetItem, filter_criteria::FilterCriteria};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdRefresh}};
use engine::controller::InputEvent;

fn level_label(level: &str) -> String {
    if level == GRADUATE_LEVEL {
        "500 / Graduate".to_string()
    } else {
        level.to_string()
    }
}

#[component]
pub fn CatalogFilters(
    mut criteria: Signal<FilterCriteria>,
    departments: ReadSignal<Vec<FacetItem>>,
    levels: ReadSignal<Vec<String>>,
    disabled: ReadSignal<bool>,
    on_input_event: Callback<InputEvent>,
) -> Element {
    let reset = move |_: MouseEvent| {
        on_input_event.call(InputEvent::Reset);
        criteria.set(FilterCriteria::default());
    };
    rsx! {
        form {
            id: "x-catalog-filters",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 16px;
                background-color: #ECEEF2;
                height: 100%;
                box-sizing: border-box;
            ",
            onsubmit: move |e: FormEvent| e.prevent_default(),

            // QUERY
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 8px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    border: 1px solid rgba(101, 101, 101, 0.8);
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                input {
                    r#type: "search",
                    placeholder: "Search courses",
                    disabled: disabled(),
                    style: "flex:1; border: none; outline: none; background: transparent; font-size: 18px;",
                    value: "{criteria.read().query}",
                    oninput: move |e: FormEvent| {
                        criteria.write().query = e.value();
                        on_input_event.call(InputEvent::Input);
                    },
                }
            }

            // DEPARTMENTS
            fieldset {
                style: "border: 1px solid rgba(0,0,0,0.2); border-radius: 8px; padding: 8px;",
                disabled: disabled(),
                legend { "Departments" }
                for facet in departments.read().iter().cloned() {
                    DepartmentCheckbox { key: "{facet.value}", criteria, facet, on_input_event }
                }
            }

            // LEVEL
            label {
                style: "display: flex; flex-direction: column; gap: 4px;",
                "Level"
                select {
                    disabled: disabled(),
                    value: "{criteria.read().level}",
                    onchange: move |e: FormEvent| {
                        criteria.write().level = e.value();
                        on_input_event.call(InputEvent::Change);
                    },
                    option { value: "", "Any level" }
                    for level in levels.read().iter().cloned() {
                        option { key: "{level}", value: "{level}", "{level_label(&level)}" }
                    }
                }
            }

            // MINIMUM CREDITS
            label {
                style: "display: flex; flex-direction: column; gap: 4px;",
                "Minimum credits"
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.5",
                    disabled: disabled(),
                    value: "{criteria.read().min_credits}",
                    onchange: move |e: FormEvent| {
                        criteria.write().min_credits = e.value();
                        on_input_event.call(InputEvent::Change);
                    },
                }
            }

            button {
                r#type: "button",
                disabled: disabled(),
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    cursor: pointer;
                    border: 2px solid rgba(0,0,0,0.5);
                    border-radius: 1000px;
                    background-color: white;
                    padding: 6px 12px;
                    font-size: 15px;
                ",
                onclick: reset,
                Icon { icon: MdRefresh, style: "width: 20px; height: 20px;" }
                "Reset filters"
            }
        }
    }
}

#[component]
fn DepartmentCheckbox(mut criteria: Signal<FilterCriteria>, facet: ReadSignal<FacetItem>, on_input_event: Callback<InputEvent>) -> Element {
    let FacetItem { value, count } = facet.read().clone();
    let is_checked = use_memo(move || criteria.read().departments.contains(&facet.read().value));
    rsx! {
        label {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            input {
                r#type: "checkbox",
                checked: is_checked(),
                onchange: move |_| {
                    criteria.write().toggle_department(&facet.read().value);
                    on_input_event.call(InputEvent::Change);
                },
            }
            // FACET NAME
            span {
                style: "flex: 1 1 auto; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{value}"
            }
            // FACET COUNT
            span {
                style: "color: rgba(28, 33, 45, 0.7);",
                "{count}"
            }
        }
    }
}
