//! Error boundary and the static notice shown when the catalog fails to load.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_alert_icons::MdErrorOutline};

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:red; font-size: 54px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Error",
                    }
                    p {
                        style: "color:darkred; font-size: 26px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "",
                        style: "color:blue; font-size: 26px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Reload the catalog"
                    }
                    pre {
                        style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{_err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Replaces the result list after a failed load. There is no retry; the
/// page has to be reloaded.
#[component]
pub fn CatalogErrorNotice(error_txt: ReadSignal<String>) -> Element {
    rsx! {
        div {
            role: "alert",
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "display: flex; align-items: center; gap: 8px; color:red; font-size: 34px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                Icon { icon: MdErrorOutline, style: "width: 32px; height: 32px; color: red;" }
                "Course catalog unavailable",
            }

            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            p {
                style: "color: rgba(28, 33, 45, 0.7); font-size: 16px; margin: 5px;",
                "Reload the page after fixing the data source."
            }
        }
    }
}
