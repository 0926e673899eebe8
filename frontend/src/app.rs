use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::pages::catalog_page::CatalogPage;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Course Catalog" }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            CatalogPage {}
        }
    }
}
