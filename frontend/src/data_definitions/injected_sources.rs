//! Reads host-page globals once and turns them into loader sources.
//!
//! A page may define `window.COURSE_CATALOG` (an array of course objects)
//! and/or `window.loadCourseCatalog` (a function returning an array or a
//! promise of one). Neither is required.

use common::course_record::CourseRecord;
use dioxus::logger::tracing;
use engine::{config::CatalogConfig, data_loader::DataLoader};
use wasm_bindgen::{JsCast, JsValue};

pub const INJECTED_COURSES_GLOBAL: &str = "COURSE_CATALOG";
pub const COURSE_PROVIDER_GLOBAL: &str = "loadCourseCatalog";

fn window_global(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    Some(value)
}

pub fn injected_courses() -> Option<Vec<CourseRecord>> {
    let value = window_global(INJECTED_COURSES_GLOBAL)?;
    match serde_wasm_bindgen::from_value::<Vec<CourseRecord>>(value) {
        Ok(courses) => Some(courses),
        Err(e) => {
            tracing::warn!("ignoring unreadable window.{INJECTED_COURSES_GLOBAL}: {e}");
            None
        }
    }
}

pub fn course_provider() -> Option<js_sys::Function> {
    window_global(COURSE_PROVIDER_GLOBAL)?.dyn_into::<js_sys::Function>().ok()
}

pub async fn call_provider(provider: js_sys::Function) -> anyhow::Result<serde_json::Value> {
    let result = provider
        .call0(&JsValue::NULL)
        .map_err(|e| anyhow::anyhow!("course provider threw: {e:?}"))?;
    let value = wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(&result))
        .await
        .map_err(|e| anyhow::anyhow!("course provider rejected: {e:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| anyhow::anyhow!("course provider returned unreadable data: {e}"))
}

/// Dataset paths resolve against the page URL, like a relative fetch would.
pub fn page_config() -> CatalogConfig {
    let href = web_sys::window().and_then(|w| w.location().href().ok());
    match href {
        Some(href) => CatalogConfig::with_base_url(href),
        None => CatalogConfig::default(),
    }
}

pub fn build_loader(config: &CatalogConfig) -> DataLoader {
    let mut loader = DataLoader::new(config);
    if let Some(courses) = injected_courses() {
        loader = loader.with_injected_courses(courses);
    }
    if let Some(provider) = course_provider() {
        loader = loader.with_provider(move || call_provider(provider.clone()));
    }
    loader
}
