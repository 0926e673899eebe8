//! Fetches and decodes the dataset resource.

use std::time::Duration;

use common::course_record::CourseRecord;
use reqwest::{
    Url,
    header::{CACHE_CONTROL, PRAGMA},
};

use crate::error::LoadError;

pub async fn fetch_dataset(client: &reqwest::Client, url: Url, timeout: Option<Duration>) -> Result<Vec<CourseRecord>, LoadError> {
    let request = client.get(url.clone()).header(CACHE_CONTROL, "no-cache").header(PRAGMA, "no-cache");
    #[cfg(not(target_arch = "wasm32"))]
    let request = match timeout {
        Some(timeout) => request.timeout(timeout),
        None => request,
    };
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;

    let response = request.send().await.map_err(|e| {
        tracing::error!(url = %url, error = ?e, "course data request failed");
        LoadError::Network(e)
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus(status.as_u16()));
    }
    let body = response.text().await.map_err(|e| LoadError::Body(e.to_string()))?;
    tracing::debug!(url = %url, len = body.len(), "course data received");
    parse_dataset(&body)
}

/// Decodes a dataset body: a JSON array of course objects, at least one.
pub fn parse_dataset(body: &str) -> Result<Vec<CourseRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| LoadError::Body(e.to_string()))?;
    if !value.is_array() {
        return Err(LoadError::NotAnArray);
    }
    let courses: Vec<CourseRecord> = serde_json::from_value(value).map_err(|e| LoadError::Malformed(e.to_string()))?;
    if courses.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    Ok(courses)
}
