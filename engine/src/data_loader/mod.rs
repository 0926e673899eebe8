//! Resolves the course catalog from the configured sources.
//!
//! Sources are tried in priority order and the first one that yields a
//! non-empty catalog wins:
//!
//! 1. records injected by the host,
//! 2. an async provider function,
//! 3. the dataset URL from [`CatalogConfig`].
//!
//! Provider failures are only logged; fetch failures end the load.

mod fetch_dataset;
pub use fetch_dataset::{fetch_dataset, parse_dataset};

use std::{future::Future, time::Duration};

use common::course_record::CourseRecord;
use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::Url;

use crate::{config::CatalogConfig, error::LoadError};

pub type CourseProvider = Box<dyn Fn() -> LocalBoxFuture<'static, anyhow::Result<serde_json::Value>>>;

pub enum CourseSource {
    Injected(Vec<CourseRecord>),
    Provider(CourseProvider),
    Fetch(Url),
}

impl CourseSource {
    pub fn name(&self) -> &'static str {
        match self {
            CourseSource::Injected(_) => "injected",
            CourseSource::Provider(_) => "provider",
            CourseSource::Fetch(_) => "fetch",
        }
    }

    fn priority(&self) -> u8 {
        match self {
            CourseSource::Injected(_) => 0,
            CourseSource::Provider(_) => 1,
            CourseSource::Fetch(_) => 2,
        }
    }

    /// `Ok(None)` means "nothing here, try the next source".
    async fn attempt(self, client: &reqwest::Client, timeout: Option<Duration>) -> Result<Option<Vec<CourseRecord>>, LoadError> {
        match self {
            CourseSource::Injected(courses) => Ok((!courses.is_empty()).then_some(courses)),
            CourseSource::Provider(provider) => Ok(run_provider(&provider).await),
            CourseSource::Fetch(url) => fetch_dataset(client, url, timeout).await.map(Some),
        }
    }
}

async fn run_provider(provider: &CourseProvider) -> Option<Vec<CourseRecord>> {
    let value = match provider().await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = ?e, "course provider failed, falling back");
            return None;
        }
    };
    if !value.is_array() {
        tracing::warn!("course provider did not return an array, falling back");
        return None;
    }
    match serde_json::from_value::<Vec<CourseRecord>>(value) {
        Ok(courses) if courses.is_empty() => {
            tracing::warn!("course provider returned no courses, falling back");
            None
        }
        Ok(courses) => Some(courses),
        Err(e) => {
            tracing::warn!(error = %e, "course provider returned malformed courses, falling back");
            None
        }
    }
}

pub struct DataLoader {
    sources: Vec<CourseSource>,
    client: reqwest::Client,
    fetch_timeout: Option<Duration>,
}

impl DataLoader {
    /// Loader with only the fetch source, when the config resolves to a URL.
    pub fn new(config: &CatalogConfig) -> Self {
        let sources = config.dataset_location().map(CourseSource::Fetch).into_iter().collect();
        Self { sources, client: reqwest::Client::new(), fetch_timeout: config.fetch_timeout() }
    }

    pub fn with_injected_courses(self, courses: Vec<CourseRecord>) -> Self {
        self.with_source(CourseSource::Injected(courses))
    }

    pub fn with_provider<F, Fut>(self, provider: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<serde_json::Value>> + 'static,
    {
        self.with_source(CourseSource::Provider(Box::new(move || provider().boxed_local())))
    }

    pub fn with_source(mut self, source: CourseSource) -> Self {
        self.sources.push(source);
        self.sources.sort_by_key(CourseSource::priority);
        self
    }

    #[cfg(test)]
    fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(CourseSource::name).collect()
    }

    pub async fn load(self) -> Result<Vec<CourseRecord>, LoadError> {
        for source in self.sources {
            let name = source.name();
            match source.attempt(&self.client, self.fetch_timeout).await? {
                Some(courses) => {
                    tracing::info!(source = name, count = courses.len(), "course catalog loaded");
                    return Ok(courses);
                }
                None => tracing::debug!(source = name, "course source yielded nothing"),
            }
        }
        Err(LoadError::NoDataSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str) -> CourseRecord {
        CourseRecord { code: Some(code.to_string()), ..Default::default() }
    }

    #[test]
    fn sources_are_kept_in_priority_order() {
        let loader = DataLoader::new(&CatalogConfig::with_base_url("http://localhost/"))
            .with_provider(|| async { anyhow::Ok(serde_json::json!([])) })
            .with_injected_courses(vec![]);
        assert_eq!(loader.source_names(), vec!["injected", "provider", "fetch"]);
    }

    #[tokio::test]
    async fn injected_courses_are_returned_unchanged() {
        let injected = vec![course("CS 101"), course("CS 102")];
        let loaded = DataLoader::new(&CatalogConfig::default()).with_injected_courses(injected.clone()).load().await.unwrap();
        assert_eq!(loaded, injected);
    }
}
