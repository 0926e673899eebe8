//! Errors raised while loading the course catalog.

use thiserror::Error;

pub const NO_DATA_SOURCE_MESSAGE: &str = "No data source available. Provide courses through an injected course list or a course provider, or serve a JSON array of courses at the configured dataset URL.";
pub const DATASET_UNUSABLE_MESSAGE: &str = "The course dataset is empty or malformed.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch course data.";

#[derive(Error, Debug)]
pub enum LoadError {
    /// Transport failure; the full error is logged where it happens.
    #[error("Failed to fetch course data")]
    Network(#[source] reqwest::Error),

    #[error("Course data request returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Course data is not a JSON array")]
    NotAnArray,

    #[error("Could not read course data: {0}")]
    Body(String),

    #[error("Course data contains malformed records: {0}")]
    Malformed(String),

    #[error("No course data source is configured")]
    NoDataSource,

    #[error("Course dataset is empty")]
    EmptyDataset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureKind {
    Network,
    NoDataSource,
    DatasetUnusable,
}

impl LoadError {
    pub fn kind(&self) -> LoadFailureKind {
        match self {
            LoadError::Network(_) => LoadFailureKind::Network,
            LoadError::HttpStatus(_) | LoadError::NotAnArray | LoadError::Body(_) | LoadError::NoDataSource => {
                LoadFailureKind::NoDataSource
            }
            LoadError::Malformed(_) | LoadError::EmptyDataset => LoadFailureKind::DatasetUnusable,
        }
    }

    /// The single message shown to the user when loading fails.
    pub fn user_message(&self) -> String {
        match (self.kind(), self) {
            (LoadFailureKind::Network, _) => FETCH_FAILED_MESSAGE.to_string(),
            (LoadFailureKind::NoDataSource, LoadError::NoDataSource) => NO_DATA_SOURCE_MESSAGE.to_string(),
            (LoadFailureKind::NoDataSource, detail) => format!("{NO_DATA_SOURCE_MESSAGE} ({detail})"),
            (LoadFailureKind::DatasetUnusable, LoadError::EmptyDataset) => DATASET_UNUSABLE_MESSAGE.to_string(),
            (LoadFailureKind::DatasetUnusable, detail) => format!("{DATASET_UNUSABLE_MESSAGE} ({detail})"),
        }
    }
}
