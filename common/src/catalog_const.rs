//! Constants shared by the loader, the controller and the host page.

/// Dataset path used when no other location is configured.
pub const DEFAULT_DATASET_PATH: &str = "data/courses.json";

pub const DEBOUNCE_MS: u64 = 150;

/// Level value that also matches records labelled "graduate".
pub const GRADUATE_LEVEL: &str = "500";
pub const GRADUATE_LEVEL_ALIAS: &str = "graduate";
