//! Shared filter criteria model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Snapshot of the filter controls, read fresh for every filtering pass.
///
/// Empty fields mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterCriteria {
    pub departments: BTreeSet<String>,
    pub level: String,
    pub min_credits: String,
    pub query: String,
}

impl FilterCriteria {
    pub fn toggle_department(&mut self, department: &str) {
        if !self.departments.remove(department) {
            self.departments.insert(department.to_string());
        }
    }
}
