//! Shared course record model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry as supplied by the data source.
///
/// Every field is optional. Text fields accept any JSON scalar and keep its
/// string form; `null`, arrays and objects count as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CourseRecord {
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(deserialize_with = "lenient_value", skip_serializing_if = "Option::is_none")]
    pub level: Option<LooseValue>,
    #[serde(deserialize_with = "lenient_value", skip_serializing_if = "Option::is_none")]
    pub credits: Option<LooseValue>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A field that may arrive either as a JSON number or as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
}

impl LooseValue {
    /// Numeric reading of the value. Text is trimmed and parsed; empty,
    /// unparseable and non-finite values yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            LooseValue::Number(n) => *n,
            LooseValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
        };
        n.is_finite().then_some(n)
    }
}

impl fmt::Display for LooseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseValue::Number(n) => write!(f, "{}", n),
            LooseValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        LooseValue::Number(value)
    }
}

impl CourseRecord {
    /// Level as a plain string, numbers rendered without a trailing `.0`.
    pub fn level_text(&self) -> Option<String> {
        self.level.as_ref().map(|l| l.to_string())
    }

    pub fn credits_text(&self) -> Option<String> {
        self.credits.as_ref().map(|c| c.to_string())
    }

    pub fn credits_value(&self) -> Option<f64> {
        self.credits.as_ref().and_then(LooseValue::as_number)
    }

    /// Lowercased, space-joined text of the searchable fields that are present.
    pub fn searchable_text(&self) -> String {
        let level = self.level_text();
        [
            self.title.as_deref(),
            self.code.as_deref(),
            self.department.as_deref(),
            level.as_deref(),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => n.as_f64().map(|n| LooseValue::Number(n).to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<LooseValue>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(LooseValue::Text(s)),
        serde_json::Value::Number(n) => n.as_f64().map(LooseValue::Number),
        serde_json::Value::Bool(b) => Some(LooseValue::Text(b.to_string())),
        _ => None,
    })
}
