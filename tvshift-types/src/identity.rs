use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity stamped onto advisories so a developer can tell which tool touched
/// their project.
///
/// Injected by the caller rather than read from ambient package metadata, so
/// embedders can report themselves instead of tvshift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolIdentity {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ToolIdentity {
    pub fn new(name: String, version: Option<String>) -> Self {
        Self { name, version }
    }
}

impl fmt::Display for ToolIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
