use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Declarative app configuration, as produced by the app's config tooling.
///
/// Only the `ios` section is consulted, and within it only the tablet-intent flags.
/// Everything else the document carries is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosConfig>,
}

/// The `ios` section of the app configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_tablet: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_tablet_only: Option<bool>,
}

impl AppConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigReadError> {
        serde_json::from_str(s).map_err(|e| ConfigReadError::Json {
            message: e.to_string(),
        })
    }

    /// True when the app declares tablet support. Absent means false.
    pub fn supports_tablet(&self) -> bool {
        self.ios
            .as_ref()
            .and_then(|ios| ios.supports_tablet)
            .unwrap_or(false)
    }

    /// True when the app declares itself tablet-only. Absent means false.
    pub fn is_tablet_only(&self) -> bool {
        self.ios
            .as_ref()
            .and_then(|ios| ios.is_tablet_only)
            .unwrap_or(false)
    }
}

/// Per-invocation parameters supplied by the host alongside the app configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
    #[serde(default, rename = "isTV", skip_serializing_if = "Option::is_none")]
    pub is_tv: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_verbose_warnings: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvos_deployment_target: Option<String>,
}

impl ConfigData {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigReadError> {
        serde_json::from_str(s).map_err(|e| ConfigReadError::Json {
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Error, Clone)]
pub enum ConfigReadError {
    #[error("json parse error: {message}")]
    Json { message: String },
}
