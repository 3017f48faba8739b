use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Build-setting keys and literal values the retarget pass cares about.
pub mod keys {
    pub const PRODUCT_NAME: &str = "PRODUCT_NAME";
    pub const TARGETED_DEVICE_FAMILY: &str = "TARGETED_DEVICE_FAMILY";
    pub const TVOS_DEPLOYMENT_TARGET: &str = "TVOS_DEPLOYMENT_TARGET";
    pub const IOS_DEPLOYMENT_TARGET: &str = "IOS_DEPLOYMENT_TARGET";
    pub const SDKROOT: &str = "SDKROOT";

    /// `TARGETED_DEVICE_FAMILY` marker for television targets.
    pub const TV_DEVICE_FAMILY: &str = "3";
    pub const SDKROOT_APPLETVOS: &str = "appletvos";
    pub const SDKROOT_IPHONEOS: &str = "iphoneos";
}

/// One `XCBuildConfiguration` record (a named settings variant such as Debug or
/// Release, possibly per-target).
///
/// Only string-valued settings are modeled here. List-valued settings stay in the
/// external parser's graph and are never touched by tvshift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, rename = "buildSettings")]
    pub build_settings: BTreeMap<String, String>,
}

impl BuildConfiguration {
    pub fn setting(&self, key: &str) -> Option<&str> {
        self.build_settings.get(key).map(String::as_str)
    }

    pub fn has_setting(&self, key: &str) -> bool {
        self.build_settings.contains_key(key)
    }
}

/// A project's `XCBuildConfiguration` section, keyed by opaque record id.
///
/// BTreeMap so one pass visits records in a deterministic order.
pub type BuildConfigurationSection = BTreeMap<String, BuildConfiguration>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn build_configuration_reads_build_settings_key() {
        let record: BuildConfiguration = serde_json::from_str(
            r#"{"isa": "XCBuildConfiguration", "name": "Debug", "buildSettings": {"PRODUCT_NAME": "App"}}"#,
        )
        .expect("parse");
        assert_eq!(record.name.as_deref(), Some("Debug"));
        assert_eq!(record.setting(keys::PRODUCT_NAME), Some("App"));
        assert!(!record.has_setting(keys::SDKROOT));
    }
}
