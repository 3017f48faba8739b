//! Bridges between an external parser's JSON object graph and the typed section.
//!
//! Common pbxproj parsers expose the `XCBuildConfiguration` section as a map that
//! also carries `<id>_comment` string entries next to the records. Only
//! record-shaped entries are lifted into the typed view, and only the managed
//! keys are merged back, so everything else in the graph round-trips untouched.

use anyhow::Context;
use serde_json::Value;
use tracing::debug;
use tvshift_types::project::{BuildConfiguration, BuildConfigurationSection, keys};

/// Keys the retarget pass may add, change, or remove.
const MANAGED_KEYS: [&str; 4] = [
    keys::TARGETED_DEVICE_FAMILY,
    keys::TVOS_DEPLOYMENT_TARGET,
    keys::IOS_DEPLOYMENT_TARGET,
    keys::SDKROOT,
];

/// Lift the record-shaped entries of a parsed `XCBuildConfiguration` section.
///
/// Fails only when `value` is not an object at all. Entries that are not records
/// (comment strings, records without `buildSettings`) are skipped; non-string
/// setting values stay behind in the graph and are never touched.
pub fn section_from_value(value: &Value) -> anyhow::Result<BuildConfigurationSection> {
    let entries = value
        .as_object()
        .context("XCBuildConfiguration section is not an object")?;

    let mut section = BuildConfigurationSection::new();
    for (id, entry) in entries {
        let Some(record) = entry.as_object() else {
            debug!(id = %id, "skipping non-record section entry");
            continue;
        };
        let Some(settings) = record.get("buildSettings").and_then(Value::as_object) else {
            debug!(id = %id, "skipping entry without buildSettings");
            continue;
        };

        let mut build_settings = std::collections::BTreeMap::new();
        for (key, setting) in settings {
            if let Some(s) = setting.as_str() {
                build_settings.insert(key.clone(), s.to_owned());
            }
        }

        section.insert(
            id.clone(),
            BuildConfiguration {
                name: record.get("name").and_then(Value::as_str).map(str::to_owned),
                build_settings,
            },
        );
    }

    Ok(section)
}

/// Merge the managed keys of `section` back into the parsed graph.
///
/// For each lifted record: a managed key present in the typed record is written
/// as a string, a managed key absent from it is removed. Unmanaged keys, records
/// that were never lifted, and comment entries are preserved as found.
pub fn write_section(section: &BuildConfigurationSection, value: &mut Value) {
    let Some(entries) = value.as_object_mut() else {
        return;
    };

    for (id, record) in section {
        let Some(settings) = entries
            .get_mut(id)
            .and_then(|entry| entry.get_mut("buildSettings"))
            .and_then(Value::as_object_mut)
        else {
            continue;
        };

        for key in MANAGED_KEYS {
            match record.setting(key) {
                Some(setting) => {
                    settings.insert(key.to_string(), Value::String(setting.to_owned()));
                }
                None => {
                    settings.remove(key);
                }
            }
        }
    }
}
