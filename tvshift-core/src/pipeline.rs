//! The retarget pipeline, I/O-agnostic: hosts parse the project descriptor and
//! persist it; this lifts the parsed section, runs the domain pass, and merges
//! the result back.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use tvshift_domain::{
    RetargetOptions, RetargetSummary, WarningAggregator, retarget_build_settings,
};
use tvshift_types::config::AppConfig;
use tvshift_types::warning::Warning;

use crate::adapters;
use crate::settings::RetargetSettings;

/// Outcome of [`run_retarget`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetargetOutcome {
    pub summary: RetargetSummary,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

/// Run one retarget pass over a parsed `XCBuildConfiguration` section.
///
/// `section_value` is the section as exposed by the host's pbxproj parser; it is
/// mutated in place and the caller persists it. The same graph comes back with at
/// most four settings rewritten per app-target record.
pub fn run_retarget(
    config: &AppConfig,
    section_value: &mut Value,
    settings: &RetargetSettings,
) -> anyhow::Result<RetargetOutcome> {
    let mut section = adapters::section_from_value(section_value)
        .context("read XCBuildConfiguration section")?;

    let opts = RetargetOptions {
        is_tv: settings.is_tv,
        verbose: settings.verbose,
        deployment_target: settings.deployment_target.clone(),
        identity: settings.identity.clone(),
    };

    let mut warnings = WarningAggregator::new();
    let summary = retarget_build_settings(config, &mut section, &opts, &mut warnings);

    adapters::write_section(&section, section_value);

    info!(
        modified = summary.modified,
        skipped = summary.skipped,
        is_tv = settings.is_tv,
        "retargeted build configurations"
    );

    Ok(RetargetOutcome {
        summary,
        warnings: warnings.into_warnings(),
    })
}
