use serde::{Deserialize, Serialize};
use tracing::debug;
use tvshift_types::config::AppConfig;
use tvshift_types::identity::ToolIdentity;
use tvshift_types::project::{BuildConfigurationSection, keys};

use crate::families::{device_families, format_device_families};
use crate::ports::WarningSink;

/// Advisory category used for everything this pass reports.
pub const WARNING_CATEGORY: &str = "xcodeproject";

/// Per-invocation knobs for the retarget pass.
#[derive(Debug, Clone)]
pub struct RetargetOptions {
    /// Move targets to the television profile when true, back to phone/tablet
    /// when false.
    pub is_tv: bool,

    /// Also report TV-ward edits. Phone/tablet-ward edits are always reported.
    pub verbose: bool,

    /// Dotted OS version written to the deployment-target setting, e.g. "13.4".
    pub deployment_target: String,

    /// Identity stamped onto advisories.
    pub identity: ToolIdentity,
}

/// Counts of what one pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetargetSummary {
    pub modified: u64,
    pub skipped: u64,
}

/// Classify every build-configuration record and rewrite the ones pointing at the
/// wrong device profile.
///
/// Records without `PRODUCT_NAME` are not target configurations and are left
/// byte-for-byte alone. A record whose `TARGETED_DEVICE_FAMILY` already matches
/// the requested profile is untouched too, which makes the pass idempotent.
/// Device families are derived once per invocation, not per record. The pass
/// never fails; anything noteworthy goes to `warnings`.
pub fn retarget_build_settings(
    config: &AppConfig,
    section: &mut BuildConfigurationSection,
    opts: &RetargetOptions,
    warnings: &mut dyn WarningSink,
) -> RetargetSummary {
    let families = format_device_families(&device_families(config));

    let mut summary = RetargetSummary::default();
    for record in section.values_mut() {
        let Some(product_name) = record.setting(keys::PRODUCT_NAME).map(str::to_owned) else {
            summary.skipped += 1;
            continue;
        };

        let tv_targeted =
            record.setting(keys::TARGETED_DEVICE_FAMILY) == Some(keys::TV_DEVICE_FAMILY);

        if opts.is_tv && !tv_targeted {
            if opts.verbose {
                warnings.add_warning(
                    WARNING_CATEGORY,
                    advisory(&opts.identity, &product_name, opts.is_tv),
                );
            }
            let settings = &mut record.build_settings;
            settings.insert(
                keys::TARGETED_DEVICE_FAMILY.to_string(),
                keys::TV_DEVICE_FAMILY.to_string(),
            );
            settings.insert(
                keys::TVOS_DEPLOYMENT_TARGET.to_string(),
                opts.deployment_target.clone(),
            );
            settings.insert(keys::SDKROOT.to_string(), keys::SDKROOT_APPLETVOS.to_string());
            settings.remove(keys::IOS_DEPLOYMENT_TARGET);
            summary.modified += 1;
        } else if !opts.is_tv && tv_targeted {
            // Phone/tablet-ward edits are reported regardless of verbosity.
            warnings.add_warning(
                WARNING_CATEGORY,
                advisory(&opts.identity, &product_name, opts.is_tv),
            );
            let settings = &mut record.build_settings;
            settings.insert(keys::TARGETED_DEVICE_FAMILY.to_string(), families.clone());
            settings.insert(
                keys::IOS_DEPLOYMENT_TARGET.to_string(),
                opts.deployment_target.clone(),
            );
            settings.insert(keys::SDKROOT.to_string(), keys::SDKROOT_IPHONEOS.to_string());
            settings.remove(keys::TVOS_DEPLOYMENT_TARGET);
            summary.modified += 1;
        } else {
            debug!(product = %product_name, "record already matches the requested profile");
            summary.skipped += 1;
        }
    }

    summary
}

fn advisory(identity: &ToolIdentity, product_name: &str, tv: bool) -> String {
    let platform = if tv { "tvOS" } else { "iOS" };
    format!("{identity}: modifying target {product_name} for {platform}")
}
