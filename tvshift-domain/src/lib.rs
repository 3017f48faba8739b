//! Domain logic: classify build-configuration records and retarget them between
//! the iOS (phone/tablet) and tvOS (television) device profiles.
//!
//! This crate owns *which* records change and *what* the new values are. It does not
//! own how a project descriptor is parsed or persisted; that's the host's side of
//! the contract (see `tvshift-core` for the `serde_json::Value` bridge).

mod families;
mod ports;
mod retarget;

pub use families::{DeviceFamily, device_families, format_device_families};
pub use ports::{WarningAggregator, WarningSink};
pub use retarget::{RetargetOptions, RetargetSummary, WARNING_CATEGORY, retarget_build_settings};
