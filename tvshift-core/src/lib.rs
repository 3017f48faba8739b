//! Embeddable core for tvshift.
//!
//! Provides a clap-free entry point suitable for linking into host config
//! tooling. The host owns parsing and persisting the project descriptor; tvshift
//! owns deciding which build-configuration records change and what the new
//! values are.
//!
//! # Entry point
//!
//! - [`run_retarget`](pipeline::run_retarget) — lift the parsed section, run the
//!   domain pass, merge the managed keys back

pub mod adapters;
pub mod pipeline;
pub mod settings;

// Re-export the domain surface so hosts don't need tvshift-domain directly.
pub use tvshift_domain::{DeviceFamily, RetargetSummary, WarningAggregator, WarningSink};
