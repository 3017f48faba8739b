//! Clap-free settings for the retarget pipeline.

use std::env;
use tvshift_types::config::ConfigData;
use tvshift_types::identity::ToolIdentity;

/// Environment variable forcing TV mode on regardless of host parameters.
pub const TV_ENV_VAR: &str = "TVSHIFT_TV";

/// tvOS deployment target written when the host does not supply one.
pub const DEFAULT_TVOS_DEPLOYMENT_TARGET: &str = "13.4";

/// Fully-resolved settings for one retarget run.
#[derive(Debug, Clone)]
pub struct RetargetSettings {
    pub is_tv: bool,
    pub verbose: bool,
    pub deployment_target: String,

    /// Identity stamped onto advisories. Defaults to this crate; embedders that
    /// front tvshift with their own tooling can substitute theirs.
    pub identity: ToolIdentity,
}

impl Default for RetargetSettings {
    fn default() -> Self {
        Self {
            is_tv: false,
            verbose: false,
            deployment_target: DEFAULT_TVOS_DEPLOYMENT_TARGET.to_string(),
            identity: default_identity(),
        }
    }
}

impl RetargetSettings {
    /// Resolve host parameters, honoring the `TVSHIFT_TV` override.
    pub fn resolve(params: &ConfigData) -> Self {
        Self::resolve_with_env(params, env::var(TV_ENV_VAR).ok().as_deref())
    }

    fn resolve_with_env(params: &ConfigData, env_tv: Option<&str>) -> Self {
        let is_tv = env_tv.map(boolish).unwrap_or(false) || params.is_tv.unwrap_or(false);
        Self {
            is_tv,
            verbose: params.show_verbose_warnings.unwrap_or(false),
            deployment_target: params
                .tvos_deployment_target
                .clone()
                .unwrap_or_else(|| DEFAULT_TVOS_DEPLOYMENT_TARGET.to_string()),
            identity: default_identity(),
        }
    }
}

fn default_identity() -> ToolIdentity {
    ToolIdentity::new(
        "tvshift".to_string(),
        Some(env!("CARGO_PKG_VERSION").to_string()),
    )
}

/// "1", "true", and "yes" (any case) count as true.
fn boolish(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
