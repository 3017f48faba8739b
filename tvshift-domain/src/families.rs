use serde::{Deserialize, Serialize};
use tracing::debug;
use tvshift_types::config::AppConfig;

/// Hardware class marker used by `TARGETED_DEVICE_FAMILY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceFamily {
    Phone,
    Tablet,
    Tv,
}

impl DeviceFamily {
    /// Integer code Xcode uses for this family.
    pub fn code(self) -> u8 {
        match self {
            DeviceFamily::Phone => 1,
            DeviceFamily::Tablet => 2,
            DeviceFamily::Tv => 3,
        }
    }
}

/// Device families a non-TV target should declare, derived from the app's tablet
/// intent.
///
/// `isTabletOnly` wins over `supportsTablet`, including the contradictory case
/// where `supportsTablet` is explicitly false.
pub fn device_families(config: &AppConfig) -> Vec<DeviceFamily> {
    let is_tablet_only = config.is_tablet_only();
    let supports_tablet = config.supports_tablet();

    let explicit_no_tablet = config.ios.as_ref().and_then(|ios| ios.supports_tablet) == Some(false);
    if is_tablet_only && explicit_no_tablet {
        debug!("isTabletOnly set with supportsTablet=false; tablet-only wins");
    }

    if is_tablet_only {
        vec![DeviceFamily::Tablet]
    } else if supports_tablet {
        vec![DeviceFamily::Phone, DeviceFamily::Tablet]
    } else {
        vec![DeviceFamily::Phone]
    }
}

/// Render families in the literal form `TARGETED_DEVICE_FAMILY` expects.
///
/// The value is always wrapped in double quotes; the project format has no other
/// way to carry a comma-bearing scalar, and quoting single values too keeps the
/// output uniform.
pub fn format_device_families(families: &[DeviceFamily]) -> String {
    let joined = families
        .iter()
        .map(|family| family.code().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("\"{joined}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tvshift_types::config::IosConfig;

    fn config(supports_tablet: Option<bool>, is_tablet_only: Option<bool>) -> AppConfig {
        AppConfig {
            ios: Some(IosConfig {
                supports_tablet,
                is_tablet_only,
            }),
        }
    }

    #[test]
    fn tablet_only_wins() {
        assert_eq!(
            device_families(&config(None, Some(true))),
            vec![DeviceFamily::Tablet]
        );
        assert_eq!(
            device_families(&config(Some(true), Some(true))),
            vec![DeviceFamily::Tablet]
        );
    }

    #[test]
    fn tablet_only_wins_over_explicit_no_tablet() {
        assert_eq!(
            device_families(&config(Some(false), Some(true))),
            vec![DeviceFamily::Tablet]
        );
    }

    #[test]
    fn supports_tablet_adds_tablet_to_phone() {
        assert_eq!(
            device_families(&config(Some(true), None)),
            vec![DeviceFamily::Phone, DeviceFamily::Tablet]
        );
        assert_eq!(
            device_families(&config(Some(true), Some(false))),
            vec![DeviceFamily::Phone, DeviceFamily::Tablet]
        );
    }

    #[test]
    fn phone_only_when_nothing_declared() {
        assert_eq!(
            device_families(&AppConfig::default()),
            vec![DeviceFamily::Phone]
        );
        assert_eq!(
            device_families(&config(Some(false), Some(false))),
            vec![DeviceFamily::Phone]
        );
    }

    #[test]
    fn formatting_is_unconditionally_quoted() {
        assert_eq!(format_device_families(&[DeviceFamily::Phone]), "\"1\"");
        assert_eq!(
            format_device_families(&[DeviceFamily::Phone, DeviceFamily::Tablet]),
            "\"1,2\""
        );
        assert_eq!(format_device_families(&[DeviceFamily::Tv]), "\"3\"");
    }
}
