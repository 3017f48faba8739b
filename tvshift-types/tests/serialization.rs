use pretty_assertions::assert_eq;
use tvshift_types::config::{AppConfig, ConfigData, IosConfig};
use tvshift_types::project::BuildConfigurationSection;
use tvshift_types::warning::Warning;

#[test]
fn app_config_round_trips_camel_case() {
    let config = AppConfig {
        ios: Some(IosConfig {
            supports_tablet: Some(true),
            is_tablet_only: None,
        }),
    };

    let value = serde_json::to_value(&config).expect("serialize");
    assert_eq!(value, serde_json::json!({"ios": {"supportsTablet": true}}));

    let back: AppConfig = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn config_data_omits_absent_parameters() {
    let value = serde_json::to_value(ConfigData::default()).expect("serialize");
    assert_eq!(value, serde_json::json!({}));
}

#[test]
fn section_tolerates_records_with_extra_fields() {
    let section: BuildConfigurationSection = serde_json::from_value(serde_json::json!({
        "13B07F941A680F5B00A75B9A": {
            "isa": "XCBuildConfiguration",
            "baseConfigurationReference": "13B07F8E1A680F5B00A75B9A",
            "name": "Release",
            "buildSettings": {
                "PRODUCT_NAME": "App",
                "TARGETED_DEVICE_FAMILY": "1,2"
            }
        }
    }))
    .expect("deserialize");

    let record = section
        .get("13B07F941A680F5B00A75B9A")
        .expect("record present");
    assert_eq!(record.name.as_deref(), Some("Release"));
    assert_eq!(record.setting("TARGETED_DEVICE_FAMILY"), Some("1,2"));
}

#[test]
fn warning_serializes_both_fields() {
    let warning = Warning {
        category: "xcodeproject".to_string(),
        message: "tvshift@0.1.0: modifying target App for tvOS".to_string(),
    };
    let value = serde_json::to_value(&warning).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "category": "xcodeproject",
            "message": "tvshift@0.1.0: modifying target App for tvOS"
        })
    );
}
