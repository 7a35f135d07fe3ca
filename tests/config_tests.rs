// Config loading and validation tests

use std::io::Write;

use netbwm::config::AppConfig;
use netbwm::parser::FormatChoice;

const VALID_CONFIG: &str = r#"
[vnstat]
binary = "/usr/bin/vnstat"
interface = "eth0"
format = "json"

[live]
hour_interval_secs = 2.5
hour_cycles = 12

[report]
total_tolerance_ratio = 0.02
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.vnstat.binary, "/usr/bin/vnstat");
    assert_eq!(config.vnstat.interface.as_deref(), Some("eth0"));
    assert_eq!(config.vnstat.format, FormatChoice::Json);
    assert_eq!(config.live.hour_interval_secs, 2.5);
    assert_eq!(config.live.hour_cycles, 12);
    assert_eq!(config.report.total_tolerance_ratio, 0.02);

    let opts = config.parse_options();
    assert_eq!(opts.interface.as_deref(), Some("eth0"));
    assert_eq!(opts.series.total_tolerance_ratio, 0.02);
}

#[test]
fn test_config_empty_uses_defaults() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.vnstat.binary, "vnstat");
    assert_eq!(config.vnstat.interface, None);
    assert_eq!(config.vnstat.format, FormatChoice::Auto);
    assert_eq!(config.live.hour_interval_secs, 1.0);
    assert_eq!(config.live.hour_cycles, 24);
    assert_eq!(config.report.total_tolerance_ratio, 0.01);
}

#[test]
fn test_config_validation_rejects_empty_binary() {
    let bad = VALID_CONFIG.replace("binary = \"/usr/bin/vnstat\"", "binary = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("vnstat.binary"));
}

#[test]
fn test_config_validation_rejects_blank_interface() {
    let bad = VALID_CONFIG.replace("interface = \"eth0\"", "interface = \" \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("vnstat.interface"));
}

#[test]
fn test_config_validation_rejects_non_positive_interval() {
    let bad = VALID_CONFIG.replace("hour_interval_secs = 2.5", "hour_interval_secs = 0.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("hour_interval_secs"));

    let bad = VALID_CONFIG.replace("hour_interval_secs = 2.5", "hour_interval_secs = -1.0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("hour_interval_secs"));
}

#[test]
fn test_config_validation_rejects_interval_beyond_duration_range() {
    let bad = VALID_CONFIG.replace("hour_interval_secs = 2.5", "hour_interval_secs = 1e300");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");

    let mut config = AppConfig::default();
    config.live.hour_interval_secs = 1e300;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_rejects_zero_cycles() {
    let bad = VALID_CONFIG.replace("hour_cycles = 12", "hour_cycles = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("hour_cycles"));
}

#[test]
fn test_config_validation_rejects_tolerance_out_of_range() {
    let bad = VALID_CONFIG.replace(
        "total_tolerance_ratio = 0.02",
        "total_tolerance_ratio = 1.5",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("total_tolerance_ratio"));
}

#[test]
fn test_config_rejects_unknown_format() {
    let bad = VALID_CONFIG.replace("format = \"json\"", "format = \"xml\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_loads_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VALID_CONFIG.as_bytes()).unwrap();
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.live.hour_cycles, 12);
}

#[test]
fn test_config_missing_explicit_path_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}
