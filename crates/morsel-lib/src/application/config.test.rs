use super::*;

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorChoice::Auto);
    assert!(config.data_dir.is_none());
}

#[test]
fn test_logger_config_derivation() {
    let mut config = AppConfig::default();
    config.log_level = 3;
    config.color = ColorChoice::Never;

    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert!(!logger.ansi);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: AppConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
}
