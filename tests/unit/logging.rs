use super::*;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.default_filter, "gridmatch=info");
    assert!(config.log_dir.ends_with("logs"));
}

#[test]
fn test_init_once() {
    let dir = tempdir().unwrap();
    let config = LoggingConfig {
        log_dir: dir.path().join("logs"),
        ..LoggingConfig::default()
    };

    let guard = init(&config).expect("first init installs the subscriber");
    assert_eq!(guard.log_dir(), config.log_dir.as_path());
    assert!(config.log_dir.is_dir());

    assert!(init(&config).is_none());
    drop(guard);
}
