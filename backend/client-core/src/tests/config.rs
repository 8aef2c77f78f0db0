// Unit tests for config module
// Defaults, validation and the load/save round trip

use crate::CATALOG_CHARACTER_BASE_URL;
use crate::config::{ApiConfig, CatalogConfig};
use crate::error::config::ConfigError;

use std::time::Duration;

/// **VALUE**: Verifies that a missing config file yields the built-in defaults.
///
/// **WHY THIS MATTERS**: First launch has no config file; the app must still reach the
/// public catalog without any setup.
#[test]
fn given_missing_config_file_when_loading_then_returns_defaults() {
    // GIVEN: An empty directory
    let dir = tempfile::tempdir().unwrap();

    // WHEN: Loading
    let config = CatalogConfig::load(dir.path()).unwrap();

    // THEN: Defaults point at the public catalog with no timeout override
    assert_eq!(config, CatalogConfig::default());
    assert_eq!(config.api.base_url, CATALOG_CHARACTER_BASE_URL);
    assert_eq!(config.api.timeout(), None);
}

/// **VALUE**: Verifies that first launch leaves an editable config file behind.
///
/// **BUG THIS CATCHES**: Would catch the app never persisting its settings, leaving users
/// to guess the file name and shape.
#[test]
fn given_no_config_file_when_initializing_then_writes_defaults() {
    // GIVEN: An empty, not yet created config directory
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("catalog");

    // WHEN: Loading with initialization
    let config = CatalogConfig::load_or_init(&config_dir);

    // THEN: Defaults are returned and were written to disk
    assert_eq!(config, CatalogConfig::default());
    assert!(config_dir.join("config.json").exists());
    assert_eq!(CatalogConfig::load(&config_dir).unwrap(), config);
}

#[test]
fn given_corrupt_config_file_when_initializing_then_file_is_left_untouched() {
    // GIVEN: A config file that does not parse
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, "{ not json").unwrap();

    // WHEN: Loading with initialization
    let config = CatalogConfig::load_or_init(dir.path());

    // THEN: Defaults are used but the user's file is kept
    assert_eq!(config, CatalogConfig::default());
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "{ not json");
}

#[test]
fn given_saved_config_when_loading_then_round_trips() {
    // GIVEN: A customised config saved to disk
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig {
        api: ApiConfig {
            base_url: String::from("http://127.0.0.1:8080/api/character/"),
            timeout_secs: Some(10),
        },
        ..CatalogConfig::default()
    };
    config.save(dir.path()).unwrap();

    // WHEN: Loading it back
    let loaded = CatalogConfig::load(dir.path()).unwrap();

    // THEN: Values survive and the timeout converts to a Duration
    assert_eq!(loaded, config);
    assert_eq!(loaded.api.timeout(), Some(Duration::from_secs(10)));
}

/// **VALUE**: Verifies that partial files fill in missing sections from defaults.
#[test]
fn given_partial_config_json_when_loading_then_missing_fields_default() {
    // GIVEN: A file with only a version
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "version": 1 }"#).unwrap();

    // WHEN: Loading
    let config = CatalogConfig::load(dir.path()).unwrap();

    // THEN: The api section is defaulted
    assert_eq!(config.api, ApiConfig::default());
}

/// **VALUE**: Verifies that a corrupt file is reported, while `load_or_default` recovers.
///
/// **BUG THIS CATCHES**: Would catch if parse errors were silently swallowed by `load`
/// or if `load_or_default` propagated them and blocked startup.
#[test]
fn given_corrupt_config_when_loading_then_parse_error_and_fallback_defaults() {
    // GIVEN: A file that is not JSON
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "not json").unwrap();

    // WHEN/THEN: load reports a parse error
    assert!(matches!(
        CatalogConfig::load(dir.path()),
        Err(ConfigError::ParseError { .. })
    ));

    // AND: load_or_default falls back
    assert_eq!(
        CatalogConfig::load_or_default(dir.path()),
        CatalogConfig::default()
    );
}

#[test]
fn given_invalid_values_when_validating_then_returns_validation_error() {
    let bad_url = CatalogConfig {
        api: ApiConfig {
            base_url: String::from("ftp://example.com"),
            timeout_secs: None,
        },
        ..CatalogConfig::default()
    };
    let zero_timeout = CatalogConfig {
        api: ApiConfig {
            timeout_secs: Some(0),
            ..ApiConfig::default()
        },
        ..CatalogConfig::default()
    };
    let future_version = CatalogConfig {
        version: 99,
        ..CatalogConfig::default()
    };

    for config in [bad_url, zero_timeout, future_version] {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "{config:?} should be rejected"
        );
    }
}
