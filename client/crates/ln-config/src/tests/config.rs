use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.provider.api_key, none());
    assert_that!(config.provider.timeout_secs, eq(crate::DEFAULT_PROVIDER_TIMEOUT_SECS));
    assert_that!(config.storage.demo_user_key, eq(crate::DEFAULT_DEMO_USER_KEY));
    assert!(!config.provider.is_configured());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_is_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join(".ln");

    // When
    let result = Config::load_from(&nested);

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(crate::CONFIG_FILE_NAME),
        r#"
              [provider]
              api_key = "toml-key"
              timeout_secs = 12

              [storage]
              demo_user_key = "leadNotesDemo"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.provider.api_key, some(eq("toml-key")));
    assert_that!(config.provider.timeout_secs, eq(12));
    assert_that!(config.storage.demo_user_key, eq("leadNotesDemo"));
    assert!(config.provider.is_configured());
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(crate::CONFIG_FILE_NAME),
        r#"
              [provider]
              api_key = "toml-key"
          "#,
    )
    .unwrap();
    let _key = EnvGuard::set("LN_PROVIDER_API_KEY", "env-key");
    let _timeout = EnvGuard::set("LN_PROVIDER_TIMEOUT_SECS", "45");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.provider.api_key, some(eq("env-key")));
    assert_that!(config.provider.timeout_secs, eq(45));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_joined_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("LN_LOG_FILE", "lead-notes.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path(temp.path());

    // Then
    assert_eq!(
        path,
        Some(temp.path().join(crate::DEFAULT_LOG_DIRECTORY).join("lead-notes.log"))
    );
}

#[test]
#[serial]
fn given_defaults_when_storage_dir_then_relative_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.storage_dir(temp.path()),
        temp.path().join(crate::DEFAULT_STORAGE_DIR)
    );
}
