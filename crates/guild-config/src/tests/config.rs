use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, DEFAULT_DATALAYER_URL, DEFAULT_STORE_ID};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _dir = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.datalayer.base_url.as_str(), eq(DEFAULT_DATALAYER_URL));
    assert_that!(config.datalayer.store_id.as_str(), eq(DEFAULT_STORE_ID));
    assert_that!(config.datalayer.timeout_secs, eq(30));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _dir = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let dir = setup_config_dir();
    write_config(
        &dir,
        r#"
            [datalayer]
            base_url = "https://guild.example"
            store_id = "abcdef"
            timeout_secs = 10

            [logging]
            level = "debug"
            file = "guild.log"
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.datalayer.base_url.as_str(), eq("https://guild.example"));
    assert_that!(config.datalayer.store_id.as_str(), eq("abcdef"));
    assert_that!(config.datalayer.timeout_secs, eq(10));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.file, some(eq("guild.log")));
}

#[test]
#[serial]
fn given_partial_toml_when_load_then_missing_values_default() {
    // Given
    let dir = setup_config_dir();
    write_config(&dir, "[datalayer]\ntimeout_secs = 5\n");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.datalayer.timeout_secs, eq(5));
    assert_that!(config.datalayer.store_id.as_str(), eq(DEFAULT_STORE_ID));
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let dir = setup_config_dir();
    write_config(&dir, "[datalayer]\nstore_id = \"abcdef\"");
    let _store = EnvGuard::set("GUILD_STORE_ID", "123456");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.datalayer.store_id.as_str(), eq("123456"));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _dir = setup_config_dir();
    let _url = EnvGuard::set("GUILD_DATALAYER_URL", "http://10.0.0.5:8080");
    let _timeout = EnvGuard::set("GUILD_DATALAYER_TIMEOUT_SECS", "90");
    let _level = EnvGuard::set("GUILD_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("GUILD_LOG_COLORED", "false");
    let _file = EnvGuard::set("GUILD_LOG_FILE", "cli.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.datalayer.base_url.as_str(), eq("http://10.0.0.5:8080"));
    assert_that!(config.datalayer.timeout_secs, eq(90));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file, some(eq("cli.log")));
}

#[test]
#[serial]
fn given_unparseable_timeout_env_when_load_then_previous_value_kept() {
    // Given
    let _dir = setup_config_dir();
    let _timeout = EnvGuard::set("GUILD_DATALAYER_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.datalayer.timeout_secs, eq(30));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_under_config_dir_log_folder() {
    // Given
    let dir = setup_config_dir();
    let _file = EnvGuard::set("GUILD_LOG_FILE", "cli.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(path, some(eq(&dir.temp.path().join("log").join("cli.log"))));
}
