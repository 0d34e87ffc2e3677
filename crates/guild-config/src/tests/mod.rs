mod config;

use std::env;

use tempfile::TempDir;

/// Variables `Config::load` reads; cleared so the host environment cannot leak in
const OVERRIDE_VARS: [&str; 6] = [
    "GUILD_DATALAYER_URL",
    "GUILD_STORE_ID",
    "GUILD_DATALAYER_TIMEOUT_SECS",
    "GUILD_LOG_LEVEL",
    "GUILD_LOG_COLORED",
    "GUILD_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with GUILD_CONFIG_DIR pointing at it and every
/// override variable cleared
pub(crate) struct TestConfigDir {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestConfigDir {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "GUILD_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(OVERRIDE_VARS.into_iter().map(EnvGuard::remove));
    TestConfigDir {
        temp,
        _guards: guards,
    }
}

pub(crate) fn write_config(dir: &TestConfigDir, contents: &str) {
    std::fs::write(dir.temp.path().join("config.toml"), contents).unwrap();
}
