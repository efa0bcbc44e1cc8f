use once_cell::sync::OnceCell;
use std::env;

/// Runtime configuration for the grade tracker, read once from the
/// environment. Every value has a sensible default so a bare invocation
/// works without any setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    /// Location of the persisted gradebook snapshot.
    pub data_path: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Load variables from the given `.env` file (if present) before
    /// resolving the configuration. First caller wins.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(Config::from_env)
    }

    /// The resolved configuration, reading the process environment on first
    /// access if [`Config::init`] was never called.
    pub fn get() -> &'static Self {
        CONFIG.get_or_init(Config::from_env)
    }

    fn from_env() -> Self {
        Config {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "markbook".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "logs/markbook.log".into()),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "data/gradebook.json".into()),
        }
    }
}
