use crate::errors::{AppError, AppResult};
use crate::sheet::RetryPolicy;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub workbook: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_password: Option<String>,
    #[serde(default = "default_daily_wage")]
    pub default_daily_wage: i64,
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_daily_wage() -> i64 {
    550
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: Self::workbook_file().to_string_lossy().to_string(),
            app_password: None,
            default_daily_wage: default_daily_wage(),
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("farmledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".farmledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("farmledger.conf")
    }

    /// Return the default path of the workbook
    pub fn workbook_file() -> PathBuf {
        Self::config_dir().join("farmledger.sqlite")
    }

    /// `~` is expanded; a relative workbook name lives in the config directory.
    pub fn resolve_workbook(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and workbook location
    pub fn init_all(custom_workbook: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // Workbook: user provided or default
        let workbook = match custom_workbook {
            Some(name) => Self::resolve_workbook(&name),
            None => Self::workbook_file(),
        };

        let config = Config {
            workbook: workbook.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = workbook.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
