use crate::errors::{AppError, AppResult};
use crate::models::movement::DEFAULT_DEPARTURE_ACTION;
use crate::store::CsvStore;
use crate::store::log::ttlog;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_utc_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fields every configuration file is expected to carry.
pub const CONFIG_FIELDS: [&str; 8] = [
    "data_dir",
    "roster_file",
    "history_file",
    "log_file",
    "timezone",
    "utc_offset",
    "bind",
    "departure_action",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_history_file")]
    pub history_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Name of the reference timezone, for display.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Offset of the reference timezone used to stamp events (`±HH:MM`).
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_departure_action")]
    pub departure_action: String,
}

fn default_data_dir() -> String {
    Config::config_dir()
        .join("data")
        .to_string_lossy()
        .to_string()
}
fn default_roster_file() -> String {
    "choferes.csv".to_string()
}
fn default_history_file() -> String {
    "historial.csv".to_string()
}
fn default_log_file() -> String {
    "log.csv".to_string()
}
fn default_timezone() -> String {
    "America/Lima".to_string()
}
fn default_utc_offset() -> String {
    "-05:00".to_string()
}
fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_departure_action() -> String {
    DEFAULT_DEPARTURE_ACTION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            roster_file: default_roster_file(),
            history_file: default_history_file(),
            log_file: default_log_file(),
            timezone: default_timezone(),
            utc_offset: default_utc_offset(),
            bind: default_bind(),
            departure_action: default_departure_action(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfleetlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rfleetlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfleetlog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Field names absent from the config file on disk.
    pub fn missing_fields() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let missing = CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|field| yaml.get(*field).is_none())
            .collect();
        Ok(missing)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn roster_path(&self) -> PathBuf {
        self.data_path().join(&self.roster_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_path().join(&self.history_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_path().join(&self.log_file)
    }

    /// Offset of the reference timezone.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_utc_offset(&self.utc_offset)
    }

    /// Append a row to the audit table, stamped with the configured offset.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.log_path(), self.offset()?, operation, target, message)
    }

    /// Initialize configuration file, data directory and empty tables.
    ///
    /// In test mode the configuration file is not written.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        if let Some(dir) = custom_data_dir {
            config.data_dir = dir;
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        fs::create_dir_all(config.data_path())?;
        CsvStore::from_config(&config).ensure_tables()?;

        println!("✅ Data dir:    {}", config.data_path().display());

        Ok(config)
    }
}
