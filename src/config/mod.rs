use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: f64,
    #[serde(default = "default_epoch")]
    pub epoch: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_weekly_hours() -> f64 {
    40.0
}
fn default_epoch() -> String {
    "2018-01-01".to_string()
}
fn default_region() -> String {
    "DE-BW".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            weekly_hours: default_weekly_hours(),
            epoch: default_epoch(),
            region: default_region(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worktrack")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".worktrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worktrack.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {:?}: {}", path, e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }

    /// Nominal daily working time in minutes (five-day week).
    pub fn daily_minutes(&self) -> i64 {
        (self.weekly_hours * 60.0 / 5.0).round() as i64
    }

    /// Epoch date before which no tracking data is considered.
    pub fn epoch_date(&self) -> AppResult<NaiveDate> {
        NaiveDate::parse_from_str(&self.epoch, "%Y-%m-%d")
            .map_err(|_| AppError::Config(format!("invalid epoch date '{}'", self.epoch)))
    }
}
