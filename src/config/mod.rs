use crate::errors::{AppError, AppResult};
use crate::models::BudgetState;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub budgets: DefaultBudgets,
}

/// Budget used until the budget log provides one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBudgets {
    #[serde(rename = "Food")]
    pub food: Decimal,
    #[serde(rename = "Clothing")]
    pub clothing: Decimal,
    #[serde(rename = "Travel")]
    pub travel: Decimal,
    #[serde(rename = "Meeting")]
    pub meeting: Decimal,
}

impl Default for DefaultBudgets {
    fn default() -> Self {
        Self {
            food: Decimal::from(1500),
            clothing: Decimal::from(1000),
            travel: Decimal::from(1000),
            meeting: Decimal::from(300),
        }
    }
}

impl DefaultBudgets {
    pub fn to_state(&self) -> BudgetState {
        BudgetState::from_balances([self.food, self.clothing, self.travel, self.meeting])
    }
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            log_level: default_log_level(),
            budgets: DefaultBudgets::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            base.join("rexpense")
        } else {
            base.join(".rexpense")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rexpense.conf")
    }

    /// Return the full path of the default workbook
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rexpense.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory and write the configuration file
    /// (skipped in test mode). Returns the workbook path to initialize.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        let db_path = custom_db
            .map(PathBuf::from)
            .unwrap_or_else(Self::database_file);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(config.to_yaml()?.as_bytes())?;
            log::info!("config written to {}", Self::config_file().display());
        }

        Ok(db_path.to_string_lossy().to_string())
    }
}
