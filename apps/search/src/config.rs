//! Configuration loading.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `config/catalog-search.{toml,yaml,json}` (optional)
//! 3. `CATALOG__*` environment variables, e.g. `CATALOG__SEARCH__MAX_PAGE_SIZE=200`
//!
//! A `.env` file in the working directory is loaded first.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// Id of the English row in the `language` table.
    pub english_language_id: Option<i64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 500,
            english_language_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// daily, hourly, minutely or never
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "catalog-search".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::load_from("config/catalog-search")
    }

    /// Loads defaults, the optional file `path` (without extension) and the
    /// environment.
    pub fn load_from(path: &str) -> Result<Self> {
        let defaults = Config::default();
        let config = config::Config::builder()
            .set_default(
                "search.default_page_size",
                i64::from(defaults.search.default_page_size),
            )?
            .set_default(
                "search.max_page_size",
                i64::from(defaults.search.max_page_size),
            )?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("logging.file_enabled", defaults.logging.file_enabled)?
            .set_default("logging.file_directory", defaults.logging.file_directory)?
            .set_default("logging.file_prefix", defaults.logging.file_prefix)?
            .set_default("logging.file_rotation", defaults.logging.file_rotation)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "database.acquire_timeout_secs",
                defaults.database.acquire_timeout_secs as i64,
            )?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if search.max_page_size == 0 {
            return Err(Error::Validation(
                "search.max_page_size must be positive".into(),
            ));
        }
        if search.default_page_size == 0 || search.default_page_size > search.max_page_size {
            return Err(Error::Validation(format!(
                "search.default_page_size must be between 1 and {}",
                search.max_page_size
            )));
        }
        if !matches!(
            self.logging.file_rotation.as_str(),
            "daily" | "hourly" | "minutely" | "never"
        ) {
            return Err(Error::Validation(format!(
                "unknown logging.file_rotation '{}'",
                self.logging.file_rotation
            )));
        }
        if self.database.max_connections == 0 {
            return Err(Error::Validation(
                "database.max_connections must be positive".into(),
            ));
        }
        Ok(())
    }
}
