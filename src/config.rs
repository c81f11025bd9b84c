//! Configuration management for the Spellbook Archive

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::error::AppResult;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArchiveConfig {
    /// Id handed to the first registered student
    pub first_student_id: i32,
    /// Literal prefixed to the first line of every output block
    pub output_tag: String,
    /// Header line written by `SAVE COLLECTION`
    pub collection_header: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub archive: ArchiveConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = ArchiveConfig::default();
        let logging = LoggingConfig::default();

        let config = Config::builder()
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .set_default("archive.first_student_id", i64::from(defaults.first_student_id))?
            .set_default("archive.output_tag", defaults.output_tag)?
            .set_default("archive.collection_header", defaults.collection_header)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (with prefix ARCHIVE_), e.g. ARCHIVE_LOGGING__LEVEL
            .add_source(
                Environment::with_prefix("ARCHIVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            first_student_id: 100_000,
            output_tag: "user: ".to_string(),
            collection_header: "serialNumber,title,inventor,type".to_string(),
        }
    }
}
