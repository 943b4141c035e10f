use crate::cli::Args;
use crate::database::Database;
use crate::date_provider::{DateProvider, OverrideDateProvider, SystemDateProvider};
use crate::error::StoreResult;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

pub const DEFAULT_DB_PATH: &str = "study_tracker.db";

/// Database configuration
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Whether to use in-memory database
    pub is_test_mode: bool,
    /// Custom database file path (ignored if in test mode)
    pub custom_path: Option<String>,
    /// Date reported as "today" instead of the system date
    pub override_date: Option<NaiveDate>,
}

impl DatabaseConfig {
    pub fn builder() -> DatabaseConfigBuilder {
        DatabaseConfigBuilder::default()
    }

    /// Gets the effective database path
    pub fn get_path(&self) -> &str {
        if self.is_test_mode {
            ":memory:"
        } else {
            self.custom_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
        }
    }

    pub fn date_provider(&self) -> Arc<dyn DateProvider> {
        match self.override_date {
            Some(date) => Arc::new(OverrideDateProvider::new(date)),
            None => Arc::new(SystemDateProvider),
        }
    }

    /// Builds the configuration from parsed command line arguments
    pub fn from_args(args: &Args) -> Result<Self, String> {
        Ok(DatabaseConfig {
            is_test_mode: args.test,
            custom_path: args
                .db_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            override_date: args.validate_override_date()?,
        })
    }
}

#[derive(Debug, Default)]
pub struct DatabaseConfigBuilder {
    config: DatabaseConfig,
}

impl DatabaseConfigBuilder {
    pub fn test_mode(mut self) -> Self {
        self.config.is_test_mode = true;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.custom_path = Some(path.into());
        self
    }

    /// Pins "today"; an impossible date leaves the system date in place
    pub fn date_ymd(mut self, year: i32, month: u32, day: u32) -> Self {
        self.config.override_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn build(self) -> DatabaseConfig {
        self.config
    }
}

/// Factory for creating Database instances
pub struct DatabaseFactory;

impl DatabaseFactory {
    /// Creates a database with the specified configuration
    pub fn create(config: DatabaseConfig) -> StoreResult<Database> {
        let path = config.get_path();
        if let Some(date) = config.override_date {
            info!("Using override date {}", date);
        }
        info!("Opening database at {}", path);
        Database::with_date_provider(path, config.date_provider())
    }
}
