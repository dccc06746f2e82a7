//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{Currency, Locale};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Display formatting.
    #[serde(default)]
    pub formatting: FormattingConfig,
    /// Invoice line submission policy overrides.
    #[serde(default)]
    pub invoice: InvoiceConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Display formatting configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormattingConfig {
    /// Locale used for currency output.
    #[serde(default)]
    pub locale: Locale,
    /// Currency assumed when an input carries none.
    #[serde(default)]
    pub currency: Currency,
}

/// Invoice line submission overrides.
///
/// `None` keeps the system-wide default baked into the core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceConfig {
    /// Account used for lines that have no category.
    pub fallback_account_uuid: Option<String>,
    /// Prefix marking client-generated line ids.
    pub temp_id_prefix: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "tally=info,tally_core=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants the deserializer cannot express.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(account) = &self.invoice.fallback_account_uuid {
            if account.trim().is_empty() {
                return Err(AppError::Config(
                    "invoice.fallback_account_uuid must not be empty".to_string(),
                ));
            }
        }
        if let Some(prefix) = &self.invoice.temp_id_prefix {
            if prefix.is_empty() {
                return Err(AppError::Config(
                    "invoice.temp_id_prefix must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
