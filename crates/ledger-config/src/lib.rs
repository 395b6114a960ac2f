//! # ledger-config
//!
//! Layered configuration loading for Lighthouse Ledger using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEDGER_*` prefix, `__` as separator)
//! 2. `ledger.toml` in the working directory, or the file given with `--config`
//! 3. User-level `~/.config/ledger/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEDGER_AUTH__GUEST_USER_ID` -> `auth.guest_user_id`,
//! `LEDGER_AI__API_KEY` -> `ai.api_key`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ledger_config::LedgerConfig;
//!
//! let config = LedgerConfig::load_with_dotenv(None).expect("config");
//! if config.auth.guest_misconfigured() {
//!     eprintln!("guest mode is on but no guest user id is set");
//! }
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod limits;
mod server;
mod storage;
mod transcript;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use limits::LimitsConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use transcript::TranscriptConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for all settings.
pub const ENV_PREFIX: &str = "LEDGER_";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "ledger.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl LedgerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `explicit` replaces the project-local `ledger.toml` when given.
    /// Does NOT call `dotenvy`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the working
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        match explicit {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make the service misbehave at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.signed_url_ttl_secs == 0 {
            return Err(invalid("storage.signed_url_ttl_secs", "must be greater than zero"));
        }
        if self.limits.evidence_char_budget == 0 {
            return Err(invalid("limits.evidence_char_budget", "must be greater than zero"));
        }
        if self.limits.max_upload_bytes == 0 {
            return Err(invalid("limits.max_upload_bytes", "must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            return Err(invalid("ai.temperature", "must be between 0.0 and 2.0"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ledger").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
