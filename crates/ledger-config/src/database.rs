//! libSQL database configuration.

use serde::{Deserialize, Serialize};

fn default_local_path() -> String {
    String::from("ledger.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Remote database URL (e.g., `libsql://ledger-org.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file, used when no remote is configured.
    #[serde(default = "default_local_path")]
    pub local_path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_token: String::new(),
            local_path: default_local_path(),
        }
    }
}

impl DatabaseConfig {
    /// Check if a remote database is configured.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_local_file() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.local_path, "ledger.db");
    }

    #[test]
    fn url_without_token_is_not_remote() {
        let config = DatabaseConfig {
            url: "libsql://ledger.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
