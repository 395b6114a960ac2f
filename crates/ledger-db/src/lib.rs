//! # ledger-db
//!
//! libSQL persistence for Lighthouse Ledger.
//!
//! Owns the relational state: entries, evidence, assessment questions and
//! answers, and public verification records. Repository methods are added
//! to [`LedgerDb`] in `repos/*`, one module per table.
//!
//! Uses the `libsql` crate (v0.9.29): a local file (or `:memory:` in tests),
//! or a remote database when a URL and auth token are configured.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
#[cfg(test)]
mod test_support;

use error::DatabaseError;
use ledger_config::DatabaseConfig;
use libsql::Builder;

pub use repos::evidence::NewEvidence;
pub use repos::verification::NewVerification;

/// Central database handle for all Ledger state operations.
pub struct LedgerDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LedgerDb {
    /// Open a local-only database at the given path.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let ledger_db = Self { db, conn };
        ledger_db.run_migrations().await?;
        Ok(ledger_db)
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        let ledger_db = Self { db, conn };
        ledger_db.run_migrations().await?;
        Ok(ledger_db)
    }

    /// Open whichever database the configuration points at.
    ///
    /// # Errors
    ///
    /// See [`Self::open_local`] and [`Self::open_remote`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_configured() {
            tracing::info!(url = %config.url, "opening remote database");
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            tracing::info!(path = %config.local_path, "opening local database");
            Self::open_local(&config.local_path).await
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
