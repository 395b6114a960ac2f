//! Entry repository: creation, ownership lookup and stage results.

use chrono::Utc;

use ledger_core::entities::Entry;
use ledger_core::enums::{ConfidenceBand, Eligibility};
use ledger_core::ids::new_id;

use crate::LedgerDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_opt_enum, timestamp};

pub(crate) const ENTRY_COLUMNS: &str = "e.id, e.user_id, e.title, e.description, e.intent_prompt, e.domain, \
     e.eligibility, e.capability_summary, e.confidence_band, e.created_at";

pub(crate) fn row_to_entry(row: &libsql::Row) -> Result<Entry, DatabaseError> {
    Ok(Entry {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: get_opt_string(row, 3)?,
        intent_prompt: get_opt_string(row, 4)?,
        domain: get_opt_string(row, 5)?,
        eligibility: parse_opt_enum(row, 6)?,
        capability_summary: get_opt_string(row, 7)?,
        confidence_band: parse_opt_enum(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl LedgerDb {
    pub async fn create_entry(
        &self,
        user_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Entry, DatabaseError> {
        let now = Utc::now();
        let id = new_id();
        let description = description.map(str::trim).filter(|d| !d.is_empty());

        self.conn
            .execute(
                "INSERT INTO entries (id, user_id, title, description, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![id.as_str(), user_id, title.trim(), description, timestamp(now)],
            )
            .await
            .map_err(DatabaseError::from_write)?;

        tracing::debug!(entry_id = %id, user_id, "entry created");
        self.get_entry(&id).await
    }

    pub async fn get_entry(&self, id: &str) -> Result<Entry, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {ENTRY_COLUMNS} FROM entries e WHERE e.id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_entry(&row)
    }

    /// Owner of an entry, or `None` when the entry does not exist.
    pub async fn entry_owner(&self, id: &str) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT user_id FROM entries WHERE id = ?1", [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    pub async fn save_intent(&self, id: &str, intent_prompt: &str) -> Result<(), DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE entries SET intent_prompt = ?1 WHERE id = ?2",
                libsql::params![intent_prompt.trim(), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Store the classification outcome.
    pub async fn record_classification(
        &self,
        id: &str,
        domain: &str,
        eligibility: Eligibility,
    ) -> Result<(), DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE entries SET domain = ?1, eligibility = ?2 WHERE id = ?3",
                libsql::params![domain, eligibility.as_str(), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Store the evaluation outcome on the entry.
    pub async fn record_evaluation(
        &self,
        id: &str,
        capability_summary: &str,
        band: ConfidenceBand,
    ) -> Result<(), DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE entries SET capability_summary = ?1, confidence_band = ?2 WHERE id = ?3",
                libsql::params![capability_summary, band.as_str(), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// All entries owned by `user_id`, newest first.
    pub async fn list_entries_for_user(&self, user_id: &str) -> Result<Vec<Entry>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM entries e WHERE e.user_id = ?1
                     ORDER BY e.created_at DESC, e.rowid DESC"
                ),
                [user_id],
            )
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}
