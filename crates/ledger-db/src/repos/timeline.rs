//! Per-user timeline assembly.
//!
//! One query for the entries, then three independent lookups (latest public
//! id, question presence, primary evidence) run concurrently.

use std::collections::{HashMap, HashSet};

use ledger_core::entities::Evidence;
use ledger_core::responses::TimelineEntry;

use crate::LedgerDb;
use crate::error::DatabaseError;
use crate::repos::evidence::{EVIDENCE_COLUMNS, row_to_evidence};

impl LedgerDb {
    /// Latest public id per entry for a user's entries.
    pub async fn latest_public_ids_for_user(
        &self,
        user_id: &str,
    ) -> Result<HashMap<String, String>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT v.entry_id, v.public_id FROM verifications v
                 JOIN entries e ON e.id = v.entry_id
                 WHERE e.user_id = ?1
                 ORDER BY v.created_at ASC, v.rowid ASC",
                [user_id],
            )
            .await?;
        let mut latest = HashMap::new();
        while let Some(row) = rows.next().await? {
            latest.insert(row.get::<String>(0)?, row.get::<String>(1)?);
        }
        Ok(latest)
    }

    /// Ids of a user's entries that have generated questions.
    pub async fn entries_with_questions_for_user(
        &self,
        user_id: &str,
    ) -> Result<HashSet<String>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                "SELECT DISTINCT q.entry_id FROM assessment_questions q
                 JOIN entries e ON e.id = q.entry_id
                 WHERE e.user_id = ?1",
                [user_id],
            )
            .await?;
        let mut ids = HashSet::new();
        while let Some(row) = rows.next().await? {
            ids.insert(row.get::<String>(0)?);
        }
        Ok(ids)
    }

    /// Earliest evidence item per entry for a user's entries.
    pub async fn primary_evidence_for_user(
        &self,
        user_id: &str,
    ) -> Result<HashMap<String, Evidence>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {EVIDENCE_COLUMNS} FROM evidence ev
                     JOIN entries e ON e.id = ev.entry_id
                     WHERE e.user_id = ?1
                     ORDER BY ev.created_at ASC, ev.rowid ASC"
                ),
                [user_id],
            )
            .await?;
        let mut primary: HashMap<String, Evidence> = HashMap::new();
        while let Some(row) = rows.next().await? {
            let evidence = row_to_evidence(&row)?;
            primary.entry(evidence.entry_id.clone()).or_insert(evidence);
        }
        Ok(primary)
    }

    /// A user's entries, newest first, with derived status and summaries.
    pub async fn timeline(
        &self,
        user_id: &str,
        summary_chars: usize,
    ) -> Result<Vec<TimelineEntry>, DatabaseError> {
        let entries = self.list_entries_for_user(user_id).await?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let (mut public_ids, with_questions, primary) = tokio::try_join!(
            self.latest_public_ids_for_user(user_id),
            self.entries_with_questions_for_user(user_id),
            self.primary_evidence_for_user(user_id),
        )?;

        Ok(entries
            .iter()
            .map(|entry| {
                TimelineEntry::compose(
                    entry,
                    primary.get(&entry.id),
                    public_ids.remove(&entry.id),
                    with_questions.contains(&entry.id),
                    summary_chars,
                )
            })
            .collect())
    }
}
