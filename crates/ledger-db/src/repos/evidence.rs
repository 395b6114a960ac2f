//! Evidence repository.
//!
//! Text and link evidence accumulate; file evidence is limited to one row per
//! entry (enforced by a partial unique index) and is replaced in place.

use chrono::Utc;

use ledger_core::entities::{Evidence, FileMetadata};
use ledger_core::enums::EvidenceType;
use ledger_core::ids::new_id;

use crate::LedgerDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_opt_u64, parse_datetime, parse_enum, timestamp};

pub(crate) const EVIDENCE_COLUMNS: &str = "ev.id, ev.entry_id, ev.evidence_type, ev.content, ev.storage_path, \
     ev.original_filename, ev.mime_type, ev.size, ev.transcript, ev.created_at";

pub(crate) fn row_to_evidence(row: &libsql::Row) -> Result<Evidence, DatabaseError> {
    Ok(Evidence {
        id: row.get::<String>(0)?,
        entry_id: row.get::<String>(1)?,
        evidence_type: parse_enum(&row.get::<String>(2)?)?,
        content: row.get::<String>(3)?,
        storage_path: get_opt_string(row, 4)?,
        original_filename: get_opt_string(row, 5)?,
        mime_type: get_opt_string(row, 6)?,
        size: get_opt_u64(row, 7)?,
        transcript: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Text or link evidence to insert.
#[derive(Debug, Clone)]
pub struct NewEvidence<'a> {
    pub evidence_type: EvidenceType,
    pub content: &'a str,
    pub transcript: Option<&'a str>,
}

fn size_param(size: u64) -> Result<i64, DatabaseError> {
    i64::try_from(size).map_err(|_| DatabaseError::InvalidState(format!("size {size} too large")))
}

impl LedgerDb {
    /// Insert text or link evidence.
    pub async fn add_evidence(
        &self,
        entry_id: &str,
        new: NewEvidence<'_>,
    ) -> Result<Evidence, DatabaseError> {
        if new.evidence_type == EvidenceType::File {
            return Err(DatabaseError::InvalidState(
                "file evidence must be stored with its object metadata".into(),
            ));
        }
        let id = new_id();
        self.conn
            .execute(
                "INSERT INTO evidence (id, entry_id, evidence_type, content, transcript, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    entry_id,
                    new.evidence_type.as_str(),
                    new.content,
                    new.transcript,
                    timestamp(Utc::now())
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        self.get_evidence(&id).await
    }

    /// Insert the entry's file evidence row.
    ///
    /// Fails with [`DatabaseError::Conflict`] if the entry already has one.
    pub async fn insert_file_evidence(
        &self,
        entry_id: &str,
        file: &FileMetadata,
    ) -> Result<Evidence, DatabaseError> {
        let id = new_id();
        self.conn
            .execute(
                "INSERT INTO evidence (id, entry_id, evidence_type, content, storage_path,
                                       original_filename, mime_type, size, created_at)
                 VALUES (?1, ?2, 'file', ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    id.as_str(),
                    entry_id,
                    file.original_filename.as_str(),
                    file.storage_path.as_str(),
                    file.original_filename.as_str(),
                    file.mime_type.as_str(),
                    size_param(file.size)?,
                    timestamp(Utc::now())
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;
        self.get_evidence(&id).await
    }

    /// Point an existing file evidence row at a newly stored object.
    ///
    /// Keeps the row id and creation time.
    pub async fn replace_file_evidence(
        &self,
        evidence_id: &str,
        file: &FileMetadata,
    ) -> Result<Evidence, DatabaseError> {
        let changed = self
            .conn
            .execute(
                "UPDATE evidence
                 SET content = ?1, storage_path = ?2, original_filename = ?3, mime_type = ?4, size = ?5
                 WHERE id = ?6 AND evidence_type = 'file'",
                libsql::params![
                    file.original_filename.as_str(),
                    file.storage_path.as_str(),
                    file.original_filename.as_str(),
                    file.mime_type.as_str(),
                    size_param(file.size)?,
                    evidence_id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_evidence(evidence_id).await
    }

    /// The entry's current file evidence, if any.
    pub async fn current_file_evidence(
        &self,
        entry_id: &str,
    ) -> Result<Option<Evidence>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {EVIDENCE_COLUMNS} FROM evidence ev
                     WHERE ev.entry_id = ?1 AND ev.evidence_type = 'file' LIMIT 1"
                ),
                [entry_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_evidence(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn get_evidence(&self, id: &str) -> Result<Evidence, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {EVIDENCE_COLUMNS} FROM evidence ev WHERE ev.id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_evidence(&row)
    }

    /// Evidence for an entry, newest first.
    pub async fn list_evidence(&self, entry_id: &str) -> Result<Vec<Evidence>, DatabaseError> {
        self.query_evidence(
            &format!(
                "SELECT {EVIDENCE_COLUMNS} FROM evidence ev WHERE ev.entry_id = ?1
                 ORDER BY ev.created_at DESC, ev.rowid DESC"
            ),
            entry_id,
        )
        .await
    }

    /// Evidence for an entry in the order it was recorded. Used to build
    /// model prompts.
    pub async fn list_evidence_chronological(
        &self,
        entry_id: &str,
    ) -> Result<Vec<Evidence>, DatabaseError> {
        self.query_evidence(
            &format!(
                "SELECT {EVIDENCE_COLUMNS} FROM evidence ev WHERE ev.entry_id = ?1
                 ORDER BY ev.created_at ASC, ev.rowid ASC"
            ),
            entry_id,
        )
        .await
    }

    async fn query_evidence(&self, sql: &str, param: &str) -> Result<Vec<Evidence>, DatabaseError> {
        let mut rows = self.conn.query(sql, [param]).await?;
        let mut evidence = Vec::new();
        while let Some(row) = rows.next().await? {
            evidence.push(row_to_evidence(&row)?);
        }
        Ok(evidence)
    }
}
