//! Verification records.
//!
//! Rows are append-only: `public_id` is UNIQUE and a trigger rejects updates.

use chrono::{DateTime, Utc};

use ledger_core::entities::Verification;
use ledger_core::enums::{ConfidenceBand, LayerDescriptor};
use ledger_core::ids::new_id;

use crate::LedgerDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, timestamp};

fn row_to_verification(row: &libsql::Row) -> Result<Verification, DatabaseError> {
    Ok(Verification {
        id: row.get::<String>(0)?,
        entry_id: row.get::<String>(1)?,
        public_id: row.get::<String>(2)?,
        domain: row.get::<String>(3)?,
        capability_summary: row.get::<String>(4)?,
        confidence_band: parse_enum(&row.get::<String>(5)?)?,
        intent_prompt: get_opt_string(row, 6)?,
        evidence_summary: get_opt_string(row, 7)?,
        layer_descriptors: [
            parse_enum(&row.get::<String>(8)?)?,
            parse_enum(&row.get::<String>(9)?)?,
            parse_enum(&row.get::<String>(10)?)?,
            parse_enum(&row.get::<String>(11)?)?,
        ],
        created_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

const VERIFICATION_COLUMNS: &str = "id, entry_id, public_id, domain, capability_summary, confidence_band, \
     intent_prompt, evidence_summary, layer1_descriptor, layer2_descriptor, layer3_descriptor, \
     layer4_descriptor, created_at";

/// Fields of a verification about to be published.
#[derive(Debug, Clone)]
pub struct NewVerification<'a> {
    pub entry_id: &'a str,
    pub public_id: &'a str,
    pub domain: &'a str,
    pub capability_summary: &'a str,
    pub confidence_band: ConfidenceBand,
    pub intent_prompt: Option<&'a str>,
    pub evidence_summary: Option<&'a str>,
    pub layer_descriptors: [LayerDescriptor; 4],
    pub created_at: DateTime<Utc>,
}

impl LedgerDb {
    /// Insert a verification record.
    ///
    /// A duplicate `public_id` fails with [`DatabaseError::Conflict`]; the
    /// existing record is left untouched.
    pub async fn create_verification(
        &self,
        new: &NewVerification<'_>,
    ) -> Result<Verification, DatabaseError> {
        if !new.confidence_band.is_verifiable() {
            return Err(DatabaseError::InvalidState(format!(
                "{} evaluations are not published",
                new.confidence_band
            )));
        }
        let id = new_id();
        let [l1, l2, l3, l4] = new.layer_descriptors;
        self.conn
            .execute(
                &format!(
                    "INSERT INTO verifications ({VERIFICATION_COLUMNS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params![
                    id.as_str(),
                    new.entry_id,
                    new.public_id,
                    new.domain,
                    new.capability_summary,
                    new.confidence_band.as_str(),
                    new.intent_prompt,
                    new.evidence_summary,
                    l1.as_str(),
                    l2.as_str(),
                    l3.as_str(),
                    l4.as_str(),
                    timestamp(new.created_at)
                ],
            )
            .await
            .map_err(DatabaseError::from_write)?;

        tracing::info!(entry_id = new.entry_id, public_id = new.public_id, "verification published");
        self.get_verification_by_public_id(new.public_id).await
    }

    pub async fn get_verification_by_public_id(
        &self,
        public_id: &str,
    ) -> Result<Verification, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {VERIFICATION_COLUMNS} FROM verifications WHERE public_id = ?1"),
                [public_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_verification(&row)
    }

    /// All verifications for an entry, oldest first.
    pub async fn list_verifications(
        &self,
        entry_id: &str,
    ) -> Result<Vec<Verification>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {VERIFICATION_COLUMNS} FROM verifications WHERE entry_id = ?1
                     ORDER BY created_at, rowid"
                ),
                [entry_id],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_verification(&row)?);
        }
        Ok(out)
    }
}
