use ledger_core::entities::Entry;
use ledger_db::LedgerDb;
use ledger_db::error::DatabaseError;

use crate::error::ApiError;

/// Load `entry_id` if it belongs to `user_id`.
///
/// A missing entry and someone else's entry both yield
/// [`ApiError::Forbidden`], so callers cannot probe for existence.
///
/// # Errors
///
/// [`ApiError::Forbidden`] as above, [`ApiError::Database`] if the lookup
/// itself fails.
pub async fn owned_entry(db: &LedgerDb, entry_id: &str, user_id: &str) -> Result<Entry, ApiError> {
    match db.get_entry(entry_id).await {
        Ok(entry) if entry.user_id == user_id => Ok(entry),
        Ok(_) | Err(DatabaseError::NoResult) => {
            tracing::debug!(entry_id, user_id, "ownership check failed");
            Err(ApiError::Forbidden)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::ids::new_id;

    #[tokio::test]
    async fn owner_gets_entry_others_are_forbidden() {
        let db = LedgerDb::open_local(":memory:").await.unwrap();
        let entry = db.create_entry("alice", "Title", None).await.unwrap();

        assert_eq!(owned_entry(&db, &entry.id, "alice").await.unwrap().id, entry.id);
        assert!(matches!(
            owned_entry(&db, &entry.id, "bob").await,
            Err(ApiError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn missing_entry_looks_like_wrong_owner() {
        let db = LedgerDb::open_local(":memory:").await.unwrap();
        assert!(matches!(
            owned_entry(&db, &new_id(), "alice").await,
            Err(ApiError::Forbidden)
        ));
    }
}
