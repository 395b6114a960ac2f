//! Shared test utilities for ledger-db unit tests.

use ledger_core::entities::Entry;

use crate::LedgerDb;

/// Create an in-memory database with the schema applied.
pub async fn test_db() -> LedgerDb {
    LedgerDb::open_local(":memory:").await.unwrap()
}

/// Insert an entry owned by `user_id` and return it.
pub async fn seed_entry(db: &LedgerDb, user_id: &str) -> Entry {
    db.create_entry(user_id, "Seeded entry", Some("for tests"))
        .await
        .unwrap()
}
