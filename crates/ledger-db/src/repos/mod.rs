//! Repository modules implementing the persistence operations.
//!
//! Each module adds methods to `LedgerDb` via `impl LedgerDb` blocks.

pub mod assessment;
pub mod entry;
pub mod evidence;
pub mod timeline;
pub mod verification;
