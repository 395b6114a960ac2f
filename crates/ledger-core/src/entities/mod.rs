//! Entity structs for all Ledger domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `ledger-db/migrations/001_initial.sql`).

mod assessment;
mod entry;
mod evidence;
mod verification;

pub use assessment::{AssessmentAnswer, AssessmentQuestion};
pub use entry::Entry;
pub use evidence::{Evidence, FileMetadata};
pub use verification::Verification;
