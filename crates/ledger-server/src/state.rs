use std::sync::Arc;

use ledger_ai::Assessor;
use ledger_auth::IdentityResolver;
use ledger_config::LimitsConfig;
use ledger_db::LedgerDb;
use ledger_storage::EvidenceStore;
use ledger_transcript::TranscriptSource;

/// Clients shared by every handler. Built once at startup (see
/// [`crate::bootstrap`]) or assembled from fakes in tests.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<LedgerDb>,
    pub storage: EvidenceStore,
    pub identity: Arc<IdentityResolver>,
    pub assessor: Assessor,
    pub transcripts: Arc<dyn TranscriptSource>,
    pub limits: LimitsConfig,
}
