//! Evidence object storage configuration.

use serde::{Deserialize, Serialize};

fn default_bucket() -> String {
    String::from("evidence-files")
}

fn default_region() -> String {
    String::from("auto")
}

fn default_local_root() -> String {
    String::from(".ledger/objects")
}

const fn default_signed_url_ttl_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Bucket holding uploaded evidence files.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// S3-compatible endpoint URL (R2, `MinIO`, AWS).
    #[serde(default)]
    pub endpoint: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub access_key_id: String,

    #[serde(default)]
    pub secret_access_key: String,

    /// Directory used as the object store when no S3 endpoint is configured.
    #[serde(default = "default_local_root")]
    pub local_root: String,

    /// Lifetime of signed download URLs.
    #[serde(default = "default_signed_url_ttl_secs")]
    pub signed_url_ttl_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            endpoint: String::new(),
            region: default_region(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            local_root: default_local_root(),
            signed_url_ttl_secs: default_signed_url_ttl_secs(),
        }
    }
}

impl StorageConfig {
    /// Check if an S3-compatible store is configured.
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.access_key_id.is_empty()
            && !self.secret_access_key.is_empty()
            && !self.bucket.is_empty()
    }
}
