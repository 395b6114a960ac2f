//! # ledger-storage
//!
//! Object storage for uploaded evidence files.
//!
//! Backed by `object_store`: an S3-compatible bucket (R2, `MinIO`, AWS) when
//! configured, a local directory otherwise, and an in-memory store in tests.
//! Objects are written create-only; a second write to the same key fails.
//! Downloads go through short-lived signed URLs, which only the S3 backend
//! can produce.

mod error;

pub use error::StorageError;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use ledger_config::StorageConfig;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use object_store::signer::Signer;
use object_store::{Attribute, Attributes, ObjectStore, PutMode, PutOptions, PutPayload};
use url::Url;

/// A time-limited download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    pub url: Url,
    pub expires_at: DateTime<Utc>,
}

/// Evidence file store.
#[derive(Clone)]
pub struct EvidenceStore {
    objects: Arc<dyn ObjectStore>,
    signer: Option<Arc<dyn Signer>>,
    signed_url_ttl: Duration,
    /// Whether the backend accepts object attributes (content type).
    attributes: bool,
}

impl EvidenceStore {
    /// Build the store described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Config`] if the S3 client cannot be built or
    /// the local root cannot be created.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        let ttl = Duration::from_secs(config.signed_url_ttl_secs);

        if config.is_configured() {
            let s3 = AmazonS3Builder::new()
                .with_bucket_name(&config.bucket)
                .with_endpoint(&config.endpoint)
                .with_region(&config.region)
                .with_access_key_id(&config.access_key_id)
                .with_secret_access_key(&config.secret_access_key)
                .with_allow_http(config.endpoint.starts_with("http://"))
                .build()
                .map_err(|e| StorageError::Config(format!("s3 client: {e}")))?;
            let s3 = Arc::new(s3);
            tracing::info!(bucket = %config.bucket, endpoint = %config.endpoint, "using S3 evidence store");
            return Ok(Self {
                objects: s3.clone(),
                signer: Some(s3),
                signed_url_ttl: ttl,
                attributes: true,
            });
        }

        std::fs::create_dir_all(&config.local_root)
            .map_err(|e| StorageError::Config(format!("create {}: {e}", config.local_root)))?;
        let local = LocalFileSystem::new_with_prefix(&config.local_root)
            .map_err(|e| StorageError::Config(format!("local store: {e}")))?;
        tracing::warn!(
            root = %config.local_root,
            "using local evidence store; signed download URLs are unavailable"
        );
        Ok(Self {
            objects: Arc::new(local),
            signer: None,
            signed_url_ttl: ttl,
            attributes: false,
        })
    }

    /// Assemble a store from parts.
    ///
    /// The backend is assumed to accept object attributes; use
    /// [`Self::from_config`] for the local filesystem.
    #[must_use]
    pub fn new(
        objects: Arc<dyn ObjectStore>,
        signer: Option<Arc<dyn Signer>>,
        signed_url_ttl: Duration,
    ) -> Self {
        Self {
            objects,
            signer,
            signed_url_ttl,
            attributes: true,
        }
    }

    /// Write a new object. Never overwrites.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AlreadyExists`] if the key is taken, or
    /// another [`StorageError`] if the backend write fails.
    pub async fn put_new(
        &self,
        key: &str,
        bytes: impl Into<PutPayload> + Send,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let path = object_path(key)?;
        let mut opts = PutOptions::from(PutMode::Create);
        if self.attributes {
            let mut attributes = Attributes::new();
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
            opts.attributes = attributes;
        }
        self.objects.put_opts(&path, bytes.into(), opts).await?;
        tracing::debug!(key, content_type, "evidence object stored");
        Ok(())
    }

    /// Produce a GET URL for `key` valid for the configured lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SigningUnavailable`] when the backend cannot
    /// sign, or a [`StorageError`] if signing fails.
    pub async fn signed_download_url(&self, key: &str) -> Result<SignedUrl, StorageError> {
        let signer = self.signer.as_ref().ok_or(StorageError::SigningUnavailable)?;
        let path = object_path(key)?;
        let issued_at = Utc::now();
        let url = signer
            .signed_url(http::Method::GET, &path, self.signed_url_ttl)
            .await?;
        let ttl = chrono::Duration::from_std(self.signed_url_ttl)
            .map_err(|e| StorageError::Config(format!("signed url ttl: {e}")))?;
        Ok(SignedUrl {
            url,
            expires_at: issued_at + ttl,
        })
    }
}

// Test-only helpers; downloads go through signed URLs.
#[cfg(test)]
impl EvidenceStore {
    fn in_memory() -> Self {
        Self::new(Arc::new(object_store::memory::InMemory::new()), None, Duration::from_secs(60))
    }

    fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Read an object's bytes.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = object_path(key)?;
        let bytes = self.objects.get(&path).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = object_path(key)?;
        match self.objects.head(&path).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn object_path(key: &str) -> Result<Path, StorageError> {
    Path::parse(key).map_err(|e| StorageError::InvalidKey {
        key: key.to_string(),
        reason: e.to_string(),
    })
}
