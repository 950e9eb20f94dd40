use super::{BlobStore, StorageError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument};

/// Stores blobs under a local directory, optionally served from `public_base_url`
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: Option<String>,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: Option<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url,
        }
    }
}

#[async_trait]
impl BlobStore for LocalStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, bytes: Vec<u8>, key: &str) -> Result<String, StorageError> {
        let path = self.root.join(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, bytes).await?;

        debug!("Stored blob at {}", path.display());

        Ok(match &self.public_base_url {
            Some(base_url) => format!("{}/{}", base_url.trim_end_matches('/'), key),
            None => path.display().to_string(),
        })
    }
}
