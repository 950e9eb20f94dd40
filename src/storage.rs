pub mod firebase;
pub mod local;

use crate::config::model::StorageConfig;
use async_trait::async_trait;
use firebase::FirebaseStorage;
use local::LocalStorage;
use thiserror::Error;
use tracing::info;

const BLOB_PREFIX: &str = "events";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("upload rejected: {0}")]
    Status(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Content store that hands back a public URL for every blob put into it
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, bytes: Vec<u8>, key: &str) -> Result<String, StorageError>;
}

/// Same image URL, same blob
pub fn blob_name(image_url: &str) -> String {
    format!("{}/{:x}.png", BLOB_PREFIX, md5::compute(image_url))
}

pub fn from_config(config: &StorageConfig) -> Option<Box<dyn BlobStore>> {
    match config {
        StorageConfig::None => {
            info!("No image storage configured, images will be left out");
            None
        }
        StorageConfig::Local {
            root,
            public_base_url,
        } => {
            info!("Storing images under {}", root.display());
            Some(Box::new(LocalStorage::new(root.clone(), public_base_url.clone())))
        }
        StorageConfig::Firebase {
            bucket,
            access_token,
        } => {
            info!("Uploading images to bucket {}", bucket);
            Some(Box::new(FirebaseStorage::new(bucket, access_token)))
        }
    }
}
