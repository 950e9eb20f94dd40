use super::{BlobStore, StorageError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use tracing::{debug, instrument};

const UPLOAD_URL: &str = "https://storage.googleapis.com/upload/storage/v1/b";
const PUBLIC_URL: &str = "https://storage.googleapis.com";
const IMAGE_CONTENT_TYPE: &str = "image/png";
const MAX_RETRIES: u32 = 3;

/// Firebase Storage bucket, written through the Cloud Storage JSON API
pub struct FirebaseStorage {
    client: ClientWithMiddleware,
    bucket: String,
    access_token: String,
}

impl FirebaseStorage {
    pub fn new(bucket: &str, access_token: &str) -> Self {
        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES),
            ))
            .build();

        Self {
            client,
            bucket: bucket.to_string(),
            access_token: access_token.to_string(),
        }
    }

    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", PUBLIC_URL, self.bucket, key)
    }
}

#[async_trait]
impl BlobStore for FirebaseStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, bytes: Vec<u8>, key: &str) -> Result<String, StorageError> {
        self.client
            .post(format!("{}/{}/o", UPLOAD_URL, self.bucket))
            .query(&[
                ("uploadType", "media"),
                ("name", key),
                ("predefinedAcl", "publicRead"),
            ])
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, IMAGE_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;

        debug!("Uploaded blob to bucket {}", self.bucket);

        Ok(self.public_url(key))
    }
}
