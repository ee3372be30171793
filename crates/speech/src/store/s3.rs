use std::time::Duration;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{Client as S3Client, error::DisplayErrorContext, presigning::PresigningConfig, primitives::ByteStream};
use narrator_config::StorageConfig;

use crate::error::SpeechError;

use super::ObjectStore;

/// Amazon S3 (or S3-compatible) object store
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    /// Create a store from shared SDK settings plus storage overrides
    pub fn new(sdk_config: &SdkConfig, storage: &StorageConfig) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config).force_path_style(storage.force_path_style);

        if let Some(endpoint) = &storage.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: S3Client::from_conf(builder.build()),
        }
    }

    pub const fn from_client(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> crate::error::Result<()> {
        tracing::debug!(bucket, key, bytes = body.len(), "S3 put_object");

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(bucket, key, error = %message, "S3 put_object failed");
                SpeechError::StorageFailed(message)
            })?;

        Ok(())
    }

    async fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> crate::error::Result<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| SpeechError::SigningFailed(format!("invalid expiry {expires_in:?}: {e}")))?;

        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(bucket, key, error = %message, "S3 presign failed");
                SpeechError::SigningFailed(message)
            })?;

        Ok(presigned.uri().to_string())
    }

    fn name(&self) -> &str {
        "s3"
    }
}
