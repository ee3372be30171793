pub mod s3;

use std::time::Duration;

use async_trait::async_trait;

/// Trait for object storage backends
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` under `key`, replacing any existing object
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str)
    -> crate::error::Result<()>;

    /// Sign a time-limited read URL for `key`
    async fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> crate::error::Result<String>;

    /// Get the backend name
    fn name(&self) -> &str;
}
