use std::time::Duration;

use serde::Deserialize;

/// Destination object storage configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Bucket receiving generated audio
    ///
    /// Left optional so a missing bucket surfaces per request instead of
    /// failing the cold start.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Prefix prepended to every object key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Lifetime of signed download URLs in seconds
    #[serde(default = "default_url_expiry_secs")]
    pub url_expiry_secs: u64,
    /// Endpoint override for S3-compatible stores
    #[serde(default)]
    pub endpoint_url: Option<String>,
    /// Use path-style addressing (`endpoint/bucket/key`)
    #[serde(default)]
    pub force_path_style: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: None,
            key_prefix: default_key_prefix(),
            url_expiry_secs: default_url_expiry_secs(),
            endpoint_url: None,
            force_path_style: false,
        }
    }
}

impl StorageConfig {
    /// Get URL expiry as Duration
    pub const fn url_expiry(&self) -> Duration {
        Duration::from_secs(self.url_expiry_secs)
    }

    /// Configured bucket, treating an empty name as unset
    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}

fn default_key_prefix() -> String {
    "audio/".to_string()
}

const fn default_url_expiry_secs() -> u64 {
    3600
}
