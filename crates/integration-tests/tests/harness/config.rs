//! Programmatic configuration builder for integration tests

use narrator_config::{Config, KeyStrategyKind, Profile};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Strict profile writing to `test-bucket`
    pub fn new() -> Self {
        let mut config = Config::default();
        config.storage.bucket = Some("test-bucket".to_owned());
        Self { config }
    }

    /// Switch to the permissive profile
    pub fn permissive(mut self) -> Self {
        self.config.handler.profile = Profile::Permissive;
        self
    }

    /// Force a key strategy regardless of profile
    pub fn with_key_strategy(mut self, kind: KeyStrategyKind) -> Self {
        self.config.handler.key_strategy = Some(kind);
        self
    }

    /// Remove the destination bucket
    pub fn without_bucket(mut self) -> Self {
        self.config.storage.bucket = None;
        self
    }

    pub fn with_max_text_chars(mut self, max: usize) -> Self {
        self.config.handler.max_text_chars = max;
        self
    }

    pub fn with_url_expiry_secs(mut self, secs: u64) -> Self {
        self.config.storage.url_expiry_secs = secs;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
