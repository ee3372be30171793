use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

/// Environment variable naming the destination bucket
pub const BUCKET_ENV_VAR: &str = "AUDIO_BUCKET";

/// Longest lifetime S3 accepts for a SigV4 presigned URL
const MAX_URL_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, deserializes,
    /// falls back to `AUDIO_BUCKET` when the file names no bucket, then
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Build configuration from defaults and the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if validation of the resulting configuration fails
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        config.apply_env_fallbacks();
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment alone
    ///
    /// # Errors
    ///
    /// See [`Config::load`] and [`Config::from_env`]
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_env(),
        }
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let mut config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.apply_env_fallbacks();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_fallbacks(&mut self) {
        if self.storage.bucket_name().is_none() {
            self.storage.bucket = std::env::var(BUCKET_ENV_VAR).ok();
        }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// A missing bucket is deliberately not an error here; it is reported
    /// per request.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_handler_config()?;
        self.validate_storage_config()?;
        self.validate_aws_config()?;
        Ok(())
    }

    fn validate_handler_config(&self) -> anyhow::Result<()> {
        if self.handler.max_text_chars == 0 {
            anyhow::bail!("handler.max_text_chars must be greater than 0");
        }

        if self.synthesis.default_voice.trim().is_empty() {
            anyhow::bail!("synthesis.default_voice must not be empty");
        }

        Ok(())
    }

    fn validate_storage_config(&self) -> anyhow::Result<()> {
        let expiry = self.storage.url_expiry_secs;
        if expiry == 0 || expiry > MAX_URL_EXPIRY_SECS {
            anyhow::bail!("storage.url_expiry_secs must be between 1 and {MAX_URL_EXPIRY_SECS}, got {expiry}");
        }

        if self.storage.key_prefix.starts_with('/') {
            anyhow::bail!("storage.key_prefix must not start with '/'");
        }

        Ok(())
    }

    fn validate_aws_config(&self) -> anyhow::Result<()> {
        match (&self.aws.access_key_id, &self.aws.secret_access_key) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("aws.access_key_id and aws.secret_access_key must be set together")
            }
            (Some(key), Some(_)) if key.expose_secret().is_empty() => {
                anyhow::bail!("aws.access_key_id must not be empty")
            }
            _ => Ok(()),
        }
    }
}
