use secrecy::SecretString;
use serde::Deserialize;

/// AWS SDK overrides
///
/// Anything left unset falls back to the SDK default chain, which inside
/// Lambda resolves to the function's region and execution role.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    /// Region override
    #[serde(default)]
    pub region: Option<String>,
    /// Static access key id
    #[serde(default)]
    pub access_key_id: Option<SecretString>,
    /// Static secret access key
    #[serde(default)]
    pub secret_access_key: Option<SecretString>,
}
