use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use narrator_config::AwsConfig;
use secrecy::ExposeSecret;

/// Load shared AWS SDK settings
///
/// Explicit credentials override the default chain; without them the
/// Lambda execution role is used.
pub async fn load_sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let (Some(access_key), Some(secret_key)) = (&config.access_key_id, &config.secret_access_key) {
        let credentials = Credentials::new(
            access_key.expose_secret(),
            secret_key.expose_secret(),
            None, // session token
            None, // expiry
            "narrator-config",
        );
        loader = loader.credentials_provider(credentials);
    }

    loader.load().await
}
