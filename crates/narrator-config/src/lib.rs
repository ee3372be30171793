#![allow(clippy::must_use_candidate)]

pub mod aws;
mod env;
pub mod handler;
mod loader;
pub mod storage;
pub mod synthesis;
pub mod telemetry;

use serde::Deserialize;

pub use aws::*;
pub use handler::*;
pub use loader::BUCKET_ENV_VAR;
pub use storage::*;
pub use synthesis::*;
pub use telemetry::*;

/// Top-level narrator configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Request handling policy
    #[serde(default)]
    pub handler: HandlerConfig,
    /// Speech synthesis settings
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    /// Destination object storage
    #[serde(default)]
    pub storage: StorageConfig,
    /// AWS SDK overrides
    #[serde(default)]
    pub aws: AwsConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
