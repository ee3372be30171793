#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod aws;
mod error;
mod handler;
mod keys;
mod request;
mod response;
mod store;
mod synthesizer;
mod types;

pub use aws::load_sdk_config;
pub use error::{Result, SpeechError};
pub use handler::{SpeechHandler, SpeechHandlerBuilder};
pub use keys::{KeyStrategy, RandomKeys, RequestIdKeys, key_strategy};
pub use request::{RequestPolicy, parse_event};
pub use response::{GatewayResponse, ResponseBody};
pub use store::{ObjectStore, s3::S3ObjectStore};
pub use synthesizer::{SpeechSynthesizer, polly::PollySynthesizer};
pub use types::{
    AUDIO_CONTENT_TYPE, AUDIO_EXTENSION, AudioObject, Invocation, SpeechPayload, SpeechRequest, SpeechResult,
    SynthesisRequest, SynthesizedAudio,
};

/// Build the speech handler backed by Polly and S3
pub async fn build_handler(config: &narrator_config::Config) -> anyhow::Result<SpeechHandler> {
    let sdk_config = load_sdk_config(&config.aws).await;

    let handler = SpeechHandlerBuilder::new(config)
        .with_synthesizer(PollySynthesizer::new(&sdk_config))
        .with_store(S3ObjectStore::new(&sdk_config, &config.storage))
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech handler: {e}"))?;

    Ok(handler)
}
