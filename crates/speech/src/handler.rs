use std::{panic::AssertUnwindSafe, time::Duration};

use futures::FutureExt;
use narrator_config::{BUCKET_ENV_VAR, Config, Profile, SynthesisEngine};
use serde_json::Value;
use tracing::Instrument;

use crate::{
    error::{Result, SpeechError},
    keys::{KeyStrategy, key_strategy},
    request::{RequestPolicy, parse_event},
    response::GatewayResponse,
    store::ObjectStore,
    synthesizer::SpeechSynthesizer,
    types::{AUDIO_CONTENT_TYPE, Invocation, SpeechResult, SynthesisRequest},
};

/// Characters of the signed URL written to the log
const URL_LOG_PREFIX_LEN: usize = 50;

/// Text-to-speech request handler
///
/// Immutable after construction; one instance serves every invocation of
/// a warm execution environment.
pub struct SpeechHandler {
    synthesizer: Box<dyn SpeechSynthesizer>,
    store: Box<dyn ObjectStore>,
    keys: Box<dyn KeyStrategy>,
    policy: RequestPolicy,
    engine: SynthesisEngine,
    bucket: Option<String>,
    url_expiry: Duration,
}

impl SpeechHandler {
    /// Handle one invocation event
    ///
    /// Never fails: every error, including a panic inside a collaborator,
    /// becomes an error response.
    pub async fn handle(&self, event: Value, invocation: &Invocation) -> GatewayResponse {
        let span = tracing::info_span!("speech_request", request_id = %invocation.request_id);

        async move {
            let outcome = AssertUnwindSafe(self.process(event, invocation))
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(SpeechError::InternalError(panic_message(panic.as_ref()))));

            match outcome {
                Ok(result) => {
                    tracing::info!(audio_id = %result.object.audio_id, "speech request complete");
                    GatewayResponse::success(self.profile(), &result)
                }
                Err(error) => {
                    let response = GatewayResponse::error(self.profile(), &error);
                    if response.status_code < 500 {
                        tracing::warn!(error = %error, "speech request rejected");
                    } else {
                        tracing::error!(error = %error, error_type = error.error_type(), details = ?error, "speech request failed");
                    }
                    response
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Run the pipeline: parse, validate, synthesize, store, sign
    pub async fn process(&self, event: Value, invocation: &Invocation) -> Result<SpeechResult> {
        tracing::debug!(%event, "received event");

        let payload = parse_event(event)?;
        tracing::debug!(?payload, "parsed payload");

        let request = self.policy.validate(payload)?;
        tracing::info!(voice = %request.voice_id, text_len = request.text.chars().count(), "validated request");

        let bucket = self.bucket.as_deref().ok_or_else(|| {
            SpeechError::ConfigError(format!(
                "destination bucket is not set; configure storage.bucket or {BUCKET_ENV_VAR}"
            ))
        })?;

        let object = self.keys.object_for(invocation);
        tracing::debug!(audio_id = %object.audio_id, key = %object.key, "generated object key");

        tracing::info!(synthesizer = self.synthesizer.name(), "synthesizing speech");
        let synthesized = self
            .synthesizer
            .synthesize(&SynthesisRequest {
                text: &request.text,
                voice_id: &request.voice_id,
                engine: self.engine,
            })
            .await?;

        if synthesized.content_type != AUDIO_CONTENT_TYPE {
            tracing::warn!(content_type = %synthesized.content_type, "unexpected synthesized content type");
        }

        tracing::info!(store = self.store.name(), bucket, bytes = synthesized.audio.len(), "uploading audio");
        self.store
            .put_object(bucket, &object.key, synthesized.audio, AUDIO_CONTENT_TYPE)
            .await?;
        tracing::info!(key = %object.key, "upload complete");

        let url = self.store.presign_get(bucket, &object.key, self.url_expiry).await?;
        tracing::debug!(
            url_prefix = url.get(..URL_LOG_PREFIX_LEN).unwrap_or(url.as_str()),
            expires_in_secs = self.url_expiry.as_secs(),
            "generated download URL"
        );

        Ok(SpeechResult { object, url })
    }

    /// Validation and response profile in effect
    pub const fn profile(&self) -> Profile {
        self.policy.profile()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected panic".to_string())
}

/// Builder for constructing the handler from configuration
pub struct SpeechHandlerBuilder<'a> {
    config: &'a Config,
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    store: Option<Box<dyn ObjectStore>>,
    keys: Option<Box<dyn KeyStrategy>>,
}

impl<'a> SpeechHandlerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self {
            config,
            synthesizer: None,
            store: None,
            keys: None,
        }
    }

    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: impl SpeechSynthesizer + 'static) -> Self {
        self.synthesizer = Some(Box::new(synthesizer));
        self
    }

    #[must_use]
    pub fn with_store(mut self, store: impl ObjectStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Override the configured key strategy
    #[must_use]
    pub fn with_key_strategy(mut self, keys: impl KeyStrategy + 'static) -> Self {
        self.keys = Some(Box::new(keys));
        self
    }

    pub fn build(self) -> Result<SpeechHandler> {
        let synthesizer = self
            .synthesizer
            .ok_or_else(|| SpeechError::ConfigError("no speech synthesizer configured".to_string()))?;

        let store = self
            .store
            .ok_or_else(|| SpeechError::ConfigError("no object store configured".to_string()))?;

        let handler_config = &self.config.handler;
        let storage = &self.config.storage;

        let keys = self
            .keys
            .unwrap_or_else(|| key_strategy(handler_config.effective_key_strategy(), &storage.key_prefix));

        let bucket = storage.bucket_name().map(str::to_string);
        if bucket.is_none() {
            tracing::warn!("no destination bucket configured, set {BUCKET_ENV_VAR} or storage.bucket");
        }

        tracing::debug!(
            profile = ?handler_config.profile,
            key_strategy = ?handler_config.effective_key_strategy(),
            synthesizer = synthesizer.name(),
            store = store.name(),
            "speech handler initialized"
        );

        Ok(SpeechHandler {
            synthesizer,
            store,
            keys,
            policy: RequestPolicy::new(handler_config, &self.config.synthesis.default_voice),
            engine: self.config.synthesis.engine,
            bucket,
            url_expiry: storage.url_expiry(),
        })
    }
}
