use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::{
    Client as PollyClient,
    error::DisplayErrorContext,
    types::{Engine, OutputFormat, VoiceId},
};

use crate::{
    error::SpeechError,
    types::{AUDIO_CONTENT_TYPE, SynthesisRequest, SynthesizedAudio},
};

use super::SpeechSynthesizer;

/// Amazon Polly synthesizer
pub struct PollySynthesizer {
    client: PollyClient,
}

impl PollySynthesizer {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: PollyClient::new(sdk_config),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest<'_>) -> crate::error::Result<SynthesizedAudio> {
        tracing::debug!(
            voice = request.voice_id,
            engine = request.engine.as_str(),
            input_len = request.text.len(),
            "Polly synthesize request"
        );

        let output = self
            .client
            .synthesize_speech()
            .text(request.text)
            .output_format(OutputFormat::Mp3)
            .voice_id(VoiceId::from(request.voice_id))
            .engine(Engine::from(request.engine.as_str()))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(error = %message, "Polly synthesize_speech failed");
                SpeechError::SynthesisFailed(message)
            })?;

        let content_type = output.content_type().unwrap_or(AUDIO_CONTENT_TYPE).to_string();

        let audio = output.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "failed to read Polly audio stream");
            SpeechError::SynthesisFailed(format!("failed to read audio stream: {e}"))
        })?;

        let audio = audio.to_vec();

        tracing::debug!(bytes = audio.len(), "Polly synthesis complete");

        Ok(SynthesizedAudio { audio, content_type })
    }

    fn name(&self) -> &str {
        "polly"
    }
}
