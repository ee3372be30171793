pub mod polly;

use async_trait::async_trait;

use crate::types::{SynthesisRequest, SynthesizedAudio};

/// Trait for speech synthesis backends
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize text to MP3 audio
    async fn synthesize(&self, request: &SynthesisRequest<'_>) -> crate::error::Result<SynthesizedAudio>;

    /// Get the backend name
    fn name(&self) -> &str;
}
