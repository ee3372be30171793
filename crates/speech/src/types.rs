use narrator_config::SynthesisEngine;
use serde::Deserialize;

/// Content type of every stored audio object
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// File extension matching [`AUDIO_CONTENT_TYPE`]
pub const AUDIO_EXTENSION: &str = "mp3";

/// Inbound payload as sent by the client
#[derive(Debug, Default, Deserialize)]
pub struct SpeechPayload {
    /// Text to synthesize
    #[serde(default)]
    pub text: Option<String>,
    /// Voice identifier (e.g. "Joanna")
    #[serde(default, rename = "voiceId")]
    pub voice_id: Option<String>,
}

/// Request that passed the configured validation policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
}

/// Per-invocation context supplied by the hosting runtime
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Unique id of this invocation
    pub request_id: String,
}

impl Invocation {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// Name of the object an invocation writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioObject {
    /// Identifier returned to the caller as `audioId`
    pub audio_id: String,
    /// Full object key including the prefix
    pub key: String,
}

/// Input to a [`crate::SpeechSynthesizer`]
#[derive(Debug, Clone, Copy)]
pub struct SynthesisRequest<'a> {
    pub text: &'a str,
    pub voice_id: &'a str,
    pub engine: SynthesisEngine,
}

/// Raw audio returned by a synthesizer
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Encoded audio bytes
    pub audio: Vec<u8>,
    /// Content type reported by the service (e.g. "audio/mpeg")
    pub content_type: String,
}

/// Successful outcome of one invocation
#[derive(Debug, Clone)]
pub struct SpeechResult {
    pub object: AudioObject,
    /// Presigned download URL
    pub url: String,
}
