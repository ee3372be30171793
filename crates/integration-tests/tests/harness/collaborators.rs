//! In-memory stand-ins for Polly and S3

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use speech::{ObjectStore, SpeechError, SpeechSynthesizer, SynthesisRequest, SynthesizedAudio};

/// Fake MP3 frame header followed by the text bytes
pub fn fake_mp3(text: &str) -> Vec<u8> {
    let mut audio = vec![0xFF, 0xFB, 0x90, 0x64];
    audio.extend_from_slice(text.as_bytes());
    audio
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisCall {
    pub text: String,
    pub voice_id: String,
    pub engine: String,
}

/// Synthesizer that records calls and can be told to fail or panic
#[derive(Clone, Default)]
pub struct FakeSynthesizer {
    calls: Arc<Mutex<Vec<SynthesisCall>>>,
    failure: Option<String>,
    panics: bool,
}

impl FakeSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub fn panicking() -> Self {
        Self {
            panics: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<SynthesisCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest<'_>) -> speech::Result<SynthesizedAudio> {
        self.calls.lock().unwrap().push(SynthesisCall {
            text: request.text.to_owned(),
            voice_id: request.voice_id.to_owned(),
            engine: request.engine.as_str().to_owned(),
        });

        assert!(!self.panics, "synthesizer exploded");

        if let Some(message) = &self.failure {
            return Err(SpeechError::SynthesisFailed(message.clone()));
        }

        Ok(SynthesizedAudio {
            audio: fake_mp3(request.text),
            content_type: speech::AUDIO_CONTENT_TYPE.to_owned(),
        })
    }

    fn name(&self) -> &str {
        "fake"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    pub bucket: String,
    pub key: String,
    pub expires_in: Duration,
}

/// Object store keeping writes in memory and issuing fake signed URLs
#[derive(Clone, Default)]
pub struct MemoryStore {
    objects: Arc<Mutex<Vec<StoredObject>>>,
    signed: Arc<Mutex<Vec<SignRequest>>>,
    put_failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts(message: &str) -> Self {
        Self {
            put_failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }

    pub fn signed(&self) -> Vec<SignRequest> {
        self.signed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> speech::Result<()> {
        if let Some(message) = &self.put_failure {
            return Err(SpeechError::StorageFailed(message.clone()));
        }

        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            body,
            content_type: content_type.to_owned(),
        });

        Ok(())
    }

    async fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> speech::Result<String> {
        self.signed.lock().unwrap().push(SignRequest {
            bucket: bucket.to_owned(),
            key: key.to_owned(),
            expires_in,
        });

        Ok(format!(
            "https://{bucket}.s3.amazonaws.com/{key}?X-Amz-Expires={}&X-Amz-Signature=fake",
            expires_in.as_secs()
        ))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
