use narrator_config::KeyStrategyKind;
use uuid::Uuid;

use crate::types::{AUDIO_EXTENSION, AudioObject, Invocation};

/// Strategy for naming the audio object written by an invocation
pub trait KeyStrategy: Send + Sync {
    /// Name the object for this invocation
    fn object_for(&self, invocation: &Invocation) -> AudioObject;
}

/// Names objects `{prefix}{uuid}.mp3` with a fresh UUIDv4 per call
pub struct RandomKeys {
    prefix: String,
}

impl RandomKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl KeyStrategy for RandomKeys {
    fn object_for(&self, _invocation: &Invocation) -> AudioObject {
        let audio_id = Uuid::new_v4().to_string();
        let key = format!("{}{audio_id}.{AUDIO_EXTENSION}", self.prefix);

        AudioObject { audio_id, key }
    }
}

/// Names objects `{prefix}test-{request_id}.mp3`
pub struct RequestIdKeys {
    prefix: String,
}

impl RequestIdKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl KeyStrategy for RequestIdKeys {
    fn object_for(&self, invocation: &Invocation) -> AudioObject {
        let audio_id = invocation.request_id.clone();
        let key = format!("{}test-{audio_id}.{AUDIO_EXTENSION}", self.prefix);

        AudioObject { audio_id, key }
    }
}

/// Build the configured key strategy
pub fn key_strategy(kind: KeyStrategyKind, prefix: &str) -> Box<dyn KeyStrategy> {
    match kind {
        KeyStrategyKind::Random => Box::new(RandomKeys::new(prefix)),
        KeyStrategyKind::RequestId => Box::new(RequestIdKeys::new(prefix)),
    }
}
