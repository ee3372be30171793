use serde::Deserialize;

/// Speech synthesis configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Voice used when the request does not name one
    #[serde(default = "default_voice")]
    pub default_voice: String,
    /// Synthesis engine tier
    #[serde(default)]
    pub engine: SynthesisEngine,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_voice: default_voice(),
            engine: SynthesisEngine::default(),
        }
    }
}

/// Polly engine tiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisEngine {
    #[default]
    Standard,
    Neural,
    LongForm,
    Generative,
}

impl SynthesisEngine {
    /// Wire name of the engine
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Neural => "neural",
            Self::LongForm => "long-form",
            Self::Generative => "generative",
        }
    }
}

fn default_voice() -> String {
    "Joanna".to_string()
}
