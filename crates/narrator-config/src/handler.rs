use serde::Deserialize;

/// Request handling configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// Validation and response profile
    #[serde(default)]
    pub profile: Profile,
    /// Maximum accepted text length in characters (strict profile only)
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
    /// Text synthesized when a request omits it (permissive profile only)
    #[serde(default = "default_text")]
    pub default_text: String,
    /// Object key strategy, derived from the profile when unset
    #[serde(default)]
    pub key_strategy: Option<KeyStrategyKind>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            max_text_chars: default_max_text_chars(),
            default_text: default_text(),
            key_strategy: None,
        }
    }
}

impl HandlerConfig {
    /// Key strategy in effect after applying the profile default
    pub fn effective_key_strategy(&self) -> KeyStrategyKind {
        self.key_strategy.unwrap_or(match self.profile {
            Profile::Strict => KeyStrategyKind::Random,
            Profile::Permissive => KeyStrategyKind::RequestId,
        })
    }
}

/// Validation strictness and response shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Trim and bound-check text, reject empty input, return `audioId`
    #[default]
    Strict,
    /// Accept any input, substitute placeholder text when missing
    Permissive,
}

/// How generated audio objects are named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategyKind {
    /// Fresh UUIDv4 per request
    Random,
    /// Derived from the invocation request id
    RequestId,
}

const fn default_max_text_chars() -> usize {
    3000
}

fn default_text() -> String {
    "Hello world".to_string()
}
