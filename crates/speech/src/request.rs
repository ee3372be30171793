use narrator_config::{HandlerConfig, Profile};
use serde_json::Value;

use crate::{
    error::{Result, SpeechError},
    types::{SpeechPayload, SpeechRequest},
};

/// Extract the client payload from a raw invocation event
///
/// Gateway events carry the payload in `body`, either as a JSON string or
/// already decoded; a direct invocation is the payload itself. A `null`
/// body counts as an empty payload.
pub fn parse_event(event: Value) -> Result<SpeechPayload> {
    let payload = match event {
        Value::Object(mut map) if map.contains_key("body") => match map.remove("body") {
            Some(Value::String(body)) => {
                serde_json::from_str(&body).map_err(|e| SpeechError::InvalidPayload(e.to_string()))?
            }
            Some(Value::Null) | None => Value::Object(serde_json::Map::new()),
            Some(body) => body,
        },
        event => event,
    };

    if !payload.is_object() {
        return Err(SpeechError::InvalidPayload("expected a JSON object".to_string()));
    }

    serde_json::from_value(payload).map_err(|e| SpeechError::InvalidPayload(e.to_string()))
}

/// Validation policy derived from the handler configuration
#[derive(Debug, Clone)]
pub struct RequestPolicy {
    profile: Profile,
    max_text_chars: usize,
    default_text: String,
    default_voice: String,
}

impl RequestPolicy {
    pub fn new(config: &HandlerConfig, default_voice: &str) -> Self {
        Self {
            profile: config.profile,
            max_text_chars: config.max_text_chars,
            default_text: config.default_text.clone(),
            default_voice: default_voice.to_string(),
        }
    }

    pub const fn profile(&self) -> Profile {
        self.profile
    }

    /// Apply the policy to a parsed payload
    pub fn validate(&self, payload: SpeechPayload) -> Result<SpeechRequest> {
        let voice_id = payload.voice_id.unwrap_or_else(|| self.default_voice.clone());

        let text = match self.profile {
            Profile::Permissive => payload.text.unwrap_or_else(|| self.default_text.clone()),
            Profile::Strict => {
                let text = payload.text.as_deref().map(str::trim).unwrap_or_default();

                if text.is_empty() {
                    return Err(SpeechError::InvalidRequest("Text is required".to_string()));
                }

                // Count characters, not bytes
                if text.chars().count() > self.max_text_chars {
                    return Err(SpeechError::InvalidRequest(format!(
                        "Text too long. Maximum {} characters allowed.",
                        self.max_text_chars
                    )));
                }

                text.to_string()
            }
        };

        Ok(SpeechRequest { text, voice_id })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn strict() -> RequestPolicy {
        RequestPolicy::new(&HandlerConfig::default(), "Joanna")
    }

    fn permissive() -> RequestPolicy {
        let config = HandlerConfig {
            profile: Profile::Permissive,
            ..HandlerConfig::default()
        };
        RequestPolicy::new(&config, "Joanna")
    }

    fn payload(text: Option<&str>, voice: Option<&str>) -> SpeechPayload {
        SpeechPayload {
            text: text.map(str::to_string),
            voice_id: voice.map(str::to_string),
        }
    }

    #[test]
    fn direct_invocation_uses_whole_event() {
        let parsed = parse_event(json!({"text": "Hello", "voiceId": "Matthew"})).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("Hello"));
        assert_eq!(parsed.voice_id.as_deref(), Some("Matthew"));
    }

    #[test]
    fn gateway_string_body_is_decoded() {
        let event = json!({
            "httpMethod": "POST",
            "body": "{\"text\": \"Hello\", \"voiceId\": \"Joanna\"}",
        });
        let parsed = parse_event(event).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("Hello"));
        assert_eq!(parsed.voice_id.as_deref(), Some("Joanna"));
    }

    #[test]
    fn pre_parsed_body_is_used_as_is() {
        let parsed = parse_event(json!({"body": {"text": "Hi"}})).unwrap();
        assert_eq!(parsed.text.as_deref(), Some("Hi"));
        assert_eq!(parsed.voice_id, None);
    }

    #[test]
    fn null_body_is_empty_payload() {
        let parsed = parse_event(json!({"body": null})).unwrap();
        assert_eq!(parsed.text, None);
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = parse_event(json!({"body": "{not json"})).unwrap_err();
        assert!(matches!(err, SpeechError::InvalidPayload(_)));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = parse_event(json!({"body": "[1, 2]"})).unwrap_err();
        assert!(matches!(err, SpeechError::InvalidPayload(_)));

        let err = parse_event(json!("just text")).unwrap_err();
        assert!(matches!(err, SpeechError::InvalidPayload(_)));
    }

    #[test]
    fn wrongly_typed_text_is_rejected() {
        let err = parse_event(json!({"text": 42})).unwrap_err();
        assert!(matches!(err, SpeechError::InvalidPayload(_)));
    }

    #[test]
    fn strict_trims_and_defaults_voice() {
        let request = strict().validate(payload(Some("  Hello  "), None)).unwrap();
        assert_eq!(request.text, "Hello");
        assert_eq!(request.voice_id, "Joanna");
    }

    #[test]
    fn strict_rejects_missing_and_blank_text() {
        for text in [None, Some(""), Some("   \n\t")] {
            let err = strict().validate(payload(text, None)).unwrap_err();
            assert_eq!(err.to_string(), "Text is required");
        }
    }

    #[test]
    fn strict_enforces_length_bound() {
        let at_limit = "a".repeat(3000);
        assert!(strict().validate(payload(Some(&at_limit), None)).is_ok());

        let over_limit = "a".repeat(3001);
        let err = strict().validate(payload(Some(&over_limit), None)).unwrap_err();
        assert_eq!(err.to_string(), "Text too long. Maximum 3000 characters allowed.");
    }

    #[test]
    fn strict_counts_characters_not_bytes() {
        let text = "é".repeat(3000);
        assert!(text.len() > 3000);
        assert!(strict().validate(payload(Some(&text), None)).is_ok());
    }

    #[test]
    fn permissive_substitutes_placeholder() {
        let request = permissive().validate(payload(None, Some("Brian"))).unwrap();
        assert_eq!(request.text, "Hello world");
        assert_eq!(request.voice_id, "Brian");
    }

    #[test]
    fn permissive_passes_text_through() {
        let request = permissive().validate(payload(Some("  spaced  "), None)).unwrap();
        assert_eq!(request.text, "  spaced  ");

        let long = "a".repeat(5000);
        assert!(permissive().validate(payload(Some(&long), None)).is_ok());
    }
}
