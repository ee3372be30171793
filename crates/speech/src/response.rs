use std::collections::BTreeMap;

use http::StatusCode;
use narrator_config::Profile;
use serde::Serialize;

use crate::{error::SpeechError, types::SpeechResult};

/// Headers attached to every response
const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "*"),
    ("Access-Control-Allow-Methods", "*"),
    ("Content-Type", "application/json"),
];

/// Hint returned with permissive-profile failures
const LOG_HINT: &str = "See CloudWatch logs for details";

/// API Gateway proxy integration response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON-encoded [`ResponseBody`]
    pub body: String,
}

impl GatewayResponse {
    fn new(status: StatusCode, body: &ResponseBody) -> Self {
        let headers = RESPONSE_HEADERS
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();

        // A struct of strings always serializes
        let body = serde_json::to_string(body).unwrap_or_else(|_| String::from("{}"));

        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    /// Shape a successful result for the given profile
    pub fn success(profile: Profile, result: &SpeechResult) -> Self {
        let body = match profile {
            Profile::Strict => ResponseBody {
                url: Some(result.url.clone()),
                audio_id: Some(result.object.audio_id.clone()),
                message: Some("Speech generated successfully".to_string()),
                ..ResponseBody::default()
            },
            Profile::Permissive => ResponseBody {
                url: Some(result.url.clone()),
                message: Some("Success".to_string()),
                ..ResponseBody::default()
            },
        };

        Self::new(StatusCode::OK, &body)
    }

    /// Shape an error for the given profile
    ///
    /// Only the strict profile answers 400; permissive failures of any kind
    /// are reported as 500 with the raw message.
    pub fn error(profile: Profile, error: &SpeechError) -> Self {
        match profile {
            Profile::Strict if error.is_client_error() => Self::new(
                error.status_code(),
                &ResponseBody {
                    error: Some(error.client_message()),
                    ..ResponseBody::default()
                },
            ),
            Profile::Strict => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ResponseBody {
                    error: Some("Internal server error".to_string()),
                    details: Some(error.client_message()),
                    ..ResponseBody::default()
                },
            ),
            Profile::Permissive => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ResponseBody {
                    error: Some(error.client_message()),
                    step: Some(LOG_HINT.to_string()),
                    ..ResponseBody::default()
                },
            ),
        }
    }
}

/// JSON body carried in [`GatewayResponse::body`]
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}
