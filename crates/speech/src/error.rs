use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Speech pipeline errors with their HTTP status codes
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Input rejected by validation; the message is shown verbatim
    #[error("{0}")]
    InvalidRequest(String),

    /// Body that is not valid JSON or has the wrong shape
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    /// Required setting missing or collaborator not wired
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Synthesis service call or audio stream read failed
    #[error("Speech synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Object write failed
    #[error("Audio upload failed: {0}")]
    StorageFailed(String),

    /// Presigning the download URL failed
    #[error("Download URL signing failed: {0}")]
    SigningFailed(String),

    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl SpeechError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::ConfigError(_)
            | Self::SynthesisFailed(_)
            | Self::StorageFailed(_)
            | Self::SigningFailed(_)
            | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind, used as a log field
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) | Self::InvalidPayload(_) => "invalid_request_error",
            Self::ConfigError(_) => "configuration_error",
            Self::SynthesisFailed(_) | Self::StorageFailed(_) | Self::SigningFailed(_) => "api_error",
            Self::InternalError(_) => "internal_error",
        }
    }

    /// Whether the error was raised before any external call
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Message surfaced to the caller
    pub fn client_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = SpeechError::InvalidRequest("Text is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Text is required");
        assert!(err.is_client_error());
    }

    #[test]
    fn service_errors_are_internal() {
        let errors = [
            SpeechError::ConfigError("bucket".to_string()),
            SpeechError::SynthesisFailed("throttled".to_string()),
            SpeechError::StorageFailed("denied".to_string()),
            SpeechError::SigningFailed("clock".to_string()),
            SpeechError::InternalError("boom".to_string()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR, "{err}");
            assert!(!err.is_client_error());
        }
    }

    #[test]
    fn service_messages_carry_the_cause() {
        let err = SpeechError::SynthesisFailed("InvalidParameterValue: voice Nobody".to_string());
        assert_eq!(
            err.client_message(),
            "Speech synthesis failed: InvalidParameterValue: voice Nobody"
        );
        assert_eq!(err.error_type(), "api_error");
    }
}
