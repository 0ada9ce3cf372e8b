use bizdesk_types::{field_errors, FieldErrors};
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

use crate::notify::{FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};

/// Errors returned by the API client. Rejections and network failures have already been
/// toasted, unless suppressed, by the time a caller sees one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached the client.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("request rejected ({status}): {}", .message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
        body: Option<Value>,
    },

    /// A 2xx body did not follow the envelope convention or did not fit the expected type.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The request could not be built; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The payload failed form validation; nothing was sent.
    #[error("validation failed")]
    Validation(FieldErrors),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Text suitable for showing next to a form.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.into(),
            ApiError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.into()),
            ApiError::Validation(_) => "Please correct the highlighted fields".into(),
            other => other.to_string(),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(field_errors(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_and_message() {
        let err = ApiError::Rejected {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: Some("Email already taken".into()),
            body: None,
        };
        assert_eq!(
            err.to_string(),
            "request rejected (422 Unprocessable Entity): Email already taken"
        );
        assert_eq!(err.message(), "Email already taken");
        assert!(!err.is_unauthorized());

        let bare = ApiError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            message: None,
            body: None,
        };
        assert_eq!(bare.message(), FALLBACK_ERROR_MESSAGE);
        assert!(bare.is_unauthorized());
    }

    #[test]
    fn test_network_message_is_generic() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
