use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The `{ message, data }` wrapper the backend puts around every response body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("response body is not valid JSON: {0}")]
    Malformed(String),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("response `message` field is not a string")]
    InvalidMessage,

    #[error("response `data` field has an unexpected shape: {0}")]
    Data(String),
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            message: None,
            data: None,
        }
    }
}

impl Envelope<Value> {
    /// Validates a raw body against the envelope convention.
    ///
    /// An empty body is an empty envelope. Anything else must be a JSON object whose
    /// `message`, when present and non-null, is a string. `data` is kept untyped.
    pub fn parse(body: &[u8]) -> Result<Self, EnvelopeError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|e| EnvelopeError::Malformed(e.to_string()))?;

        let Value::Object(mut fields) = value else {
            return Err(EnvelopeError::NotAnObject);
        };

        let message = match fields.remove("message") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(_) => return Err(EnvelopeError::InvalidMessage),
        };

        let data = match fields.remove("data") {
            None | Some(Value::Null) => None,
            Some(other) => Some(other),
        };

        Ok(Self { message, data })
    }

    /// Decodes `data` into the caller's type, keeping the message.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<Envelope<T>, EnvelopeError> {
        let data = match self.data {
            Some(value) => Some(
                serde_json::from_value(value).map_err(|e| EnvelopeError::Data(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Envelope {
            message: self.message,
            data,
        })
    }
}
