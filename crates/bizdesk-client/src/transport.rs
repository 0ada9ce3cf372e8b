use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use http::StatusCode;
use reqwest::multipart::{Form, Part};
use thiserror::Error;

use crate::request::{FormPart, MultipartForm, PreparedRequest, RequestBody};

/// A response that reached the client, whatever its status.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// No response reached the client: connection refused, DNS failure, CORS, offline.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        TransportError(e.to_string())
    }
}

/// Sends prepared requests. Futures are not `Send` so the browser fetch API fits.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// Reqwest-backed transport; uses `fetch` on wasm and hyper natively.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<Form, TransportError> {
    let mut reqwestForm = Form::new();
    for (name, part) in form.into_parts() {
        reqwestForm = match part {
            FormPart::Text(value) => reqwestForm.text(name, value),
            FormPart::File {
                file_name,
                content_type,
                bytes,
            } => {
                let mut filePart = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = content_type {
                    filePart = filePart.mime_str(&mime)?;
                }
                reqwestForm.part(name, filePart)
            }
        };
    }
    Ok(reqwestForm)
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let PreparedRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        let builder = self.client.request(method, url.as_str());
        let builder = match body {
            RequestBody::Empty => builder.headers(headers),
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(&value)
                    .map_err(|e| TransportError(format!("failed to encode body: {e}")))?;
                builder.headers(headers).body(bytes)
            }
            RequestBody::Multipart(form) => {
                // reqwest writes `multipart/form-data; boundary=...` itself
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(to_reqwest_form(form)?)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
