use http::{HeaderMap, Method};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Per-call notification switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub show_success_message: bool,
    pub show_error_message: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            show_success_message: false,
            show_error_message: true,
        }
    }
}

impl RequestOptions {
    /// Also toast the server's message on success.
    pub fn notify_success() -> Self {
        Self {
            show_success_message: true,
            ..Self::default()
        }
    }

    /// No toasts at all; the caller reports failures itself.
    pub fn silent() -> Self {
        Self {
            show_success_message: false,
            show_error_message: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// Ordered multipart form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push((name.into(), FormPart::Text(value.into())));
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push((
            name.into(),
            FormPart::File {
                file_name: file_name.into(),
                content_type: content_type.map(str::to_string),
                bytes,
            },
        ));
        self
    }

    pub fn parts(&self) -> &[(String, FormPart)] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<(String, FormPart)> {
        self.parts
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// A call as pages and services describe it: path relative to the base address.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    pub options: RequestOptions,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            options: RequestOptions::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ApiError::InvalidRequest(format!("payload is not serializable: {e}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

/// A call ready for the wire: absolute URL and final headers.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// Joins base and path with exactly one slash. Absolute URLs pass through.
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:8080/api/v1", "/profile", "http://localhost:8080/api/v1/profile")]
    #[case("http://localhost:8080/api/v1/", "/profile", "http://localhost:8080/api/v1/profile")]
    #[case("http://localhost:8080/api/v1", "profile", "http://localhost:8080/api/v1/profile")]
    #[case("http://localhost:8080/api/v1", "", "http://localhost:8080/api/v1")]
    #[case("http://localhost:8080/api/v1", "https://cdn.example/x", "https://cdn.example/x")]
    fn test_join_url(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        assert_eq!(join_url(base, path), expected);
    }

    #[test]
    fn test_default_options_notify_errors_only() {
        let options = RequestOptions::default();
        assert!(!options.show_success_message);
        assert!(options.show_error_message);
        assert!(RequestOptions::notify_success().show_error_message);
        assert_eq!(
            RequestOptions::silent(),
            RequestOptions {
                show_success_message: false,
                show_error_message: false
            }
        );
    }

    #[test]
    fn test_builder_sets_body_and_options() {
        let request = ApiRequest::put("/profile/personal")
            .json(&serde_json::json!({ "full_name": "A" }))
            .expect("json")
            .options(RequestOptions::notify_success());
        assert_eq!(request.method, Method::PUT);
        assert!(matches!(request.body, RequestBody::Json(_)));
        assert!(request.options.show_success_message);

        let form = MultipartForm::new()
            .text("name", "Cotton")
            .file("image", "cotton.png", Some("image/png"), vec![1, 2, 3]);
        let upload = ApiRequest::post("/materials").multipart(form);
        let RequestBody::Multipart(form) = upload.body else {
            panic!("expected multipart body");
        };
        assert_eq!(form.parts().len(), 2);
    }
}
