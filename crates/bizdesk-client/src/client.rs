use std::sync::Arc;

use bizdesk_types::Envelope;
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::navigate::{Navigator, LOGIN_PATH};
use crate::notify::{Notifier, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
use crate::request::{join_url, ApiRequest, MultipartForm, PreparedRequest, RequestBody, RequestOptions};
use crate::session::SessionContext;
use crate::transport::{RawResponse, Transport, TransportError};

const APPLICATION_JSON: &str = "application/json";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// The one HTTP entry point for every page.
///
/// Each call gets the base address, a content type and, when a session token is
/// persisted, `Authorization: Bearer <token>`. Responses are checked against the
/// envelope convention; failures raise toasts (unless suppressed per call), a 401
/// tears the session down and sends the user to `/login`, and the error is always
/// handed back to the caller.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    config: ClientConfig,
    session: SessionContext,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: SessionContext,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                config,
                session,
                transport,
                notifier,
                navigator,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    /// Builds the wire form of a request. Reads the token at call time.
    pub fn prepare(&self, request: &ApiRequest) -> Result<PreparedRequest, ApiError> {
        let url = join_url(&self.inner.config.base_url, &request.path);

        let contentType = match request.body {
            RequestBody::Multipart(_) => MULTIPART_FORM_DATA,
            RequestBody::Empty | RequestBody::Json(_) => APPLICATION_JSON,
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(contentType));

        if let Some(token) = self.inner.session.token() {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                ApiError::InvalidRequest(format!("session token is not a valid header value: {e}"))
            })?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        Ok(PreparedRequest {
            method: request.method.clone(),
            url,
            headers,
            body: request.body.clone(),
        })
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Envelope<T>, ApiError> {
        let options = request.options;
        let prepared = self.prepare(&request)?;

        let response = match self.inner.transport.send(prepared).await {
            Ok(response) => response,
            Err(e) => return Err(self.on_transport_failure(options, e)),
        };

        if response.status.is_success() {
            self.on_success(options, &response)
        } else {
            Err(self.on_rejected(options, response))
        }
    }

    fn on_success<T: DeserializeOwned>(
        &self,
        options: RequestOptions,
        response: &RawResponse,
    ) -> Result<Envelope<T>, ApiError> {
        let envelope = Envelope::<Value>::parse(&response.body).map_err(|e| {
            warn!(status = response.status.as_u16(), "response outside envelope convention: {e}");
            ApiError::Decode(e.to_string())
        })?;

        if options.show_success_message {
            if let Some(message) = envelope.message.as_deref().filter(|m| !m.is_empty()) {
                self.inner.notifier.success(message);
            }
        }

        envelope.into_typed().map_err(|e| {
            warn!(status = response.status.as_u16(), "unexpected response data: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    fn on_rejected(&self, options: RequestOptions, response: RawResponse) -> ApiError {
        let status = response.status;
        let body: Option<Value> = serde_json::from_slice(&response.body).ok();
        let message = Envelope::<Value>::parse(&response.body)
            .ok()
            .and_then(|envelope| envelope.message)
            .filter(|m| !m.is_empty());

        warn!(status = status.as_u16(), "request rejected");

        if options.show_error_message {
            self.inner
                .notifier
                .error(message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE));
        }

        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
        }

        ApiError::Rejected {
            status,
            message,
            body,
        }
    }

    fn on_transport_failure(&self, options: RequestOptions, e: TransportError) -> ApiError {
        warn!("request failed before a response arrived: {e}");
        if options.show_error_message {
            self.inner.notifier.error(NETWORK_ERROR_MESSAGE);
        }
        ApiError::Network(e.0)
    }

    fn invalidate_session(&self) {
        self.inner.session.teardown();
        let currentPath = self.inner.navigator.current_path();
        if currentPath == LOGIN_PATH {
            debug!("already on {LOGIN_PATH}, not redirecting");
            return;
        }
        self.inner.navigator.redirect(LOGIN_PATH);
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(ApiRequest::get(path).options(options)).await
    }

    pub async fn post<T, B>(&self, path: &str, payload: &B) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post_with(path, payload, RequestOptions::default()).await
    }

    pub async fn post_with<T, B>(
        &self,
        path: &str,
        payload: &B,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(ApiRequest::post(path).json(payload)?.options(options))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, payload: &B) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.put_with(path, payload, RequestOptions::default()).await
    }

    pub async fn put_with<T, B>(
        &self,
        path: &str,
        payload: &B,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(ApiRequest::put(path).json(payload)?.options(options))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.send(ApiRequest::delete(path)).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(ApiRequest::post(path).multipart(form).options(options))
            .await
    }
}
