use bizdesk_types::{Envelope, LoginData, LoginPayload, RegisterPayload};
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Signs in and persists the returned token and user snapshot.
    pub async fn login(&self, payload: &LoginPayload) -> Result<Envelope<LoginData>, ApiError> {
        payload.validate()?;
        let envelope = self
            .client
            .post::<LoginData, _>(endpoints::AUTH_LOGIN, payload)
            .await?;

        if let Some(data) = envelope.data.as_ref() {
            self.client.session().establish(data);
        }
        Ok(envelope)
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<Envelope<Value>, ApiError> {
        payload.validate()?;
        let envelope = self
            .client
            .post::<Value, _>(endpoints::AUTH_REGISTER, payload)
            .await?;
        info!(email = %payload.email, "registered new account");
        Ok(envelope)
    }

    pub fn logout(&self) {
        self.client.session().teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_user, Harness, Toast};
    use crate::transport::RawResponse;
    use http::StatusCode;
    use serde_json::json;

    fn login_payload() -> LoginPayload {
        LoginPayload {
            email: "nimal@example.com".into(),
            password: "secret-pass".into(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let harness = Harness::new("/login");
        let body = json!({
            "message": "Login successful",
            "data": { "access_token": "tok-1", "user": sample_user() }
        });
        harness.transport.push(Ok(RawResponse {
            status: StatusCode::OK,
            body: body.to_string().into_bytes(),
        }));

        let service = AuthService::new(harness.client.clone());
        let envelope = service.login(&login_payload()).await.expect("login");

        assert_eq!(envelope.message.as_deref(), Some("Login successful"));
        assert_eq!(harness.client.session().token().as_deref(), Some("tok-1"));
        assert_eq!(harness.client.session().user(), Some(sample_user()));

        let sent = harness.transport.sent();
        assert_eq!(sent[0].url, "http://api.test/api/v1/auth/login");

        service.logout();
        assert!(!harness.client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_partial_user_snapshot_still_signs_in() {
        let harness = Harness::new("/login");
        let body = json!({
            "data": {
                "access_token": "tok-1",
                "user": { "id": 4, "full_name": "Nimal", "email": "n@example.com" }
            }
        });
        harness.transport.push(Ok(RawResponse {
            status: StatusCode::OK,
            body: body.to_string().into_bytes(),
        }));

        let service = AuthService::new(harness.client.clone());
        service.login(&login_payload()).await.expect("login");

        let session = harness.client.session();
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.display_name().as_deref(), Some("Nimal"));
        assert_eq!(session.user(), None);
        assert!(harness.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_login_never_reaches_network() {
        let harness = Harness::new("/login");
        let service = AuthService::new(harness.client.clone());

        let err = service
            .login(&LoginPayload {
                email: "nope".into(),
                password: String::new(),
            })
            .await
            .expect_err("invalid");

        let fields = err.field_errors().expect("field errors");
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(harness.transport.sent().is_empty());
        assert!(harness.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_empty() {
        let harness = Harness::new("/login");
        harness.transport.push(Ok(RawResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: br#"{"message":"Invalid credentials"}"#.to_vec(),
        }));
        let service = AuthService::new(harness.client.clone());

        let err = service.login(&login_payload()).await.expect_err("rejected");
        assert_eq!(err.message(), "Invalid credentials");
        assert!(!harness.client.session().is_authenticated());
        assert_eq!(
            harness.notifier.toasts(),
            vec![Toast::Error("Invalid credentials".into())]
        );
    }
}
