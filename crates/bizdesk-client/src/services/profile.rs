use bizdesk_types::{
    ChangePasswordPayload, Envelope, ProfileData, UpdateCompanyPayload, UpdatePersonalPayload,
};
use serde_json::Value;
use validator::Validate;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::request::RequestOptions;

/// Cache key the profile page reads under and invalidates after edits.
pub const PROFILE_QUERY_KEY: &str = "profile";

#[derive(Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_profile(&self) -> Result<Envelope<ProfileData>, ApiError> {
        self.client.get(endpoints::PROFILE).await
    }

    pub async fn update_personal(
        &self,
        payload: &UpdatePersonalPayload,
    ) -> Result<Envelope<Value>, ApiError> {
        payload.validate()?;
        self.client
            .put_with(endpoints::PROFILE_PERSONAL, payload, RequestOptions::notify_success())
            .await
    }

    pub async fn update_company(
        &self,
        payload: &UpdateCompanyPayload,
    ) -> Result<Envelope<Value>, ApiError> {
        payload.validate()?;
        self.client
            .put_with(endpoints::PROFILE_COMPANY, payload, RequestOptions::notify_success())
            .await
    }

    pub async fn change_password(
        &self,
        payload: &ChangePasswordPayload,
    ) -> Result<Envelope<Value>, ApiError> {
        payload.validate()?;
        self.client
            .put_with(endpoints::PROFILE_PASSWORD, payload, RequestOptions::notify_success())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_user, Harness, Toast};
    use crate::transport::RawResponse;
    use http::{Method, StatusCode};
    use serde_json::json;

    fn respond(harness: &Harness, status: StatusCode, body: Value) {
        harness.transport.push(Ok(RawResponse {
            status,
            body: body.to_string().into_bytes(),
        }));
    }

    fn sample_business() -> Value {
        json!({
            "id": 9,
            "business_name": "Perera Traders",
            "business_address": "12 Galle Road, Colombo",
            "website": null,
            "business_email": "info@perera.lk",
            "business_phone": "0112345678",
            "tax_id": null,
            "br_number": "PV-1022",
            "created_at": "2025-01-02T10:00:00Z",
            "updated_at": "2025-01-02T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_get_profile_is_quiet_on_success() {
        let harness = Harness::new("/profile");
        respond(
            &harness,
            StatusCode::OK,
            json!({
                "message": "Profile fetched",
                "data": { "user": sample_user(), "business": sample_business() }
            }),
        );

        let service = ProfileService::new(harness.client.clone());
        let envelope = service.get_profile().await.expect("profile");
        let profile = envelope.data.expect("data");

        assert_eq!(profile.user.full_name, "Nimal Perera");
        assert_eq!(profile.business.br_number, "PV-1022");
        assert!(harness.notifier.toasts().is_empty());
        assert_eq!(harness.transport.sent()[0].method, Method::GET);
    }

    #[tokio::test]
    async fn test_update_personal_toasts_server_message() {
        let harness = Harness::new("/profile");
        respond(
            &harness,
            StatusCode::OK,
            json!({ "message": "Profile updated", "data": null }),
        );

        let service = ProfileService::new(harness.client.clone());
        service
            .update_personal(&UpdatePersonalPayload::from(&sample_user()))
            .await
            .expect("update");

        let sent = harness.transport.sent();
        assert_eq!(sent[0].method, Method::PUT);
        assert_eq!(sent[0].url, "http://api.test/api/v1/profile/personal");
        assert_eq!(
            harness.notifier.toasts(),
            vec![Toast::Success("Profile updated".into())]
        );
    }

    #[tokio::test]
    async fn test_mismatched_password_is_rejected_locally() {
        let harness = Harness::new("/profile");
        let service = ProfileService::new(harness.client.clone());

        let err = service
            .change_password(&ChangePasswordPayload {
                current_password: "old-secret".into(),
                new_password: "new-secret".into(),
                new_password_confirmation: "other-secret".into(),
            })
            .await
            .expect_err("mismatch");

        let fields = err.field_errors().expect("field errors");
        assert!(fields.contains_key("new_password_confirmation"));
        assert!(harness.transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_expired_session_while_editing_company() {
        let harness = Harness::new("/profile");
        harness.client.session().storage().set("token", "stale");
        respond(
            &harness,
            StatusCode::UNAUTHORIZED,
            json!({ "message": "Unauthenticated." }),
        );

        let service = ProfileService::new(harness.client.clone());
        let payload = UpdateCompanyPayload {
            business_name: "Perera Traders".into(),
            business_email: "info@perera.lk".into(),
            business_phone: "0112345678".into(),
            business_address: "12 Galle Road, Colombo".into(),
            tax_id: None,
            website: None,
            br_number: "PV-1022".into(),
        };
        let err = service.update_company(&payload).await.expect_err("401");

        assert!(err.is_unauthorized());
        assert!(!harness.client.session().is_authenticated());
        assert_eq!(harness.navigator.redirects(), vec!["/login".to_string()]);
    }
}
