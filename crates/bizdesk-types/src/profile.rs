use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Business {
    pub id: u64,
    pub business_name: String,
    pub business_address: String,
    pub website: Option<String>,
    pub business_email: String,
    pub business_phone: String,
    pub tax_id: Option<String>,
    pub br_number: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Signed-in user as returned by login and profile endpoints.
///
/// This is also the snapshot persisted under the `user` storage key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub business_id: u64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<Business>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProfileData {
    pub user: User,
    pub business: Business,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct UpdatePersonalPayload {
    #[validate(length(min = 1, message = "Please enter your full name"))]
    pub full_name: String,
    #[validate(
        length(min = 1, message = "Please enter your email"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Please enter your mobile number"))]
    pub mobile_number: String,
}

impl From<&User> for UpdatePersonalPayload {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            mobile_number: user.mobile_number.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1, message = "Please enter business name"))]
    pub business_name: String,
    #[validate(
        length(min = 1, message = "Please enter business email"),
        email(message = "Please enter a valid email")
    )]
    pub business_email: String,
    #[validate(length(min = 1, message = "Please enter business phone"))]
    pub business_phone: String,
    #[validate(length(min = 1, message = "Please enter address"))]
    pub business_address: String,
    pub tax_id: Option<String>,
    #[validate(url(message = "Please enter a valid URL"))]
    pub website: Option<String>,
    #[validate(length(min = 1, message = "Please enter BR number"))]
    pub br_number: String,
}

impl From<&Business> for UpdateCompanyPayload {
    fn from(business: &Business) -> Self {
        Self {
            business_name: business.business_name.clone(),
            business_email: business.business_email.clone(),
            business_phone: business.business_phone.clone(),
            business_address: business.business_address.clone(),
            tax_id: business.tax_id.clone(),
            website: business.website.clone(),
            br_number: business.br_number.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct ChangePasswordPayload {
    #[validate(length(min = 1, message = "Please enter your current password"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
    #[validate(must_match(
        other = "new_password",
        message = "The two passwords that you entered do not match!"
    ))]
    pub new_password_confirmation: String,
}

/// Blank optional form inputs are sent as `null`, not as empty strings.
pub fn optional_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::field_errors;

    const PROFILE_JSON: &str = r#"{
        "user": {
            "id": 4,
            "full_name": "Nimal Perera",
            "email": "nimal@example.com",
            "mobile_number": "0712345678",
            "business_id": 9,
            "created_at": "2025-01-02T10:00:00Z",
            "updated_at": "2025-01-02T10:00:00Z"
        },
        "business": {
            "id": 9,
            "business_name": "Perera Textiles",
            "business_address": "12 Galle Rd",
            "website": null,
            "business_email": "hello@perera.lk",
            "business_phone": "0112345678",
            "tax_id": null,
            "br_number": "BR-1",
            "created_at": "2025-01-02T10:00:00Z",
            "updated_at": "2025-01-02T10:00:00Z"
        }
    }"#;

    #[test]
    fn test_profile_data_decodes_backend_shape() {
        let profile: ProfileData = serde_json::from_str(PROFILE_JSON).expect("decode");
        assert_eq!(profile.user.full_name, "Nimal Perera");
        assert_eq!(profile.user.business, None);
        assert_eq!(profile.business.website, None);

        let personal = UpdatePersonalPayload::from(&profile.user);
        assert_eq!(personal.mobile_number, "0712345678");
        let company = UpdateCompanyPayload::from(&profile.business);
        assert_eq!(company.br_number, "BR-1");
        assert!(company.validate().is_ok());
    }

    #[test]
    fn test_company_website_must_be_a_url_when_present() {
        let payload = UpdateCompanyPayload {
            business_name: "Perera Textiles".into(),
            business_email: "hello@perera.lk".into(),
            business_phone: "0112345678".into(),
            business_address: "12 Galle Rd".into(),
            tax_id: None,
            website: Some("not a url".into()),
            br_number: "BR-1".into(),
        };
        let errors = field_errors(&payload.validate().expect_err("invalid"));
        assert_eq!(
            errors.get("website").map(String::as_str),
            Some("Please enter a valid URL")
        );

        let fixed = UpdateCompanyPayload {
            website: Some("https://perera.lk".into()),
            ..payload
        };
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_change_password_checks_length_and_confirmation() {
        let payload = ChangePasswordPayload {
            current_password: "old-secret".into(),
            new_password: "abc".into(),
            new_password_confirmation: "abd".into(),
        };
        let errors = field_errors(&payload.validate().expect_err("invalid"));
        assert!(errors.contains_key("new_password"));
        assert!(errors.contains_key("new_password_confirmation"));
        assert!(!errors.contains_key("current_password"));
    }

    #[test]
    fn test_optional_field_blanks_become_none() {
        assert_eq!(optional_field("   "), None);
        assert_eq!(optional_field(" TIN-7 "), Some("TIN-7".to_string()));
    }
}
