use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::validation::TEN_DIGITS;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginPayload {
    #[validate(
        length(min = 1, message = "Please input your Email!"),
        email(message = "Please enter a valid email!")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Please input your Password!"))]
    pub password: String,
}

/// Super-admin registration: account details plus the business identity.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct RegisterPayload {
    #[validate(length(min = 1, message = "Please enter your full name"))]
    pub full_name: String,
    #[validate(
        length(min = 1, message = "Please enter your email"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(regex(path = *TEN_DIGITS, message = "Mobile number must be 10 digits"))]
    pub mobile_number: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(
        other = "password",
        message = "The two passwords that you entered do not match!"
    ))]
    pub password_confirmation: String,
    #[validate(length(min = 1, message = "Please enter your business name"))]
    pub business_name: String,
    #[validate(length(min = 1, message = "Please enter your business address"))]
    pub business_address: String,
    #[validate(
        length(min = 1, message = "Please enter your business email"),
        email(message = "Please enter a valid email")
    )]
    pub business_email: String,
    #[validate(regex(path = *TEN_DIGITS, message = "Phone number must be 10 digits"))]
    pub business_phone: String,
    #[validate(length(min = 1, message = "Please enter your Business Registration Number"))]
    pub br_number: String,
}

/// Fields checked before the signup form advances to the business step.
pub const REGISTER_ACCOUNT_FIELDS: [&str; 5] = [
    "full_name",
    "email",
    "mobile_number",
    "password",
    "password_confirmation",
];

/// Login response data. The user snapshot is kept as sent; only the token is interpreted.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginData {
    pub access_token: Option<String>,
    pub user: Option<Value>,
}
