use entity::user::Model as UserModel;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::not_blank;

fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| s.trim().to_string()))
}

/// Body of `POST /register`. Every field is optional at the serde level so
/// that a missing one is reported as a field error instead of a parse error.
/// Names and email are trimmed on the way in; the password is kept as sent.
#[derive(Serialize, Deserialize, Validate, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RUserRegister {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    #[serde(default, deserialize_with = "trimmed")]
    pub first_name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    #[serde(default, deserialize_with = "trimmed")]
    pub last_name: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        email(code = "invalid", message = "Enter a valid email address.")
    )]
    #[serde(default, deserialize_with = "trimmed")]
    pub email: Option<String>,
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub password: Option<String>,
    pub phone: Option<String>,
}

/// A registration that passed field validation.
#[derive(Debug)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl RUserRegister {
    /// `None` if a required field is missing; call after `validate()`.
    pub fn into_registration(self) -> Option<Registration> {
        Some(Registration {
            first_name: self.first_name?,
            last_name: self.last_name?,
            email: self.email?,
            password: self.password?,
            phone: self.phone.filter(|p| !p.is_empty()),
        })
    }
}

/// Body of `POST /login`.
#[derive(Serialize, Deserialize, Validate, Debug, Default, Clone)]
pub struct RUserLogin {
    #[validate(required(message = "This field is required."))]
    pub email: Option<String>,
    #[validate(required(message = "This field is required."))]
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
}

/// Public view of a user. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRes {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<&UserModel> for UserRes {
    fn from(user: &UserModel) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub access_token: String,
    pub user: UserRes,
}
