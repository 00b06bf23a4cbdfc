use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::repo_types::{Role, UserRecord};

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "password must be longer than or equal to 6 characters"))]
    #[schema(example = "123456", min_length = 6)]
    pub password: String,
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    pub role: Option<Role>,
}

/// Request body for `PATCH /users/:id`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "password must be longer than or equal to 6 characters"))]
    pub password: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUserResponse {
    pub message: String,
    pub deleted_user: UserRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_short_password_and_bad_email() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"email":"not-an-email","password":"12345"}"#).unwrap();
        let err = req.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn create_accepts_minimal_body() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"email":"user@example.com","password":"123456"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.role.is_none());
    }

    #[test]
    fn role_must_be_user_or_admin() {
        let ok: CreateUserRequest = serde_json::from_str(
            r#"{"email":"a@example.com","password":"123456","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(ok.role, Some(Role::Admin));

        let bad = serde_json::from_str::<CreateUserRequest>(
            r#"{"email":"a@example.com","password":"123456","role":"root"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let res = serde_json::from_str::<UpdateUserRequest>(r#"{"isAdmin":true}"#);
        assert!(res.is_err());
    }
}
