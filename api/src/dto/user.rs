use serde::{Deserialize, Serialize};
use validator::Validate;

use si_core::domain::entities::{Id, User, UserPatch};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,

    #[validate(required(message = "email is required"), email(message = "must be a valid email"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,

    #[validate(email(message = "must be a valid email"))]
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        UserPatch {
            name: request.name,
            email: request.email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Id,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUserRequest {
            name: None,
            email: Some("a@x.com".into()),
        };
        assert!(valid.validate().is_ok());

        let missing = CreateUserRequest { name: None, email: None };
        assert!(missing.validate().unwrap_err().field_errors().contains_key("email"));

        let malformed = CreateUserRequest {
            name: Some("A".into()),
            email: Some("not-an-email".into()),
        };
        assert!(malformed.validate().is_err());
    }

    #[test]
    fn test_patch_email_checked_only_when_present() {
        let empty = UpdateUserRequest { name: None, email: None };
        assert!(empty.validate().is_ok());

        let bad = UpdateUserRequest {
            name: None,
            email: Some("nope".into()),
        };
        assert!(bad.validate().is_err());
    }
}
