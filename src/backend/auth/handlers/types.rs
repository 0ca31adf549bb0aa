/**
 * Account Handler Types
 *
 * Request bodies for signup, login and profile update, each with its own
 * field validation, plus the response bodies those handlers return.
 */

use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 50;
const PROFILE_MAX: usize = 255;

/// Validate username format
///
/// Usernames must be:
/// - 3-50 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < USERNAME_MIN || username.len() > USERNAME_MAX {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_username(username: &str) -> Result<(), SharedError> {
    if !is_valid_username(username) {
        return Err(SharedError::validation(
            "username",
            "must be 3-50 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }
    Ok(())
}

fn check_profile(profile: &str) -> Result<(), SharedError> {
    if profile.chars().count() > PROFILE_MAX {
        return Err(SharedError::validation(
            "userProfile",
            format!("must be at most {} characters", PROFILE_MAX),
        ));
    }
    Ok(())
}

/// Sign up request
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Chosen username (3-50 chars, alphanumeric + underscore)
    pub username: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    /// Free-form profile text
    #[serde(default)]
    pub user_profile: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        check_username(&self.username)?;
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "password is required"));
        }
        check_profile(&self.user_profile)
    }
}

/// Login request
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username.is_empty() {
            return Err(SharedError::validation("username", "username is required"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "password is required"));
        }
        Ok(())
    }
}

/// Profile update request
///
/// Both fields are optional; an empty string counts as not supplied.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub user_profile: Option<String>,
}

impl UpdateProfileRequest {
    /// Drop empty fields and reject a request that changes nothing
    pub fn normalize(self) -> Result<(Option<String>, Option<String>), SharedError> {
        let password = self.password.filter(|p| !p.is_empty());
        let user_profile = self.user_profile.filter(|p| !p.is_empty());

        if password.is_none() && user_profile.is_none() {
            return Err(SharedError::invalid_request("no info to update"));
        }
        if let Some(profile) = &user_profile {
            check_profile(profile)?;
        }
        Ok((password, user_profile))
    }
}

/// Login response
#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}

/// Plain acknowledgement, optionally carrying the id of a created entity
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub msg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(msg: &'static str) -> Self {
        Self { msg, id: None }
    }

    pub fn created(msg: &'static str, id: i64) -> Self {
        Self { msg, id: Some(id) }
    }
}

/// The caller's own profile; the digest is never part of it
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub user_profile: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup(username: &str, password: &str) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            password: password.to_string(),
            user_profile: String::new(),
        }
    }

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("bob_2"));
        assert!(!is_valid_username("al"));
        assert!(!is_valid_username("2alice"));
        assert!(!is_valid_username("ali ce"));
        assert!(!is_valid_username(&"a".repeat(51)));
    }

    #[test]
    fn test_signup_validation() {
        assert!(signup("alice", "secret").validate().is_ok());
        assert_eq!(
            signup("alice", "").validate().unwrap_err().field(),
            Some("password")
        );
        assert_eq!(
            signup("!", "secret").validate().unwrap_err().field(),
            Some("username")
        );
    }

    #[test]
    fn test_signup_profile_is_optional() {
        let request: SignupRequest =
            serde_json::from_value(json!({"username": "alice", "password": "secret"})).unwrap();
        assert_eq!(request.user_profile, "");

        let request: SignupRequest = serde_json::from_value(
            json!({"username": "alice", "password": "secret", "userProfile": "dev"}),
        )
        .unwrap();
        assert_eq!(request.user_profile, "dev");
    }

    #[test]
    fn test_update_with_nothing_is_rejected() {
        let err = UpdateProfileRequest::default().normalize().unwrap_err();
        assert_eq!(err.to_string(), "no info to update");

        let blank = UpdateProfileRequest {
            password: Some(String::new()),
            user_profile: Some(String::new()),
        };
        assert!(blank.normalize().is_err());
    }

    #[test]
    fn test_update_keeps_supplied_fields() {
        let request = UpdateProfileRequest {
            password: None,
            user_profile: Some("rustacean".to_string()),
        };
        assert_eq!(
            request.normalize().unwrap(),
            (None, Some("rustacean".to_string()))
        );
    }

    #[test]
    fn test_profile_response_shape() {
        let body = serde_json::to_value(ProfileResponse {
            username: "alice".to_string(),
            user_profile: "dev".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"username": "alice", "userProfile": "dev"}));
    }

    #[test]
    fn test_message_response_omits_missing_id() {
        assert_eq!(
            serde_json::to_value(MessageResponse::new("user created")).unwrap(),
            json!({"msg": "user created"})
        );
        assert_eq!(
            serde_json::to_value(MessageResponse::created("post created", 3)).unwrap(),
            json!({"msg": "post created", "id": 3})
        );
    }
}
