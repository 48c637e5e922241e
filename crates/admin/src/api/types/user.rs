//! Back office user account types.

use backoffice_core::{CustomerId, Email, UserId, UserRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;

/// Customer profile linked to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCustomer {
    pub id: CustomerId,
    pub full_name: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub phone: String,
}

/// A user account as returned by `/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub role: UserRole,
    #[serde(default)]
    pub customer: Option<UserCustomer>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the account can use the admin screens.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

// Email shape is already enforced by deserialization.
impl Validate for User {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Payload for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub email: Email,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
}

impl Validate for UserInput {
    fn validate(&self) -> Result<(), String> {
        if self.password.chars().count() < 6 {
            return Err("password must be at least 6 characters".to_string());
        }
        Ok(())
    }
}

/// Payload for `PATCH /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_email_at_boundary() {
        let bad = r#"{"id": 1, "email": "not-an-email", "role": "admin"}"#;
        assert!(serde_json::from_str::<User>(bad).is_err());

        let good = r#"{"id": 1, "email": "ops@loja.com", "role": "admin"}"#;
        let user: User = serde_json::from_str(good).unwrap_or_else(|e| panic!("{e}"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_short_password_rejected() {
        let Ok(email) = Email::parse("ops@loja.com") else {
            panic!("valid email");
        };
        let input = UserInput {
            email,
            password: "123".to_string(),
            role: Some(UserRole::Admin),
            customer_id: None,
        };
        assert!(input.validate().is_err());
    }
}
