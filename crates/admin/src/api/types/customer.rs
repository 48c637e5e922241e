//! Customer domain types.

use backoffice_core::{CustomerId, Email, UserId, UserRole};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Validate, require_text};

/// Login account linked to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAccount {
    pub id: UserId,
    pub email: String,
    pub role: UserRole,
}

/// A customer as returned by `/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub full_name: String,
    /// Brazilian taxpayer id, as entered.
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub user: Option<CustomerAccount>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Email of the linked account, if there is one.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), String> {
        require_text("customer name", &self.full_name)
    }
}

/// Payload for `POST /customers`; optionally creates the login account too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub full_name: String,
    pub cpf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Validate for CustomerInput {
    fn validate(&self) -> Result<(), String> {
        require_text("full name", &self.full_name)?;
        require_text("cpf", &self.cpf)?;
        require_text("phone", &self.phone)?;
        if self.email.is_some() != self.password.is_some() {
            return Err("email and password must be provided together".to_string());
        }
        Ok(())
    }
}

/// Payload for `PATCH /customers/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_customer_with_account() {
        let json = r#"{
            "id": 3, "fullName": "João Lima", "cpf": "123.456.789-00",
            "birthDate": "1990-05-17", "phone": "+55 11 99999-0000",
            "user": {"id": 8, "email": "joao@loja.com", "role": "customer"},
            "createdAt": "2024-11-02T09:00:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(customer.email(), Some("joao@loja.com"));
        assert_eq!(customer.birth_date, NaiveDate::from_ymd_opt(1990, 5, 17));
        assert!(customer.validate().is_ok());
    }

    #[test]
    fn test_input_requires_email_and_password_together() {
        let mut input = CustomerInput {
            full_name: "Ana".to_string(),
            cpf: "1".to_string(),
            phone: "2".to_string(),
            ..CustomerInput::default()
        };
        assert!(input.validate().is_ok());

        input.email = Email::parse("ana@loja.com").ok();
        assert!(input.validate().is_err());

        input.password = Some("s3nha-forte".to_string());
        assert!(input.validate().is_ok());
    }
}
