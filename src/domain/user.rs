use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, UserEmail, normalize_phone_to_e164};

/// A registered account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

impl NewUser {
    /// Normalizes the signup data: trimmed name, lower-cased email, E.164
    /// phone. New accounts always start with the regular user role.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: &str,
        password_hash: String,
    ) -> Result<Self, TypeConstraintError> {
        let full_name = full_name.into().trim().to_string();
        if full_name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }

        Ok(Self {
            full_name,
            email: UserEmail::new(email)?.into_inner(),
            phone: normalize_phone_to_e164(phone)?,
            password_hash,
            role: "user".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_normalizes_fields() {
        let user = NewUser::new(
            "  Jane Renter ",
            " Jane@Example.com ",
            "+46 70 123 45 67",
            "hash".to_string(),
        )
        .unwrap();

        assert_eq!(user.full_name, "Jane Renter");
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.phone, "+46701234567");
        assert_eq!(user.role, "user");
    }

    #[test]
    fn new_user_rejects_blank_name() {
        assert!(NewUser::new("  ", "a@b.com", "+46701234567", "hash".into()).is_err());
    }
}
