//! Constrained value objects for user-submitted data.
//!
//! Once a value has been through one of these constructors the rest of the
//! application can treat it as trusted: bodies are sanitized, ratings are in
//! range, emails are normalized.

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when constructing a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    #[error("value cannot be empty")]
    EmptyString,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("rating must be between 1 and 5")]
    InvalidRating,
    #[error("invalid phone number")]
    InvalidPhone,
}

/// A star rating between 1 and 5 inclusive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidRating)
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Sanitized, trimmed, non-empty text for comment and feedback bodies.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SanitizedText(String);

impl SanitizedText {
    /// Strips markup with ammonia, trims, and rejects empty results.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let cleaned = ammonia::clean(&value.into());
        let trimmed = cleaned.trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SanitizedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SanitizedText {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SanitizedText {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower-cased, validated email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = email.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for UserEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for UserEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_enforces_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert_eq!(Rating::new(0), Err(TypeConstraintError::InvalidRating));
        assert_eq!(Rating::new(6), Err(TypeConstraintError::InvalidRating));
    }

    #[test]
    fn sanitized_text_strips_markup() {
        let text = SanitizedText::new("  nice place <script>alert(1)</script> ").unwrap();
        assert_eq!(text.as_str(), "nice place");
    }

    #[test]
    fn sanitized_text_rejects_empty_input() {
        assert_eq!(
            SanitizedText::new("  <script></script> "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn email_is_normalized() {
        let email = UserEmail::new(" Tenant@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "tenant@example.com");
        assert!(UserEmail::new("not-an-email").is_err());
    }
}
