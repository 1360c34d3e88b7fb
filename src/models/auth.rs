//! Authenticated user claims carried in the session identity.
//!
//! On login a JWT with these claims is stored through `actix-identity`; the
//! `FromRequest` impl decodes it back on every request, so handlers can take
//! `AuthenticatedUser` (or `Option<AuthenticatedUser>` on public pages) as an
//! extractor.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::models::config::ServerConfig;

const SESSION_TTL_DAYS: i64 = 7;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Stringified user id.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Parsed user id, `None` if the subject claim is not numeric.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        let exp = chrono::Utc::now() + chrono::Duration::days(SESSION_TTL_DAYS);
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.full_name.clone(),
            roles: vec![user.role.clone()],
            exp: exp.timestamp() as usize,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if let Ok(identity) = Identity::from_request(req, payload).into_inner()
            && let Ok(token) = identity.id()
            && let Some(server_config) = req.app_data::<web::Data<ServerConfig>>()
            && let Ok(user) = Self::from_jwt(&token, &server_config.secret)
        {
            return ready(Ok(user));
        }

        ready(Err(ErrorUnauthorized("Unauthorized")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            full_name: "Jane Renter".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+46701234567".to_string(),
            password_hash: "hash".to_string(),
            role: "user".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    #[test]
    fn jwt_round_trip() {
        let claims = AuthenticatedUser::from(&sample_user());
        let token = claims.to_jwt("test-secret").unwrap();
        let decoded = AuthenticatedUser::from_jwt(&token, "test-secret").unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(decoded.user_id(), Some(7));
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let claims = AuthenticatedUser::from(&sample_user());
        let token = claims.to_jwt("test-secret").unwrap();
        assert!(AuthenticatedUser::from_jwt(&token, "other-secret").is_err());
    }
}
