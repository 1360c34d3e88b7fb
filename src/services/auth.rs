//! Account registration and sign-in.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use validator::Validate;

use crate::domain::user::{NewUser, User};
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Registers a new account with a freshly hashed password.
pub fn register<R>(repo: &R, form: SignUpForm) -> ServiceResult<User>
where
    R: UserReader + UserWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate signup form: {err}");
        return Err(ServiceError::Form(
            "Please check the signup fields.".to_string(),
        ));
    }

    let password_hash = hash_password(&form.password)?;
    let new_user = NewUser::new(form.full_name, form.email, &form.phone, password_hash)?;

    if repo.get_user_by_email(&new_user.email)?.is_some() {
        return Err(ServiceError::Form(
            "An account with this email already exists.".to_string(),
        ));
    }

    repo.create_user(&new_user).map_err(Into::into)
}

/// Verifies the credentials and returns the account. Wrong email and wrong
/// password are indistinguishable to the caller.
pub fn login<R>(repo: &R, form: SignInForm) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    if form.validate().is_err() {
        return Err(ServiceError::Unauthorized);
    }

    let email = form.email.trim().to_lowercase();
    let user = repo
        .get_user_by_email(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(&form.password, &user.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(user)
}

fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| {
            log::error!("Failed to hash password: {err}");
            ServiceError::Form("Failed to process the password.".to_string())
        })
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
