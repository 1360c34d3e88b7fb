use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
/// Form data for registering a new account.
pub struct SignUpForm {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    /// International phone number, normalized to E.164 on save.
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Deserialize, Validate)]
/// Form data for signing in.
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}
