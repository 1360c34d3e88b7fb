use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::user::User;
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth as auth_service;

#[get("/login")]
pub async fn show_login(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/");
    }

    let context = base_context(&flash_messages, None, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), form) {
        Ok(user) => start_session(&req, &user, &server_config.secret, "/"),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid email or password.").send();
            redirect("/login")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Failed to sign in.").send();
            redirect("/login")
        }
    }
}

#[get("/signup")]
pub async fn show_signup(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/");
    }

    let context = base_context(&flash_messages, None, "signup");
    render_template(&tera, "auth/signup.html", &context)
}

#[post("/signup")]
pub async fn signup(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Form(form): web::Form<SignUpForm>,
) -> impl Responder {
    match auth_service::register(repo.get_ref(), form) {
        Ok(user) => start_session(&req, &user, &server_config.secret, "/"),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/signup")
        }
        Err(err) => {
            log::error!("Failed to sign up: {err}");
            FlashMessage::error("Failed to create the account.").send();
            redirect("/signup")
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}

/// Issues the JWT claims for the account and attaches them to the session.
fn start_session(
    req: &HttpRequest,
    user: &User,
    secret: &str,
    location: &str,
) -> actix_web::HttpResponse {
    let claims = AuthenticatedUser::from(user);

    match claims.to_jwt(secret) {
        Ok(token) => {
            if let Err(err) = Identity::login(&req.extensions(), token) {
                log::error!("Failed to attach identity: {err}");
                FlashMessage::error("Failed to sign in.").send();
                return redirect("/login");
            }
            redirect(location)
        }
        Err(err) => {
            log::error!("Failed to issue session token: {err}");
            FlashMessage::error("Failed to sign in.").send();
            redirect("/login")
        }
    }
}
