//! Route handlers and shared template helpers.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;

pub mod api;
pub mod auth;
pub mod comment;
pub mod feedback;
pub mod main;
pub mod post;
pub mod search;

/// Maps a flash message level onto the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Checks whether the given role is present in the role list.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// A `303 See Other` redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Builds the context every page template expects: alerts, the current user
/// (if any), and the active nav entry.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("is_admin", &user.is_some_and(|u| check_role(crate::ADMIN_ROLE, &u.roles)));
    context.insert("current_page", current_page);
    context
}

/// Renders a template to a 200 response, logging failures as 500s.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_level_mappings() {
        assert_eq!(alert_level_to_str(&Level::Error), "danger");
        assert_eq!(alert_level_to_str(&Level::Warning), "warning");
        assert_eq!(alert_level_to_str(&Level::Success), "success");
        assert_eq!(alert_level_to_str(&Level::Info), "info");
        assert_eq!(alert_level_to_str(&Level::Debug), "info");
    }

    #[test]
    fn role_check_matches_exactly() {
        let roles = vec!["user".to_string(), "admin".to_string()];
        assert!(check_role("admin", &roles));
        assert!(!check_role("moderator", &roles));
        assert!(!check_role("adm", &roles));
    }
}
