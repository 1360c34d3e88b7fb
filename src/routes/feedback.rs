use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::feedback::FeedbackForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::feedback as feedback_service;

#[get("/feedback")]
pub async fn show_feedback_form(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, user.as_ref(), "feedback");
    render_template(&tera, "feedback/new.html", &context)
}

#[post("/feedback")]
pub async fn submit_feedback(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<FeedbackForm>,
) -> impl Responder {
    match feedback_service::submit_feedback(repo.get_ref(), &form) {
        Ok(()) => {
            FlashMessage::success("Thanks for your feedback!").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to store feedback: {err}");
            FlashMessage::error("Failed to send the feedback.").send();
        }
    }

    redirect("/feedback")
}

#[get("/feedbacks")]
pub async fn feedbacks(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match feedback_service::list_feedbacks(repo.get_ref(), &user) {
        Ok(items) => {
            let rows: Vec<_> = items
                .iter()
                .map(|f| {
                    (
                        f.submit_date.format("%b %d, %Y %H:%M").to_string(),
                        f.content.clone(),
                    )
                })
                .collect();

            let mut context = base_context(&flash_messages, Some(&user), "feedbacks");
            context.insert("feedbacks", &rows);

            render_template(&tera, "feedback/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to list feedbacks: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
