use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::comment::AddCommentForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::comment as comment_service;

#[post("/house/{post_id}/comment")]
pub async fn comment_post(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCommentForm>,
) -> impl Responder {
    let post_id = post_id.into_inner();

    match comment_service::add_comment(repo.get_ref(), &user, post_id, &form) {
        Ok(()) => {
            FlashMessage::success("Comment added.").send();
            redirect(&format!("/house/{post_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            redirect("/search")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/house/{post_id}"))
        }
        Err(err) => {
            log::error!("Failed to add comment: {err}");
            FlashMessage::error("Failed to add the comment.").send();
            redirect(&format!("/house/{post_id}"))
        }
    }
}

#[get("/comments")]
pub async fn comments(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match comment_service::list_comments(repo.get_ref(), &user) {
        Ok(rows) => {
            let mut context = base_context(&flash_messages, Some(&user), "comments");
            context.insert("comments", &rows);

            render_template(&tera, "comments/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to list comments: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/comments/{comment_id}/delete")]
pub async fn delete_comment(
    comment_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match comment_service::delete_comment(repo.get_ref(), &user, comment_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Comment deleted.").send();
            redirect("/comments")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Not enough permissions.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to delete comment: {err}");
            FlashMessage::error("Failed to delete the comment.").send();
            redirect("/comments")
        }
    }
}
