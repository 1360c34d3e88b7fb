use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::post::{AddPostForm, UpdatePostForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::post as post_service;
use crate::services::stats;
use crate::services::ServiceError;

#[get("/house/{post_id}")]
pub async fn show_post(
    post_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    stats::record_page_view(repo.get_ref());

    match post_service::load_post_page(repo.get_ref(), post_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "search");
            context.insert("post", &data.post);
            context.insert("category", &data.category);
            context.insert("owner_name", &data.owner_name);
            context.insert("owner_phone", &data.owner_phone);
            context.insert("uploaded", &data.uploaded);
            context.insert("comments", &data.comments);

            render_template(&tera, "post/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            redirect("/search")
        }
        Err(err) => {
            log::error!("Failed to load listing: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/add-listing")]
pub async fn compose_post(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match post_service::load_compose_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "add-listing");
            context.insert("categories", &data.categories);

            render_template(&tera, "post/new.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load listing form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/add-listing")]
pub async fn add_post(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<AddPostForm>,
) -> impl Responder {
    match post_service::create_listing(repo.get_ref(), &user, &form, &server_config.upload_dir) {
        Ok(_) => {
            FlashMessage::success("Listing published.").send();
            redirect("/listings")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/add-listing")
        }
        Err(err) => {
            log::error!("Failed to create listing: {err}");
            FlashMessage::error("Failed to create the listing.").send();
            redirect("/add-listing")
        }
    }
}

#[get("/house/{post_id}/edit")]
pub async fn edit_post(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match post_service::load_edit_page(repo.get_ref(), &user, post_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "listings");
            context.insert("categories", &data.categories);
            context.insert("post", &data.post);

            render_template(&tera, "post/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            redirect("/listings")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This listing is not yours to edit.").send();
            redirect("/listings")
        }
        Err(err) => {
            log::error!("Failed to load listing: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/house/{post_id}/edit")]
pub async fn save_post(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdatePostForm>,
) -> impl Responder {
    let post_id = post_id.into_inner();

    match post_service::update_listing(repo.get_ref(), &user, post_id, &form) {
        Ok(()) => {
            FlashMessage::success("Listing updated.").send();
            redirect(&format!("/house/{post_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Listing not found.").send();
            redirect("/listings")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This listing is not yours to edit.").send();
            redirect("/listings")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/house/{post_id}/edit"))
        }
        Err(err) => {
            log::error!("Failed to update listing: {err}");
            FlashMessage::error("Failed to update the listing.").send();
            redirect(&format!("/house/{post_id}/edit"))
        }
    }
}

#[post("/house/{post_id}/rented")]
pub async fn toggle_post_rented(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match post_service::toggle_rented(repo.get_ref(), &user, post_id.into_inner()) {
        Ok(post) => {
            let status = if post.is_rented { "rented" } else { "available" };
            FlashMessage::success(format!("Listing marked as {status}.")).send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This listing is not yours to manage.").send();
        }
        Err(err) => {
            log::error!("Failed to update listing status: {err}");
            FlashMessage::error("Failed to update the listing status.").send();
        }
    }

    redirect("/listings")
}

#[post("/house/{post_id}/delete")]
pub async fn delete_post(
    post_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match post_service::delete_listing(repo.get_ref(), &user, post_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Listing deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("This listing is not yours to delete.").send();
        }
        Err(err) => {
            log::error!("Failed to delete listing: {err}");
            FlashMessage::error("Failed to delete the listing.").send();
        }
    }

    redirect("/listings")
}

#[get("/listings")]
pub async fn my_listings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match post_service::load_my_listings(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, Some(&user), "listings");
            context.insert("listings", &data.listings);

            render_template(&tera, "post/my.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load listings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
