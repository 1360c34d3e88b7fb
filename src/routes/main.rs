use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;
use crate::services::search::ListingFeed;
use crate::services::stats;

#[get("/")]
pub async fn show_index(
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    feed: web::Data<ListingFeed>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    stats::record_page_view(repo.get_ref());

    let data = main_service::load_index_page(repo.get_ref(), feed.get_ref());

    let mut context = base_context(&flash_messages, user.as_ref(), "index");
    context.insert("featured", &data.featured);
    context.insert("total_views", &data.total_views);

    render_template(&tera, "main/index.html", &context)
}
