use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::search::SearchFilters;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::search as search_service;
use crate::services::stats;

/// The search page. The URL query string IS the filter state: the filter
/// form GET-submits here, so every change rewrites the URL and re-fetches in
/// one step, and any filter combination is a valid deep link.
#[get("/search")]
pub async fn show_search(
    params: web::Query<SearchFilters>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    stats::record_page_view(repo.get_ref());

    match search_service::load_search_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, user.as_ref(), "search");
            // Raw echoes for the panel controls; the serialized `filters`
            // omits empty fields and templates need stable keys.
            context.insert("location_value", &data.filters.location);
            context.insert("selected_price", &data.filters.price_range);
            context.insert("query_string", &data.query_string);
            context.insert("categories", &data.categories);
            context.insert("price_ranges", &data.price_ranges);
            // -1 stands for "no selection" so the template compares numbers
            // against numbers.
            context.insert("selected_category", &data.selected_category.unwrap_or(-1));
            context.insert("selected_bedroom", &data.selected_bedroom.unwrap_or(-1));
            context.insert("listings", &data.listings);
            context.insert("total", &data.total);
            context.insert("fetch_failed", &data.fetch_failed);

            render_template(&tera, "search/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load search page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
