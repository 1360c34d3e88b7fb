use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::ApiPostsQuery;
use crate::repository::DieselRepository;
use crate::services::api as api_service;

/// `GET /api/v1/posts?categoryId=&priceRange=&location=&bedroom=&userId=`
#[get("/v1/posts")]
pub async fn api_v1_posts(
    params: web::Query<ApiPostsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_posts(repo.get_ref(), &params) {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => {
            log::error!("Failed to list posts: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/categories")]
pub async fn api_v1_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match api_service::list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => {
            log::error!("Failed to list categories: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
