use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{api_v1_categories, api_v1_posts};
use crate::routes::auth::{login, logout, show_login, show_signup, signup};
use crate::routes::comment::{comment_post, comments, delete_comment};
use crate::routes::feedback::{feedbacks, show_feedback_form, submit_feedback};
use crate::routes::main::show_index;
use crate::routes::post::{
    add_post, compose_post, delete_post, edit_post, my_listings, save_post, show_post,
    toggle_post_rented,
};
use crate::routes::search::show_search;
use crate::services::search::ListingFeed;

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role that unlocks the moderation pages.
pub const ADMIN_ROLE: &str = "admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish the Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Shared snapshot backing the landing page's featured listings.
    let feed = web::Data::new(ListingFeed::new());

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .service(Files::new("/upload", &server_config.upload_dir))
            .service(
                web::scope("/api")
                    .service(api_v1_posts)
                    .service(api_v1_categories),
            )
            .service(show_index)
            .service(show_search)
            .service(show_post)
            .service(show_login)
            .service(login)
            .service(show_signup)
            .service(signup)
            .service(show_feedback_form)
            .service(submit_feedback)
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(my_listings)
                    .service(compose_post)
                    .service(add_post)
                    .service(edit_post)
                    .service(save_post)
                    .service(toggle_post_rented)
                    .service(delete_post)
                    .service(comment_post)
                    .service(comments)
                    .service(delete_comment)
                    .service(feedbacks)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(feed.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
