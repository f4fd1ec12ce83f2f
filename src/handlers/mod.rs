pub mod pages;

use std::path::PathBuf;

use actix_files::Files;
use actix_web::body::MessageBody;
use actix_web::http::StatusCode;
use actix_web::middleware::{DefaultHeaders, ErrorHandlers};
use actix_web::web;

use crate::config::Config;

/// Registers the page routes, static mounts and 404 fallback. Shared by the
/// server binary and the route tests.
pub fn routes(cfg: &mut web::ServiceConfig, config: &Config) {
    let root = PathBuf::from(&config.content_root);
    cfg.app_data(web::Data::new(config.clone()))
        .route("/", web::get().to(pages::index))
        .route("/join", web::get().to(pages::join))
        .route("/ranks", web::get().to(pages::ranks))
        .route("/vote", web::get().to(pages::vote))
        .route("/discord", web::get().to(pages::discord))
        .service(Files::new("/assets", root.join("assets")))
        .service(Files::new("/", root))
        .default_service(web::route().to(pages::not_found));
}

/// Uniform security headers on every response.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("X-XSS-Protection", "1; mode=block"))
}

/// Fixed 404/500 HTML bodies, applied to whatever produced the status.
pub fn error_pages<B: MessageBody + 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::NOT_FOUND, pages::not_found_body)
        .handler(StatusCode::INTERNAL_SERVER_ERROR, pages::server_error_body)
}
