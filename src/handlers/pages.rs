// src/handlers/pages.rs
use std::path::Path;

use actix_files::NamedFile;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderValue, CONTENT_TYPE};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{web, HttpResponse};

use crate::config::Config;

pub const NOT_FOUND_BODY: &str =
    "<h1>404 Not Found</h1><p>Sorry, the page you are looking for does not exist.</p>";
pub const SERVER_ERROR_BODY: &str =
    "<h1>500 Internal Server Error</h1><p>Something went wrong on our server. Please try again later.</p>";

async fn page(config: &Config, file: &str) -> actix_web::Result<NamedFile> {
    let path = Path::new(&config.content_root).join(file);
    Ok(NamedFile::open_async(path).await?)
}

pub async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    page(&config, "index.html").await
}

pub async fn join(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    page(&config, "join.html").await
}

pub async fn ranks(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    page(&config, "ranks.html").await
}

pub async fn vote(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    page(&config, "vote.html").await
}

pub async fn discord(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    page(&config, "discord.html").await
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_BODY)
}

pub fn not_found_body<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    Ok(replace_body(res, NOT_FOUND_BODY))
}

pub fn server_error_body<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    Ok(replace_body(res, SERVER_ERROR_BODY))
}

fn replace_body<B>(res: ServiceResponse<B>, body: &'static str) -> ErrorHandlerResponse<B> {
    let (req, res) = res.into_parts();
    let mut res = res.set_body(body);
    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    ErrorHandlerResponse::Response(
        ServiceResponse::new(req, res)
            .map_into_boxed_body()
            .map_into_right_body(),
    )
}
