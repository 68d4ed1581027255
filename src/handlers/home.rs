// src/handlers/home.rs
// DOCUMENTATION: Landing page handler
// PURPOSE: Serve the static API overview at the root path

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
}
