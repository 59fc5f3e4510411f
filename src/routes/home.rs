//! src/routes/home.rs
use crate::startup::LandingPage;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

/// Serves the pre-rendered landing document loaded at startup.
pub async fn home(page: web::Data<LandingPage>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page.0.clone())
}
