use actix_web::{HttpResponse, Responder, get, web};
use tera::Tera;

use crate::routes::{base_context, render_template};
use crate::services::ServiceError;

#[get("/")]
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    let context = base_context("index");
    render_template(&tera, "index.html", &context)
}

/// Always fails, so the 500 page (or the debug details) can be checked.
#[get("/error")]
pub async fn trigger_error() -> Result<HttpResponse, ServiceError> {
    Err(ServiceError::Internal("Oh no".to_string()))
}
