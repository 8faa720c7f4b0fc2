//! HTTP handlers and the helpers they share.

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, ResponseError, web};
use tera::{Context, Tera};

use crate::models::config::ServerConfig;
use crate::services::ServiceError;

pub mod main;
pub mod users;

/// Registers every page handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::show_index)
        .service(main::trigger_error)
        .service(users::show_users);
}

/// Context shared by every page; `current_page` drives nav highlighting.
pub fn base_context(current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Default handler for unknown paths; the body comes from [`error_pages`].
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Replaces bare 404 and 500 responses with the styled error pages.
pub fn error_pages<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new()
        .handler(StatusCode::NOT_FOUND, render_not_found)
        .handler(StatusCode::INTERNAL_SERVER_ERROR, render_server_error)
}

fn render_not_found<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    render_error_page(res, "errors/404.html")
}

fn render_server_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if let Some(err) = res.response().error() {
        log::error!("{} {} failed: {err}", res.request().method(), res.request().path());
    }
    render_error_page(res, "errors/500.html")
}

fn render_error_page<B>(
    res: ServiceResponse<B>,
    template: &str,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let request = res.request();
    let Some(tera) = request.app_data::<web::Data<Tera>>().cloned() else {
        log::error!("No template engine registered to render '{template}'");
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let mut context = base_context("error");
    let debug = request
        .app_data::<web::Data<ServerConfig>>()
        .is_some_and(|config| config.debug);
    if debug {
        if let Some(err) = res.response().error() {
            context.insert("error_detail", &err.to_string());
        }
    }

    let body = match tera.render(template, &context) {
        Ok(body) => body,
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
        }
    };

    let status = res.status();
    let (req, _) = res.into_parts();
    let response = HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body);

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
