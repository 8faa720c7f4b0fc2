//! Request middleware.

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse, web};

use crate::models::config::ServerConfig;

/// Rejects requests whose `Host` is not listed in `allowed_hosts`.
///
/// Requests pass through untouched when no [`ServerConfig`] is registered.
pub async fn check_allowed_host<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let host = req.connection_info().host().to_owned();
    let allowed = req
        .app_data::<web::Data<ServerConfig>>()
        .is_none_or(|config| config.is_allowed_host(&host));

    if !allowed {
        log::warn!("Rejected request for disallowed host {host}");
        let response = HttpResponse::BadRequest().body("Invalid host header");
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
