use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::links::RequestUrl;
use crate::models::config::ServerConfig;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, render_template};
use crate::services::users as users_service;

#[get("/users")]
/// Searchable, sortable, paginated user table.
pub async fn show_users(
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let url = RequestUrl::parse(req.path(), req.query_string());

    match users_service::load_users_page(repo.get_ref(), &url, server_config.page_size) {
        Ok(data) => {
            let mut context = base_context("users");
            context.insert("users", &data.users);
            context.insert("search_term", &data.search_term);
            context.insert("column_controls", &data.column_controls);
            context.insert("page_controls", &data.page_controls);
            context.insert("pagination", &data.pagination);

            render_template(&tera, "users/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load users page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
