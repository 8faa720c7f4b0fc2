//! Searchable, sortable, paginated user listing.
//!
//! The `data` feature exposes the listing engine on its own: the user
//! collection, query interpretation, and the column/page control builders.
//! The `server` feature adds the Actix-web application around it.

#[cfg(feature = "data")]
pub mod columns;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod links;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::middleware::{self, from_fn};
    use actix_web::{App, HttpServer, web};
    use tera::Tera;

    use crate::middleware::check_allowed_host;
    use crate::models::config::ServerConfig;
    use crate::repository::InMemoryRepository;
    use crate::routes::{configure, error_pages, not_found};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = match &server_config.users_file {
            Some(path) => InMemoryRepository::from_json_file(path),
            None => InMemoryRepository::fixture(),
        }
        .map_err(|e| std::io::Error::other(format!("Failed to load users: {e}")))?;

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!(
            "Listening on {}:{} (debug: {})",
            bind_address.0,
            bind_address.1,
            server_config.debug
        );

        HttpServer::new(move || {
            App::new()
                .wrap(error_pages())
                .wrap(from_fn(check_allowed_host))
                .wrap(middleware::NormalizePath::trim())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/static", &server_config.static_dir))
                .configure(configure)
                .default_service(web::to(not_found))
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
