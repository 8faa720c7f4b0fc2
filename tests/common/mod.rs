#![allow(dead_code, unused_macros)]

use tera::Tera;
use user_listing::models::config::ServerConfig;
use user_listing::pagination::DEFAULT_ITEMS_PER_PAGE;
use user_listing::repository::InMemoryRepository;

pub fn server_config(debug: bool) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8000,
        templates_dir: "templates/**/*".to_string(),
        static_dir: "./static".to_string(),
        debug,
        allowed_hosts: vec!["127.0.0.1".to_string(), "localhost".to_string()],
        page_size: DEFAULT_ITEMS_PER_PAGE,
        users_file: None,
    }
}

pub fn tera() -> Tera {
    Tera::new("templates/**/*").expect("templates parse")
}

pub fn repository() -> InMemoryRepository {
    InMemoryRepository::fixture().expect("fixture is valid")
}

/// Initializes the application the same way `run` wires it, minus static files.
macro_rules! init_app {
    ($config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(user_listing::routes::error_pages())
                .wrap(actix_web::middleware::from_fn(
                    user_listing::middleware::check_allowed_host,
                ))
                .configure(user_listing::routes::configure)
                .default_service(actix_web::web::to(user_listing::routes::not_found))
                .app_data(actix_web::web::Data::new(common::tera()))
                .app_data(actix_web::web::Data::new(common::repository()))
                .app_data(actix_web::web::Data::new($config)),
        )
        .await
    };
}
