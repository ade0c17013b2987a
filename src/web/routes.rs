use actix_cors::Cors;
use actix_web::web;

use crate::config::Settings;
use crate::web::errors::ApiError;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid request body: {err}")).into()
    }))
    .service(
        web::scope(api_prefix)
            .route("/chat", web::post().to(handlers::chat))
            .route("/upload", web::post().to(handlers::upload)),
    )
    .route("/", web::get().to(handlers::index))
    .route("/health", web::get().to(handlers::health_check));
}

pub fn cors(settings: &Settings) -> Cors {
    settings
        .cors_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
