mod config;
mod logging;
mod model;
mod web;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

use config::Settings;
use model::ModelManager;
use web::{handlers, routes};

// App state structure
struct AppState {
    model: Data<ModelManager>,
    project_name: String,
    max_upload_bytes: usize,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    let settings = Settings::from_env()?;
    logging::init(&settings)?;

    info!(
        "Starting {} API ({} environment)",
        settings.project_name, settings.environment
    );

    if settings.provider.is_configured() {
        info!(
            "External provider configured (deployment {}, api version {}) but not in use yet",
            settings.provider.deployment_name, settings.provider.api_version
        );
    } else {
        warn!("External provider not configured; serving keyword-based guidance");
    }

    let app_state = Data::new(AppState {
        model: Data::new(ModelManager::new()),
        project_name: settings.project_name.clone(),
        max_upload_bytes: settings.max_upload_bytes,
    });

    let bind_address = settings.bind_address();
    info!("Listening on {}:{}", bind_address.0, bind_address.1);

    let server_settings = settings.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors(&server_settings))
            .app_data(app_state.clone())
            .configure(|cfg| routes::configure(cfg, &server_settings.api_prefix))
            .default_service(actix_web::web::to(handlers::not_found))
    })
    .bind(bind_address)
    .map_err(|e| {
        error!("Failed to bind {}:{}: {}", settings.host, settings.port, e);
        e
    })?
    .run()
    .await?;

    Ok(())
}
