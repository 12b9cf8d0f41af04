mod api;
mod domain;
mod repo;
mod service;
mod views;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use common::config::AppConfig;
use repo::{GuestStore, PgGuestStore};
use service::RsvpService;
use views::ViewRenderer;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    common::logging::init(&config.log_level)?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let renderer = ViewRenderer::from_dir(&config.template_dir)
        .with_context(|| format!("failed to load templates from {}", config.template_dir))?;

    // Initialize layers
    let store: Arc<dyn GuestStore> = Arc::new(PgGuestStore::new(pool));
    let rsvp_service = web::Data::new(RsvpService::new(store));
    let renderer = web::Data::new(renderer);

    let server_address = config.server_address();
    tracing::info!("{} starting on http://{}", config.service_name, server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(api::request_logger())
            .app_data(rsvp_service.clone())
            .app_data(renderer.clone())
            .configure(api::routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await?;

    Ok(())
}
