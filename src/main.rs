mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod seed;
mod services;
mod validators;

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::Governor;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::middleware::create_api_rate_limiter_config;
use crate::openapi::ApiDoc;
use crate::repositories::PropertyRepository;
use crate::seed::seed_properties;
use crate::services::PropertyService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    // Explicitly constructed, shared repository handle
    let repository = Arc::new(PropertyRepository::new(&db));

    // Indexes and seed data matter for latency and demo data, not
    // correctness; failures are logged and startup continues.
    if let Err(err) = repository.create_indexes().await {
        error!("Failed to create indexes: {}", err);
    }
    if let Err(err) = seed_properties(&repository).await {
        error!("Database seeding failed: {}", err);
    }

    let property_service = web::Data::new(PropertyService::with_repository(repository));

    let governor_config = create_api_rate_limiter_config();

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        let cors = CONFIG
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_header()
            .allow_any_method()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .wrap(Governor::new(&governor_config))
            .app_data(property_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
