use actix_web::{web, HttpResponse};

use crate::handlers;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Health check
            .route("/health", web::get().to(health_check))
            // Property routes (read-only)
            .service(
                web::scope("/properties")
                    // List properties with pagination and filters
                    .route("", web::get().to(handlers::get_properties))
                    // Get specific property by ID
                    .route("/{id}", web::get().to(handlers::get_property)),
            ),
    );
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}
