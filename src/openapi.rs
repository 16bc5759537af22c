use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::{HealthResponse, PaginatedResponse, PropertyResponse};

/// OpenAPI documentation for the Real Estate API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Real Estate API",
        version = "1.0.0",
        description = "A read-only REST API exposing a paginated, filterable catalog of real-estate listings."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
        (url = "http://0.0.0.0:8080", description = "Docker development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Properties", description = "Property catalog endpoints (list with filters, fetch by id)")
    ),
    paths(
        crate::handlers::get_properties,
        crate::handlers::get_property,
        crate::routes::health_check
    ),
    components(
        schemas(
            PropertyResponse,
            PaginatedResponse<PropertyResponse>,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
