//! Property handlers for the read-only listing endpoints.

use actix_web::{web, HttpResponse};
use log::{debug, warn};

use crate::constants::ERR_PROPERTY_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::PropertyFilterQuery;
use crate::services::PropertyService;
use crate::validators::validate_filter;

/// List properties with pagination and optional filters
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    tag = "Properties",
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive substring match on the property name"),
        ("address" = Option<String>, Query, description = "Case-insensitive substring match on the property address"),
        ("minPrice" = Option<f64>, Query, description = "Minimum price (inclusive)"),
        ("maxPrice" = Option<f64>, Query, description = "Maximum price (inclusive)"),
        ("pageNumber" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("pageSize" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "One page of properties", body = crate::models::PaginatedResponse<crate::models::PropertyResponse>),
        (status = 400, description = "Invalid filter parameters", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_properties(
    property_service: web::Data<PropertyService>,
    query: web::Query<PropertyFilterQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = validate_filter(&query)?;
    debug!("Listing properties with filter: {:?}", filter);

    let result = property_service.get_properties(filter).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Get a specific property by ID
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    params(
        ("id" = String, Path, description = "Property ID (ObjectId hex string)")
    ),
    responses(
        (status = 200, description = "Property found", body = crate::models::PropertyResponse),
        (status = 404, description = "Property not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_property(
    property_service: web::Data<PropertyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let property_id = path.into_inner();
    debug!("Fetching property with id: {}", property_id);

    let property = property_service
        .get_property_by_id(&property_id)
        .await?
        .ok_or_else(|| {
            warn!("Property not found with id: {}", property_id);
            ApiError::NotFound(ERR_PROPERTY_NOT_FOUND.to_string())
        })?;

    Ok(HttpResponse::Ok().json(property))
}
