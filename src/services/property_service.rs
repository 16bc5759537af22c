//! Property service orchestrating validation results, repository calls, and
//! entity-to-response mapping.

use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use std::sync::Arc;

use log::debug;

use crate::errors::ApiError;
use crate::models::{PaginatedResponse, PropertyFilter, PropertyResponse};
use crate::repositories::PropertyRepository;

pub struct PropertyService {
    repository: Arc<PropertyRepository>,
}

impl PropertyService {
    #[allow(dead_code)]
    pub fn new(db: &Database) -> Self {
        Self {
            repository: Arc::new(PropertyRepository::new(db)),
        }
    }

    /// Create a new PropertyService with a shared repository.
    pub fn with_repository(repository: Arc<PropertyRepository>) -> Self {
        Self { repository }
    }

    /// Fetch one page of properties matching a validated filter.
    ///
    /// A single storage round trip; the envelope metadata is derived from the
    /// total matching count and the requested page size.
    pub async fn get_properties(
        &self,
        filter: PropertyFilter,
    ) -> Result<PaginatedResponse<PropertyResponse>, ApiError> {
        let (total_count, properties) = self.repository.find_with_filter(&filter).await?;

        let items: Vec<PropertyResponse> =
            properties.into_iter().map(PropertyResponse::from).collect();

        Ok(PaginatedResponse::new(
            items,
            total_count,
            filter.page_number,
            filter.page_size,
        ))
    }

    /// Fetch a single property by its identifier.
    ///
    /// Absence is a normal outcome, never an error: an id that does not parse
    /// as an ObjectId cannot identify any document, so it is also `None`.
    pub async fn get_property_by_id(&self, id: &str) -> Result<Option<PropertyResponse>, ApiError> {
        debug!("Fetching property by ID: {}", id);

        let object_id = match ObjectId::parse_str(id) {
            Ok(object_id) => object_id,
            Err(_) => return Ok(None),
        };

        Ok(self
            .repository
            .find_by_id(object_id)
            .await?
            .map(PropertyResponse::from))
    }
}
