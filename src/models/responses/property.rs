//! Property response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Property;

/// Property data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    /// Property's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// Identifier of the property's owner
    #[schema(example = "owner-123")]
    pub id_owner: String,
    /// Display name of the property
    #[schema(example = "Lake House")]
    pub name: String,
    /// Full address of the property
    #[schema(example = "742 Evergreen Terrace, Springfield")]
    pub address: String,
    /// Listing price
    #[schema(example = 350000.0)]
    pub price: f64,
    /// URL of the property's display image
    #[schema(example = "https://picsum.photos/seed/1/640/480")]
    pub image_url: String,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id.map(|id| id.to_hex()).unwrap_or_default(),
            id_owner: property.id_owner,
            name: property.name,
            address: property.address,
            price: property.price,
            image_url: property.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    fn sample_property(id: Option<ObjectId>) -> Property {
        Property {
            id,
            id_owner: "owner-456".to_string(),
            name: "City Loft".to_string(),
            address: "12 Main St, Metropolis".to_string(),
            price: 300000.0,
            image_url: "https://picsum.photos/seed/2/640/480".to_string(),
            created_at: mongodb::bson::DateTime::now(),
        }
    }

    #[test]
    fn test_from_property_copies_all_fields() {
        let object_id = ObjectId::new();
        let response = PropertyResponse::from(sample_property(Some(object_id)));

        assert_eq!(response.id, object_id.to_hex());
        assert_eq!(response.id_owner, "owner-456");
        assert_eq!(response.name, "City Loft");
        assert_eq!(response.address, "12 Main St, Metropolis");
        assert_eq!(response.price, 300000.0);
        assert_eq!(response.image_url, "https://picsum.photos/seed/2/640/480");
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let response = PropertyResponse::from(sample_property(Some(ObjectId::new())));
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("id").is_some());
        assert!(json.get("idOwner").is_some());
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("id_owner").is_none());
    }
}
