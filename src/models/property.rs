use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Property document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Property {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub id_owner: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub image_url: String,
    pub created_at: mongodb::bson::DateTime,
}
