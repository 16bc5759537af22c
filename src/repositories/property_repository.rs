//! Property repository for all MongoDB operations related to listings.
//!
//! This repository encapsulates all database access logic for the properties
//! collection, providing a clean interface for the service layer.

use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document, Regex};
use mongodb::{Collection, Database, IndexModel};

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{Property, PropertyFilter};

/// Repository for property-related database operations.
///
/// Holds a typed handle to the properties collection. The handle is cheap to
/// clone and safe to share across concurrent requests; the driver manages the
/// underlying connection pool.
pub struct PropertyRepository {
    collection: Collection<Property>,
}

impl PropertyRepository {
    /// Create a new PropertyRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(&CONFIG.collection_name),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// This method should be called once during application startup. The
    /// indexes matter for latency at scale, not for correctness:
    /// - Text index over `name` and `address` for substring searches
    /// - Ascending index on `price` for range filters
    /// - Ascending index on `id_owner`
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for properties collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "name": "text", "address": "text" })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .name("TextSearchIndex".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .name("PriceIndex".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "id_owner": 1 })
                .options(
                    mongodb::options::IndexOptions::builder()
                        .name("OwnerIndex".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }

    /// Find a property by its ObjectId.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Property>, ApiError> {
        debug!("Repository: Finding property by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Find properties matching a validated filter, newest first.
    ///
    /// Returns the total matching count (across all pages) together with one
    /// page of items. The count is taken before skip/limit are applied, so a
    /// page number past the end yields an empty page with the true total.
    pub async fn find_with_filter(
        &self,
        filter: &PropertyFilter,
    ) -> Result<(u64, Vec<Property>), ApiError> {
        let filter_doc = build_filter_document(filter);
        debug!("Repository: Finding properties with filter: {:?}", filter_doc);

        let total_count = self.collection.count_documents(filter_doc.clone()).await?;

        let cursor = self
            .collection
            .find(filter_doc)
            .sort(sort_document())
            .skip(skip_for_page(filter.page_number, filter.page_size))
            .limit(filter.page_size as i64)
            .await?;

        Ok((total_count, cursor.try_collect().await?))
    }

    /// Count documents matching a filter.
    pub async fn count(&self, filter: Document) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(filter).await?)
    }

    /// Insert a batch of properties (used by the startup seeder).
    pub async fn insert_many(&self, properties: &[Property]) -> Result<(), ApiError> {
        self.collection.insert_many(properties).await?;
        Ok(())
    }
}

/// Build the conjunctive MongoDB filter document for a validated filter.
///
/// Every supplied predicate must hold; absent predicates are omitted, so an
/// empty filter matches everything. Text filters are case-insensitive
/// substring matches with regex metacharacters escaped.
pub fn build_filter_document(filter: &PropertyFilter) -> Document {
    let mut document = doc! {};

    if let Some(name) = &filter.name {
        document.insert("name", doc! { "$regex": substring_regex(name) });
    }

    if let Some(address) = &filter.address {
        document.insert("address", doc! { "$regex": substring_regex(address) });
    }

    let mut price = doc! {};
    if let Some(min_price) = filter.min_price {
        price.insert("$gte", min_price);
    }
    if let Some(max_price) = filter.max_price {
        price.insert("$lte", max_price);
    }
    if !price.is_empty() {
        document.insert("price", price);
    }

    document
}

/// Sort specification for property listings: newest first, ties broken by
/// insertion order.
pub fn sort_document() -> Document {
    doc! { "created_at": -1, "_id": 1 }
}

/// Number of documents to skip for a 1-based page number.
///
/// Saturates instead of overflowing: an astronomically large page number
/// skips the entire collection and yields an empty page, the same outcome as
/// any other page past the end.
pub fn skip_for_page(page_number: u64, page_size: u64) -> u64 {
    page_number.saturating_sub(1).saturating_mul(page_size)
}

fn substring_regex(text: &str) -> Regex {
    Regex {
        pattern: regex::escape(text),
        options: "i".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::Bson;

    use super::*;

    fn filter_with(
        name: Option<&str>,
        address: Option<&str>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> PropertyFilter {
        PropertyFilter {
            name: name.map(str::to_string),
            address: address.map(str::to_string),
            min_price,
            max_price,
            page_number: 1,
            page_size: 20,
        }
    }

    fn regex_at(document: &Document, field: &str) -> Regex {
        match document.get_document(field).unwrap().get("$regex") {
            Some(Bson::RegularExpression(regex)) => regex.clone(),
            other => panic!("expected regex for {}, got {:?}", field, other),
        }
    }

    #[test]
    fn test_absent_predicates_match_everything() {
        let document = build_filter_document(&filter_with(None, None, None, None));
        assert!(document.is_empty());
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let document = build_filter_document(&filter_with(Some("lake"), None, None, None));

        let regex = regex_at(&document, "name");
        assert_eq!(regex.pattern, "lake");
        assert_eq!(regex.options, "i");
        assert!(document.get("address").is_none());
        assert!(document.get("price").is_none());
    }

    #[test]
    fn test_regex_metacharacters_escaped() {
        let document = build_filter_document(&filter_with(Some("Lake (view)"), None, None, None));
        assert_eq!(regex_at(&document, "name").pattern, r"Lake \(view\)");
    }

    #[test]
    fn test_name_and_address_are_independent_conjuncts() {
        let document =
            build_filter_document(&filter_with(Some("lake"), Some("springfield"), None, None));

        // Both predicates present as separate AND-ed fields, not an $or
        assert_eq!(regex_at(&document, "name").pattern, "lake");
        assert_eq!(regex_at(&document, "address").pattern, "springfield");
        assert!(document.get("$or").is_none());
    }

    #[test]
    fn test_min_price_only() {
        let document = build_filter_document(&filter_with(None, None, Some(200000.0), None));
        let price = document.get_document("price").unwrap();

        assert_eq!(price.get_f64("$gte").unwrap(), 200000.0);
        assert!(price.get("$lte").is_none());
    }

    #[test]
    fn test_price_bounds_merge_into_single_range() {
        let document =
            build_filter_document(&filter_with(None, None, Some(100000.0), Some(500000.0)));
        let price = document.get_document("price").unwrap();

        assert_eq!(price.get_f64("$gte").unwrap(), 100000.0);
        assert_eq!(price.get_f64("$lte").unwrap(), 500000.0);
    }

    #[test]
    fn test_sort_is_newest_first_with_insertion_order_ties() {
        let sort = sort_document();

        assert_eq!(sort.get_i32("created_at").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), 1);
        // created_at must be the primary sort key
        assert_eq!(
            sort.iter().next().map(|(key, _)| key.as_str()),
            Some("created_at")
        );
    }

    #[test]
    fn test_skip_is_zero_based_page_offset() {
        assert_eq!(skip_for_page(1, 20), 0);
        assert_eq!(skip_for_page(2, 20), 20);
        assert_eq!(skip_for_page(5, 100), 400);
    }

    #[test]
    fn test_skip_saturates_for_huge_page_numbers() {
        // Must not overflow; skipping everything yields the empty page the
        // contract requires for pages past the end.
        assert_eq!(skip_for_page(u64::MAX, 20), u64::MAX);
        assert_eq!(skip_for_page(u64::MAX, 100), u64::MAX);
    }

    #[test]
    fn test_all_predicates_compose() {
        let document = build_filter_document(&filter_with(
            Some("loft"),
            Some("main st"),
            Some(100000.0),
            Some(500000.0),
        ));

        assert_eq!(document.len(), 3);
        assert!(document.get("name").is_some());
        assert!(document.get("address").is_some());
        assert!(document.get("price").is_some());
    }
}
