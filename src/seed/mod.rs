//! Startup seeding for the properties collection.
//!
//! Populates an empty collection with generated sample listings so the web
//! client has data to browse on a fresh database. A collection that already
//! holds documents is left untouched.

use chrono::{Duration, Utc};
use log::info;
use mongodb::bson::doc;
use rand::Rng;

use crate::errors::ApiError;
use crate::models::Property;
use crate::repositories::PropertyRepository;

/// Number of sample properties inserted into an empty collection.
const SEED_COUNT: usize = 50;

const OWNER_IDS: [&str; 3] = ["owner-123", "owner-456", "owner-789"];

const CITIES: [&str; 10] = [
    "Riverton",
    "Lakewood",
    "Fairview",
    "Brookside",
    "Maplewood",
    "Ashford",
    "Clearwater",
    "Stonehaven",
    "Willowbrook",
    "Eastgate",
];

const NAME_SUFFIXES: [&str; 5] = ["Heights", "Residences", "Villas", "Gardens", "Court"];

const STREETS: [&str; 8] = [
    "Elm Street",
    "Oak Avenue",
    "Cedar Lane",
    "Birch Road",
    "Harbor Drive",
    "Sunset Boulevard",
    "Meadow Way",
    "Hillcrest Terrace",
];

/// Seed the properties collection when it is empty.
pub async fn seed_properties(repository: &PropertyRepository) -> Result<(), ApiError> {
    if repository.count(doc! {}).await? > 0 {
        info!("Properties collection already has data, skipping seeding");
        return Ok(());
    }

    info!("Seeding properties collection with {} listings...", SEED_COUNT);

    let mut rng = rand::rng();
    let now = Utc::now();

    let properties: Vec<Property> = (0..SEED_COUNT)
        .map(|i| {
            let city = CITIES[rng.random_range(0..CITIES.len())];
            let suffix = NAME_SUFFIXES[rng.random_range(0..NAME_SUFFIXES.len())];
            let street = STREETS[rng.random_range(0..STREETS.len())];

            let price = (rng.random_range(150_000.0..2_000_000.0_f64) * 100.0).round() / 100.0;
            // Spread creation dates over the past two years
            let created_at = now
                - Duration::days(rng.random_range(0..730))
                - Duration::minutes(rng.random_range(0..1440));

            Property {
                id: None,
                id_owner: OWNER_IDS[rng.random_range(0..OWNER_IDS.len())].to_string(),
                name: format!("{} {}", city, suffix),
                address: format!("{} {}, {}", rng.random_range(1..999), street, city),
                price,
                image_url: format!("https://picsum.photos/seed/{}/640/480", i),
                created_at: mongodb::bson::DateTime::from_millis(created_at.timestamp_millis()),
            }
        })
        .collect();

    repository.insert_many(&properties).await?;
    info!("Seeding completed successfully");
    Ok(())
}
