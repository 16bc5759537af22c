//! Rate limiting middleware for the public API.

use actix_governor::{GovernorConfig, GovernorConfigBuilder};

/// Create rate limiter configuration for the API scope.
///
/// Allows a burst of 100 requests with 1 request replenished every 600ms
/// (100 per minute per client IP).
///
/// Usage:
/// ```ignore
/// let config = create_api_rate_limiter_config();
/// App::new().wrap(Governor::new(&config))
/// ```
pub fn create_api_rate_limiter_config() -> GovernorConfig<
    actix_governor::PeerIpKeyExtractor,
    actix_governor::governor::middleware::NoOpMiddleware<
        actix_governor::governor::clock::QuantaInstant,
    >,
> {
    GovernorConfigBuilder::default()
        .milliseconds_per_request(600) // Replenish 1 request every 600ms = 100 per minute
        .burst_size(100)
        .finish()
        .expect("Failed to create API rate limiter config")
}
