use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// One token every 100 ms (10 requests/second sustained), bursts of 30.
const REFILL_MILLIS: u64 = 100;
const BURST: u32 = 30;

fn limiter_config() -> Option<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(REFILL_MILLIS);
    builder.burst_size(BURST);
    builder.key_extractor(SmartIpKeyExtractor).finish()
}

/// Per-client-IP limiter for the public API.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<RateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let config = limiter_config();
            if config.is_none() {
                tracing::warn!("invalid rate limit configuration, limiter disabled");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
