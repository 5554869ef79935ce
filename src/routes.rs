use crate::{
    api::{analyze_query, index},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Result, anyhow};

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter shared by every worker.
pub fn limiter_config(requests_per_min: u32) -> Result<LimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &LimiterConfig) {
    // Chat page
    cfg.service(index::index);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(limiter)) // rate limiting
            .service(
                // /analyze-query
                web::resource("/analyze-query")
                    .app_data(
                        web::JsonConfig::default()
                            .error_handler(analyze_query::json_error_handler),
                    )
                    .route(web::post().to(analyze_query::analyze_query))
                    .default_service(web::to(analyze_query::method_not_allowed)),
            ),
    );
}
