use crate::{api::salary, error::json_error_handler};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::{Result, anyhow};

pub type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter allowing `requests_per_min` with an equal burst.
pub fn build_limiter(requests_per_min: u32) -> Result<LimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        60_000 / requests_per_min as u64
    };

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} per minute"))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn configure(cfg: &mut web::ServiceConfig, limiter: &LimiterConfig) {
    cfg.service(crate::api::health::index)
        .service(crate::api::health::health)
        .service(
            web::scope("/salary")
                .wrap(Governor::new(limiter))
                // /salary/calculate
                .service(web::resource("/calculate").route(web::post().to(salary::calculate_salary)))
                // /salary/schemes
                .service(web::resource("/schemes").route(web::get().to(salary::list_schemes))),
        );
}
