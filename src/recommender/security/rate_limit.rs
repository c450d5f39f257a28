use crate::AppState;
use crate::config::ResilienceConfig;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Global (not per-client) token bucket shared by every request.
pub type AppRateLimiter = DefaultDirectRateLimiter;

/// Builds the limiter described by `config`, or `None` when rate limiting is
/// disabled. A zero rate disables limiting; a zero burst falls back to one.
pub fn build_rate_limiter(config: &ResilienceConfig) -> Option<Arc<AppRateLimiter>> {
    if !config.rate_limit_enabled {
        return None;
    }
    let rate = NonZeroU32::new(config.requests_per_second)?;
    let burst = NonZeroU32::new(config.burst_size).unwrap_or(nonzero!(1u32));

    Some(Arc::new(RateLimiter::direct(
        Quota::per_second(rate).allow_burst(burst),
    )))
}

/// Rejects requests with `429` once the bucket is empty.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(limiter) = &state.rate_limiter {
        if limiter.check().is_err() {
            tracing::warn!(path = %req.uri().path(), "Rate limit exceeded");
            return Err(StatusCode::TOO_MANY_REQUESTS);
        }
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resilience(enabled: bool, rps: u32, burst: u32) -> ResilienceConfig {
        ResilienceConfig {
            rate_limit_enabled: enabled,
            requests_per_second: rps,
            burst_size: burst,
            timeout_secs: 30,
            timeout_disabled: false,
        }
    }

    #[test]
    fn test_disabled_builds_nothing() {
        assert!(build_rate_limiter(&resilience(false, 5, 5)).is_none());
        assert!(build_rate_limiter(&resilience(true, 0, 5)).is_none());
    }

    #[test]
    fn test_burst_then_reject() {
        let limiter = build_rate_limiter(&resilience(true, 1, 3)).unwrap();

        // Consume all burst
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());

        // Next should fail (immediate)
        assert!(limiter.check().is_err());
    }

    #[test]
    fn test_zero_burst_allows_one() {
        let limiter = build_rate_limiter(&resilience(true, 1, 0)).unwrap();
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
