//! Network retry policy for provider calls.

use std::time::Duration;

use rand::Rng;
use reqwest::{StatusCode, header::HeaderMap};

const SHOULD_RETRY_HEADER: &str = "stripe-should-retry";

/// Whether a completed response is worth another attempt.
///
/// An explicit `Stripe-Should-Retry` header wins; otherwise conflicts,
/// rate limiting and server errors are retried.
pub(crate) fn should_retry(status: StatusCode, headers: &HeaderMap) -> bool {
    match headers
        .get(SHOULD_RETRY_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        Some("true") => return true,
        Some("false") => return false,
        _ => {}
    }

    status == StatusCode::CONFLICT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
}

/// Whether a transport failure is worth another attempt.
pub(crate) fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

/// Exponential backoff with jitter, capped at `max`.
///
/// `attempt` counts completed retries, starting at 0.
pub(crate) fn backoff_delay(attempt: u32, initial: Duration, max: Duration) -> Duration {
    let exponential = initial.saturating_mul(2u32.saturating_pow(attempt));
    let capped = exponential.min(max);
    // Jitter within [75%, 100%] of the capped delay.
    let factor = rand::rng().random_range(0.75..=1.0);
    capped.mul_f64(factor)
}
