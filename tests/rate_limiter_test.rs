//! Pacer tests for the provider request-per-second ceiling.

use shiori::shared::utils::RateLimiter;
use std::time::{Duration, Instant};

#[tokio::test]
async fn enforces_minimum_interval_between_requests() {
    let limiter = RateLimiter::new(10.0);

    limiter.wait().await;
    let start = Instant::now();
    limiter.wait().await;

    assert!(start.elapsed() >= Duration::from_millis(90));
}

#[tokio::test]
async fn first_request_is_not_delayed() {
    let limiter = RateLimiter::new(1.0);

    let start = Instant::now();
    limiter.wait().await;

    assert!(start.elapsed() < Duration::from_millis(100));
}

#[tokio::test]
async fn unthrottled_pacer_never_sleeps() {
    let limiter = RateLimiter::unthrottled();

    let start = Instant::now();
    for _ in 0..10 {
        limiter.wait().await;
    }

    assert!(start.elapsed() < Duration::from_millis(50));
}

#[test]
fn jikan_pacing_spaces_detail_sub_requests() {
    // Two detail sub-requests share the 3 req/s ceiling, so the pacer must
    // hold at least ~300 ms between them
    let limiter = RateLimiter::new(3.0);
    assert!(limiter.min_interval() >= Duration::from_millis(300));
}
