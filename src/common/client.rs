use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_http_client() -> reqwest::Client {
    create_http_client_with_timeout(DEFAULT_TIMEOUT)
}

/// Every outbound call is bounded; a hung exchange fails the request instead of the caller.
pub fn create_http_client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
