//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates a configured HTTP client with connection pooling and a request
/// timeout. The timeout is configurable via config file or environment.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with the default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_configured_timeout() {
        assert!(create_http_client_with_timeout(1).is_ok());
        let _client = create_test_http_client();
    }
}
