//! Generic HTTP fetching utilities with caching, retry logic, and envelope
//! unwrapping.
//!
//! GETs are retried with exponential backoff for transient failures and
//! served from the response cache when fresh. Writes are never retried
//! here; a duplicate finalize is worse than a surfaced failure, and the
//! backend rejects replays through the already-played guard anyway.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::cache::{cache_http_response, get_cached_http_response};
use crate::error::AppError;

fn status_error(status: reqwest::StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    error!("HTTP {} - {} (URL: {})", status_code, reason, url);

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

fn parse_body(text: &str, url: &str) -> Result<Value, AppError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            if text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !text.trim_start().starts_with('{') && !text.trim_start().starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

/// Unwraps the backend's `{success, timestamp, data|message}` envelope.
/// `success: false` surfaces the backend's own message; a payload without
/// the envelope keys passes through untouched.
pub fn unwrap_envelope(value: Value, url: &str) -> Result<Value, AppError> {
    let Some(obj) = value.as_object() else {
        return Ok(value);
    };
    let Some(success) = obj.get("success").and_then(Value::as_bool) else {
        return Ok(value);
    };

    if !success {
        let message = obj
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Request rejected by the server")
            .to_string();
        warn!("Backend rejected request: {} (URL: {})", message, url);
        return Err(AppError::BackendRejected(message));
    }

    Ok(obj.get("data").cloned().unwrap_or(Value::Null))
}

/// Extracts a collection from any of the known envelope shapes. Exhausts
/// the variants and falls back to an empty list, logging the unexpected
/// shape instead of failing the render.
pub fn unwrap_collection(value: &Value) -> Vec<Value> {
    if let Some(items) = value.as_array() {
        return items.clone();
    }

    for path in [
        &["data"][..],
        &["payload"],
        &["data", "data"],
        &["data", "payload"],
        &["goalEvents"],
        &["goal_events"],
    ] {
        let mut cursor = value;
        let mut found = true;
        for key in path {
            match cursor.get(key) {
                Some(next) => cursor = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found && let Some(items) = cursor.as_array() {
            return items.clone();
        }
    }

    if !value.is_null() {
        warn!(
            "No known collection shape in response: {}",
            value.to_string().chars().take(200).collect::<String>()
        );
    }
    Vec::new()
}

/// Fetches a URL as JSON with caching and retry for transient failures.
/// Successful bodies are cached for `ttl_seconds` before envelope
/// unwrapping so the cache replays exactly what the server sent.
#[instrument(skip(client))]
pub async fn fetch_value(client: &Client, url: &str, ttl_seconds: u64) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    if let Some(cached) = get_cached_http_response(url).await {
        debug!("Using cached HTTP response for URL: {url}");
        match serde_json::from_str::<Value>(&cached) {
            Ok(value) => return unwrap_envelope(value, url),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
                // Fall through to a fresh request
            }
        }
    }

    let mut attempt = 0u32;
    let max_retries = 3u32;
    let mut backoff = Duration::from_millis(250);
    let response = loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error()) && attempt < max_retries {
                    // Respect Retry-After if provided
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < max_retries {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        max_retries
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        return Err(status_error(status, url));
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };
    debug!("Response length: {} bytes", response_text.len());

    let value = parse_body(&response_text, url)?;
    cache_http_response(url.to_string(), response_text, ttl_seconds).await;
    unwrap_envelope(value, url)
}

/// Sends a write (POST, PATCH or PUT) with a JSON body. No retry: the
/// caller decides how a failed write surfaces. A non-2xx status carrying a
/// JSON `message` field surfaces that message verbatim.
#[instrument(skip(client, body))]
pub async fn send_write<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    body: &B,
) -> Result<Value, AppError> {
    info!("Sending {} to URL: {url}", method);

    let response = match client.request(method, url).json(body).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Write failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    let response_text = response.text().await.unwrap_or_default();

    if !status.is_success() {
        // Prefer the backend's own message when the error body carries one
        if let Ok(value) = serde_json::from_str::<Value>(&response_text)
            && let Some(message) = value.get("message").and_then(Value::as_str)
        {
            warn!("Backend rejected write: {} (URL: {})", message, url);
            return Err(AppError::BackendRejected(message.to_string()));
        }
        return Err(status_error(status, url));
    }

    if response_text.trim().is_empty() {
        return Ok(Value::Null);
    }
    let value = parse_body(&response_text, url)?;
    unwrap_envelope(value, url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope_success() {
        let value = json!({"success": true, "timestamp": "2026-05-01T10:00:00Z", "data": [1, 2]});
        let data = unwrap_envelope(value, "http://x").unwrap();
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    fn test_unwrap_envelope_failure_carries_message() {
        let value = json!({"success": false, "message": "match already played"});
        let err = unwrap_envelope(value, "http://x").unwrap_err();
        assert_eq!(err.user_message(), "match already played");
    }

    #[test]
    fn test_unwrap_envelope_passthrough_without_keys() {
        let value = json!([{"id": 1}]);
        assert_eq!(unwrap_envelope(value.clone(), "http://x").unwrap(), value);

        let obj = json!({"id": 1});
        assert_eq!(unwrap_envelope(obj.clone(), "http://x").unwrap(), obj);
    }

    #[test]
    fn test_unwrap_collection_variants() {
        let direct = json!([{"id": 1}]);
        assert_eq!(unwrap_collection(&direct).len(), 1);

        for wrapped in [
            json!({"data": [{"id": 1}]}),
            json!({"payload": [{"id": 1}]}),
            json!({"data": {"data": [{"id": 1}]}}),
            json!({"data": {"payload": [{"id": 1}]}}),
            json!({"goalEvents": [{"id": 1}]}),
            json!({"goal_events": [{"id": 1}]}),
        ] {
            assert_eq!(unwrap_collection(&wrapped).len(), 1, "shape {wrapped}");
        }
    }

    #[test]
    fn test_unwrap_collection_unknown_shape_is_empty() {
        assert!(unwrap_collection(&json!({"weird": true})).is_empty());
        assert!(unwrap_collection(&Value::Null).is_empty());
    }
}
