//! Match-level API operations: the finalize write and the goal-event read
//! used to reconcile it.

use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::cache::{invalidate_match, invalidate_tournament, promote_http_response_ttl};
use super::fetch::{fetch_value, send_write, unwrap_collection};
use super::urls;
use crate::config::Config;
use crate::constants::cache_ttl;
use crate::error::AppError;
use crate::models::GoalEvent;

/// Submits a match result. The body is built by the finalize protocol; this
/// function only moves it over the wire and drops stale cached reads on
/// success. Not retried: a failed write must surface, not replay.
#[instrument(skip(client, config, body))]
pub async fn submit_result<B: Serialize>(
    client: &Client,
    config: &Config,
    match_id: i64,
    tournament_id: Option<i64>,
    body: &B,
) -> Result<Value, AppError> {
    let url = urls::match_result_url(&config.api_domain, match_id);
    let data = send_write(client, Method::PATCH, &url, body).await?;

    invalidate_match(match_id).await;
    if let Some(tid) = tournament_id {
        invalidate_tournament(tid).await;
    }
    info!("Result submitted for match {}", match_id);
    Ok(data)
}

/// Fetches the persisted goal events for one match.
#[instrument(skip(client, config))]
pub async fn fetch_match_goal_events(
    client: &Client,
    config: &Config,
    match_id: i64,
) -> Result<Vec<GoalEvent>, AppError> {
    let url = urls::match_goal_events_url(&config.api_domain, match_id);
    let data = fetch_value(client, &url, cache_ttl::PENDING_GOAL_EVENTS_SECONDS).await?;
    let events: Vec<GoalEvent> = unwrap_collection(&data)
        .iter()
        .map(|v| GoalEvent::from_value(v, match_id))
        .collect();

    // Recorded events only exist for finalized matches, and a finalized
    // match is immutable, so the read can be kept much longer.
    if !events.is_empty() {
        promote_http_response_ttl(&url, cache_ttl::PLAYED_GOAL_EVENTS_SECONDS).await;
    }
    Ok(events)
}
