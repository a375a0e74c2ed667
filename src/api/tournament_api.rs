//! Tournament-level API operations: reads for the bracket views and the
//! writes that set a tournament up (participants, bracket generation,
//! builder slot commits).

use reqwest::{Client, Method};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::cache::{invalidate_tournament, promote_http_response_ttl};
use super::fetch::{fetch_value, send_write, unwrap_collection};
use super::urls;
use crate::bracket::SlotBoard;
use crate::config::Config;
use crate::constants::cache_ttl;
use crate::error::AppError;
use crate::models::{GoalEvent, Match, Player, Tournament};

/// Fetches one tournament with its participants. The backend may nest the
/// record under a `tournament` key next to a `participants` array, or
/// return a flat record; both shapes normalize the same way.
#[instrument(skip(client, config))]
pub async fn fetch_tournament(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<Tournament, AppError> {
    let url = urls::tournament_url(&config.api_domain, tournament_id);
    let data = fetch_value(client, &url, cache_ttl::ONGOING_BRACKET_SECONDS)
        .await
        .map_err(|e| match e {
            AppError::ApiNotFound { .. } => AppError::TournamentNotFound { tournament_id },
            other => other,
        })?;

    let mut tournament = match data.get("tournament") {
        Some(nested) => {
            let mut t = Tournament::from_value(nested);
            if t.participants.is_empty()
                && let Some(rows) = data.get("participants").and_then(|p| p.as_array())
            {
                t.participants = rows
                    .iter()
                    .map(crate::models::TournamentParticipant::from_value)
                    .collect();
            }
            t
        }
        None => Tournament::from_value(&data),
    };

    if tournament.id == 0 {
        tournament.id = tournament_id;
    }
    Ok(tournament)
}

/// Fetches every tournament known to the backend.
#[instrument(skip(client, config))]
pub async fn fetch_tournaments(
    client: &Client,
    config: &Config,
) -> Result<Vec<Tournament>, AppError> {
    let url = urls::tournaments_url(&config.api_domain);
    let data = fetch_value(client, &url, cache_ttl::ONGOING_BRACKET_SECONDS).await?;
    Ok(unwrap_collection(&data)
        .iter()
        .map(Tournament::from_value)
        .collect())
}

#[derive(Serialize)]
struct TournamentBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<&'a str>,
}

/// Creates a tournament and returns the backend's record of it.
#[instrument(skip(client, config))]
pub async fn create_tournament(
    client: &Client,
    config: &Config,
    name: &str,
    start_date: Option<&str>,
) -> Result<Tournament, AppError> {
    let url = urls::tournaments_url(&config.api_domain);
    let body = TournamentBody {
        name: Some(name),
        start_date,
    };
    let data = send_write(client, Method::POST, &url, &body).await?;
    Ok(Tournament::from_value(&data))
}

/// Updates a tournament's name and/or start date. Fields left `None` are
/// not sent, so the backend keeps their current values.
#[instrument(skip(client, config))]
pub async fn update_tournament(
    client: &Client,
    config: &Config,
    tournament_id: i64,
    name: Option<&str>,
    start_date: Option<&str>,
) -> Result<(), AppError> {
    let url = urls::tournament_url(&config.api_domain, tournament_id);
    let body = TournamentBody { name, start_date };
    send_write(client, Method::PATCH, &url, &body).await?;
    invalidate_tournament(tournament_id).await;
    Ok(())
}

/// Deletes a tournament. Refused client-side when it already has recorded
/// results; results are only removable backend-side.
#[instrument(skip(client, config))]
pub async fn delete_tournament(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<(), AppError> {
    assert_no_results(client, config, tournament_id).await?;

    let url = urls::tournament_url(&config.api_domain, tournament_id);
    send_write(client, Method::DELETE, &url, &serde_json::json!({})).await?;
    invalidate_tournament(tournament_id).await;
    Ok(())
}

/// Fetches the materialized bracket for a tournament.
#[instrument(skip(client, config))]
pub async fn fetch_bracket(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<Vec<Match>, AppError> {
    let url = urls::bracket_url(&config.api_domain, tournament_id);
    let data = fetch_value(client, &url, cache_ttl::ONGOING_BRACKET_SECONDS).await?;
    let matches: Vec<Match> = unwrap_collection(&data)
        .iter()
        .map(Match::from_value)
        .collect();
    info!(
        "Fetched {} matches for tournament {}",
        matches.len(),
        tournament_id
    );

    // A fully played bracket never changes again
    if !matches.is_empty() && matches.iter().all(Match::is_played) {
        promote_http_response_ttl(&url, cache_ttl::COMPLETED_BRACKET_SECONDS).await;
    }
    Ok(matches)
}

/// Fetches every goal event recorded for a tournament.
#[instrument(skip(client, config))]
pub async fn fetch_tournament_goal_events(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<Vec<GoalEvent>, AppError> {
    let url = urls::tournament_goal_events_url(&config.api_domain, tournament_id);
    let data = fetch_value(client, &url, cache_ttl::PENDING_GOAL_EVENTS_SECONDS).await?;
    Ok(unwrap_collection(&data)
        .iter()
        .map(|v| GoalEvent::from_value(v, 0))
        .collect())
}

/// Fetches the full player roster across all participating teams.
#[instrument(skip(client, config))]
pub async fn fetch_players(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<Vec<Player>, AppError> {
    let url = urls::tournament_players_url(&config.api_domain, tournament_id);
    let data = fetch_value(client, &url, cache_ttl::PLAYER_DATA_SECONDS).await?;
    Ok(unwrap_collection(&data)
        .iter()
        .map(Player::from_value)
        .collect())
}

#[derive(Serialize)]
struct ParticipantsBody<'a> {
    team_ids: &'a [i64],
}

/// Registers the participating teams for a tournament.
#[instrument(skip(client, config))]
pub async fn add_participants(
    client: &Client,
    config: &Config,
    tournament_id: i64,
    team_ids: &[i64],
) -> Result<(), AppError> {
    let url = urls::participants_url(&config.api_domain, tournament_id);
    send_write(client, Method::POST, &url, &ParticipantsBody { team_ids }).await?;
    invalidate_tournament(tournament_id).await;
    Ok(())
}

/// Whether a tournament has any recorded results: the record's own flag,
/// or any bracket match already played or carrying a score.
pub async fn has_results(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<bool, AppError> {
    let tournament = fetch_tournament(client, config, tournament_id).await?;
    if tournament.has_results {
        return Ok(true);
    }
    if !tournament.has_matches {
        return Ok(false);
    }
    let matches = fetch_bracket(client, config, tournament_id).await?;
    Ok(matches
        .iter()
        .any(|m| m.is_played() || m.score_a.is_some() || m.score_b.is_some()))
}

/// Refuses to proceed when the tournament already has recorded results.
/// Regenerating a bracket under existing results would orphan them, so the
/// guard runs client-side before the write is attempted.
pub async fn assert_no_results(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<(), AppError> {
    if has_results(client, config, tournament_id).await? {
        warn!(
            "Refusing bracket regeneration for tournament {} with existing results",
            tournament_id
        );
        return Err(AppError::TournamentHasResults(format!(
            "tournament {tournament_id} already has recorded results"
        )));
    }
    Ok(())
}

/// Materializes the 7-match tree server-side.
#[instrument(skip(client, config))]
pub async fn generate_bracket(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<Vec<Match>, AppError> {
    assert_no_results(client, config, tournament_id).await?;

    let url = urls::generate_bracket_url(&config.api_domain, tournament_id);
    let data = send_write(client, Method::POST, &url, &serde_json::json!({})).await?;
    invalidate_tournament(tournament_id).await;

    let matches: Vec<Match> = unwrap_collection(&data)
        .iter()
        .map(Match::from_value)
        .collect();
    if matches.is_empty() {
        // Some backends answer the generate call with a bare ack
        return fetch_bracket(client, config, tournament_id).await;
    }
    Ok(matches)
}

#[derive(Serialize)]
struct SlotRow {
    id: i64,
    team_a_id: Option<i64>,
    team_b_id: Option<i64>,
}

#[derive(Serialize)]
struct SlotCommitBody {
    matches: Vec<SlotRow>,
}

/// Commits builder-mode quarterfinal slots to the backend in one write.
#[instrument(skip(client, config, board))]
pub async fn commit_builder_slots(
    client: &Client,
    config: &Config,
    tournament_id: i64,
    board: &SlotBoard,
) -> Result<(), AppError> {
    let body = SlotCommitBody {
        matches: board
            .slots()
            .iter()
            .map(|s| SlotRow {
                id: s.match_id,
                team_a_id: s.team_a_id,
                team_b_id: s.team_b_id,
            })
            .collect(),
    };

    let url = urls::tournament_matches_url(&config.api_domain, tournament_id);
    send_write(client, Method::PUT, &url, &body).await?;
    invalidate_tournament(tournament_id).await;
    Ok(())
}
