//! Result finalization protocol.
//!
//! A match moves from unplayed to played through exactly one path: validate
//! the entry locally, build the full write payload (score, participations,
//! goal events), send it, and only then record the optimistic override and
//! reconcile it against the server's persisted goal events. A failed write
//! leaves the local state exactly as it was.

pub mod auto_assign;
pub mod overlay;

pub use auto_assign::auto_assign_scorers;
pub use overlay::{PlayedOverride, ResultOverlay};

use rand::Rng;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::api::{fetch_match_goal_events, submit_result};
use crate::config::Config;
use crate::error::AppError;
use crate::models::{
    GoalEvent, GoalEventPayload, Match, ParticipationPayload, Player, Slot,
};

/// User-entered result for one match. Scorers are optional; goals without
/// entered scorers are auto-assigned from the roster.
#[derive(Debug, Clone, Default)]
pub struct ResultEntry {
    pub score_a: i64,
    pub score_b: i64,
    pub scorers: Vec<GoalEventPayload>,
}

/// The finalize write body, snake_case on the wire.
#[derive(Debug, Serialize)]
pub struct ResultPayload {
    pub score_a: i64,
    pub score_b: i64,
    pub participations: Vec<ParticipationPayload>,
    pub goal_events: Vec<GoalEventPayload>,
}

/// Outcome of a successful finalize: the winner and the goal events the
/// server confirmed (or the submitted ones when the reconcile read fails).
#[derive(Debug, Clone)]
pub struct FinalizeOutcome {
    pub winner_team_id: i64,
    pub winner_side: Slot,
    pub goal_events: Vec<GoalEvent>,
}

/// Checks every precondition before any network traffic. Errors from here
/// are validation errors the user can fix; the match is left untouched.
pub fn validate_entry(m: &Match, entry: &ResultEntry) -> Result<(), AppError> {
    if m.is_played() {
        return Err(AppError::MatchAlreadyPlayed(m.id));
    }
    if !m.teams_assigned() {
        return Err(AppError::TeamsNotAssigned);
    }
    if entry.score_a < 0 || entry.score_b < 0 {
        return Err(AppError::invalid_score(format!(
            "scores must be non-negative, got {}-{}",
            entry.score_a, entry.score_b
        )));
    }
    if entry.score_a == entry.score_b {
        return Err(AppError::DrawNotAllowed);
    }
    Ok(())
}

/// Which side won, determined locally from the score comparison. Only valid
/// after [`validate_entry`] has rejected draws.
pub fn winner_side(entry: &ResultEntry) -> Slot {
    if entry.score_a > entry.score_b {
        Slot::A
    } else {
        Slot::B
    }
}

fn participations_for(m: &Match, roster: &[Player]) -> Vec<ParticipationPayload> {
    // Every roster player of both teams is recorded as having played; there
    // is no per-match lineup selection.
    roster
        .iter()
        .filter(|p| Some(p.team_id) == m.team_a_id || Some(p.team_id) == m.team_b_id)
        .map(|p| ParticipationPayload {
            player_id: p.id,
            team_id: p.team_id,
        })
        .collect()
}

/// Builds the complete write payload. Entered scorers are used as-is; a
/// side with goals but no entered scorers gets auto-assigned ones.
pub fn build_payload<R: Rng>(
    rng: &mut R,
    m: &Match,
    entry: &ResultEntry,
    roster: &[Player],
) -> ResultPayload {
    let mut goal_events = entry.scorers.clone();

    if goal_events.is_empty() {
        if let Some(team_a) = m.team_a_id {
            goal_events.extend(auto_assign_scorers(rng, team_a, roster, entry.score_a));
        }
        if let Some(team_b) = m.team_b_id {
            goal_events.extend(auto_assign_scorers(rng, team_b, roster, entry.score_b));
        }
    }

    ResultPayload {
        score_a: entry.score_a,
        score_b: entry.score_b,
        participations: participations_for(m, roster),
        goal_events,
    }
}

/// Runs the full finalize protocol for one match.
///
/// Ordering matters: the optimistic override is recorded only after the
/// backend confirms the write. The follow-up goal-event read replaces the
/// submitted events with server-enriched ones; if that read fails the
/// result stands and the submitted events are kept, with a warning.
#[instrument(skip(client, config, overlay, rng, m, entry, roster), fields(match_id = m.id))]
pub async fn finalize_match<R: Rng>(
    client: &Client,
    config: &Config,
    overlay: &mut ResultOverlay,
    rng: &mut R,
    m: &Match,
    entry: &ResultEntry,
    roster: &[Player],
) -> Result<FinalizeOutcome, AppError> {
    validate_entry(m, entry)?;

    let side = winner_side(entry);
    let winner_team_id = match side {
        Slot::A => m.team_a_id,
        Slot::B => m.team_b_id,
    }
    .ok_or(AppError::TeamsNotAssigned)?;

    let payload = build_payload(rng, m, entry, roster);
    let submitted: Vec<GoalEvent> = payload
        .goal_events
        .iter()
        .map(|p| GoalEvent {
            match_id: m.id,
            team_id: Some(p.team_id),
            scorer_player_id: p.scorer_player_id,
            assist_player_id: p.assist_player_id,
            minute: p.minute,
            ..GoalEvent::default()
        })
        .collect();

    submit_result(client, config, m.id, m.tournament_id, &payload).await?;

    overlay.record(
        m.id,
        PlayedOverride {
            score_a: entry.score_a,
            score_b: entry.score_b,
            winner_team_id,
            goal_events: submitted.clone(),
        },
    );
    info!(
        "Match {} finalized {}-{}, winner team {}",
        m.id, entry.score_a, entry.score_b, winner_team_id
    );

    // Reconcile with what the server actually persisted; it may have joined
    // player names and avatars into the events.
    let goal_events = match fetch_match_goal_events(client, config, m.id).await {
        Ok(confirmed) if !confirmed.is_empty() => {
            overlay.reconcile_events(m.id, confirmed.clone());
            confirmed
        }
        Ok(_) => submitted,
        Err(e) => {
            warn!(
                "Reconcile read failed for match {}: {}; keeping submitted events",
                m.id, e
            );
            submitted
        }
    };

    Ok(FinalizeOutcome {
        winner_team_id,
        winner_side: side,
        goal_events,
    })
}
