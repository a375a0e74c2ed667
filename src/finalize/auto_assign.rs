//! Scorer auto-assignment.
//!
//! When a result is finalized without manually entered scorers, each goal
//! is attributed to a random roster player of the scoring team with a
//! random minute. The randomness source is injected so tests can seed it.

use rand::Rng;

use crate::constants::MAX_GOAL_MINUTE;
use crate::models::{GoalEventPayload, Player};

/// Synthesizes one goal event per goal for the given team. Returns an empty
/// list when the team has no roster players to attribute goals to; the
/// result can then still be finalized, just without scorer rows.
pub fn auto_assign_scorers<R: Rng>(
    rng: &mut R,
    team_id: i64,
    roster: &[Player],
    goals: i64,
) -> Vec<GoalEventPayload> {
    let team_players: Vec<&Player> = roster.iter().filter(|p| p.team_id == team_id).collect();
    if team_players.is_empty() || goals <= 0 {
        return Vec::new();
    }

    (0..goals)
        .map(|_| {
            let scorer = team_players[rng.random_range(0..team_players.len())];
            GoalEventPayload {
                team_id,
                scorer_player_id: scorer.id,
                assist_player_id: None,
                minute: Some(i64::from(rng.random_range(1..=MAX_GOAL_MINUTE))),
            }
        })
        .collect()
}
