//! Goal event grouping and scorer aggregation.
//!
//! Every function here is a pure view over an already-fetched snapshot.
//! A partial or empty event list (for example an aborted fetch) is just
//! "no data yet", never an error.

use std::collections::HashMap;

use crate::models::{GoalEvent, Match, Player, Slot, create_fallback_name};

/// One scorer line in a team's bucket for a match.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerLine {
    pub player_id: i64,
    pub name: String,
    pub minute: Option<i64>,
    pub assist_player_id: Option<i64>,
    pub assist_name: Option<String>,
}

/// Tournament-wide top scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct TopScorer {
    pub player_id: i64,
    pub name: String,
    pub goals: u32,
}

/// Buckets goal events by match id. Events that cannot be attributed to any
/// of the supplied matches are dropped; within a bucket events are sorted by
/// event id ascending so insertion order survives backend reordering.
pub fn group_goals_by_match(
    events: &[GoalEvent],
    matches: &[Match],
) -> HashMap<i64, Vec<GoalEvent>> {
    let mut buckets: HashMap<i64, Vec<GoalEvent>> = HashMap::new();
    for event in events {
        if matches.iter().any(|m| m.id == event.match_id) {
            buckets.entry(event.match_id).or_default().push(event.clone());
        }
    }
    for bucket in buckets.values_mut() {
        bucket.sort_by_key(|e| e.id.unwrap_or(0));
    }
    buckets
}

/// Which side of the match an event belongs to. An event without a team
/// reference is resolved through roster membership of the scorer; if that
/// also fails it lands on side A as a best-effort default rather than being
/// dropped.
fn event_side(event: &GoalEvent, m: &Match, roster: &[Player]) -> Slot {
    if let Some(team_id) = event.team_id
        && let Some(side) = m.side_of(team_id)
    {
        return side;
    }
    if let Some(player) = roster.iter().find(|p| p.id == event.scorer_player_id)
        && let Some(side) = m.side_of(player.team_id)
    {
        return side;
    }
    Slot::A
}

fn scorer_line(event: &GoalEvent, roster: &[Player]) -> ScorerLine {
    let name = event.scorer_name.clone().unwrap_or_else(|| {
        roster
            .iter()
            .find(|p| p.id == event.scorer_player_id)
            .map(Player::display_name)
            .unwrap_or_else(|| create_fallback_name(event.scorer_player_id))
    });
    let assist_name = event.assist_name.clone().or_else(|| {
        event.assist_player_id.and_then(|id| {
            roster.iter().find(|p| p.id == id).map(Player::display_name)
        })
    });
    ScorerLine {
        player_id: event.scorer_player_id,
        name,
        minute: event.minute,
        assist_player_id: event.assist_player_id,
        assist_name,
    }
}

/// Scorer list for one side of a match, sorted by minute ascending. A
/// missing minute sorts first (unrecorded, assume early). The roster is
/// used to resolve names and to attribute events that carry no team id.
pub fn scorers_for_team(
    m: &Match,
    events: &[GoalEvent],
    team_id: i64,
    roster: &[Player],
) -> Vec<ScorerLine> {
    let side = m.side_of(team_id).unwrap_or(Slot::A);
    let mut lines: Vec<ScorerLine> = events
        .iter()
        .filter(|e| e.match_id == m.id)
        .filter(|e| event_side(e, m, roster) == side)
        .map(|e| scorer_line(e, roster))
        .collect();
    lines.sort_by_key(|l| l.minute.unwrap_or(0));
    lines
}

fn is_placeholder_name(name: &str) -> bool {
    name.starts_with("Player #")
}

/// Tournament-wide top scorer over the supplied event set. Ties break to
/// the first-encountered player, so chronological input order is stable
/// across calls. Events without a resolvable scorer id are skipped.
pub fn top_scorer(events: &[GoalEvent], roster: &[Player]) -> Option<TopScorer> {
    let mut counts: HashMap<i64, u32> = HashMap::new();
    let mut names: HashMap<i64, String> = HashMap::new();
    let mut order: Vec<i64> = Vec::new();

    for event in events {
        if event.scorer_player_id == 0 {
            continue;
        }
        let count = counts.entry(event.scorer_player_id).or_insert_with(|| {
            order.push(event.scorer_player_id);
            0
        });
        *count += 1;

        // A real name from a later event upgrades an earlier placeholder.
        let label = scorer_line(event, roster).name;
        match names.get(&event.scorer_player_id) {
            Some(existing) if !is_placeholder_name(existing) => {}
            _ => {
                names.insert(event.scorer_player_id, label);
            }
        }
    }

    let mut best: Option<(i64, u32)> = None;
    for &player_id in &order {
        let goals = counts[&player_id];
        if best.is_none_or(|(_, g)| goals > g) {
            best = Some((player_id, goals));
        }
    }

    best.map(|(player_id, goals)| TopScorer {
        player_id,
        name: names
            .remove(&player_id)
            .unwrap_or_else(|| create_fallback_name(player_id)),
        goals,
    })
}
