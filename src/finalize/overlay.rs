//! Optimistic result overlay.
//!
//! A successful finalize write marks the local match copy as played before
//! the next authoritative bracket fetch. The overrides live in one explicit
//! store keyed by match id and are merged through a single resolve call, so
//! no other code carries merge logic. Last writer wins per match id; only
//! one finalize can succeed per match anyway because of the already-played
//! guard.

use std::collections::HashMap;

use crate::models::{GoalEvent, Match, MatchStatus};

/// Pending played-state for one match.
#[derive(Debug, Clone, Default)]
pub struct PlayedOverride {
    pub score_a: i64,
    pub score_b: i64,
    pub winner_team_id: i64,
    pub goal_events: Vec<GoalEvent>,
}

/// Store of optimistic overrides, merged over the authoritative snapshot.
#[derive(Debug, Clone, Default)]
pub struct ResultOverlay {
    overrides: HashMap<i64, PlayedOverride>,
}

impl ResultOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the optimistic played-state after a confirmed write.
    pub fn record(&mut self, match_id: i64, entry: PlayedOverride) {
        self.overrides.insert(match_id, entry);
    }

    /// Replaces the optimistic goal events with server-confirmed ones. A
    /// reconcile for a match without an override is ignored.
    pub fn reconcile_events(&mut self, match_id: i64, events: Vec<GoalEvent>) {
        if let Some(entry) = self.overrides.get_mut(&match_id) {
            entry.goal_events = events;
        }
    }

    /// Drops the override once an authoritative fetch reflects the result.
    pub fn clear(&mut self, match_id: i64) {
        self.overrides.remove(&match_id);
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// The effective view of a match: the authoritative record with any
    /// pending override merged on top. The input snapshot is not mutated.
    pub fn resolve(&self, m: &Match) -> Match {
        let Some(entry) = self.overrides.get(&m.id) else {
            return m.clone();
        };

        let mut resolved = m.clone();
        resolved.status = MatchStatus::Played;
        resolved.score_a = Some(entry.score_a);
        resolved.score_b = Some(entry.score_b);
        resolved.winner_team_id = Some(entry.winner_team_id);
        resolved.goal_events = entry.goal_events.clone();
        resolved
    }

    /// Resolves a whole snapshot, producing a new list.
    pub fn resolve_all(&self, matches: &[Match]) -> Vec<Match> {
        matches.iter().map(|m| self.resolve(m)).collect()
    }
}
