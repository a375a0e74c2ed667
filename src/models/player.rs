use serde_json::Value;

use super::wire;

/// Aggregate stats the backend may join into a player payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
}

/// Canonical player record.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub id: i64,
    pub team_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: Option<String>,
    pub number: Option<u32>,
    pub role: Option<String>,
    pub avatar_url: Option<String>,
    pub team_name: Option<String>,
    pub stats: Option<PlayerStats>,
}

impl Player {
    pub fn from_value(value: &Value) -> Self {
        let stats = wire::pick(value, &["stats"]).map(|s| PlayerStats {
            matches: wire::num(s, &["matches"]).unwrap_or(0) as u32,
            goals: wire::num(s, &["goals"]).unwrap_or(0) as u32,
            assists: wire::num(s, &["assists"]).unwrap_or(0) as u32,
        });

        Player {
            id: wire::num(value, &["id", "player_id", "playerId"]).unwrap_or(0),
            team_id: wire::num(value, &["teamId", "team_id"]).unwrap_or(0),
            first_name: wire::text(value, &["firstName", "first_name"]).unwrap_or_default(),
            last_name: wire::text(value, &["lastName", "last_name"]).unwrap_or_default(),
            full_name: wire::text(value, &["fullName", "full_name"]),
            number: wire::num(value, &["number"]).map(|n| n as u32),
            role: wire::text(value, &["role"]),
            avatar_url: wire::text(value, &["avatarUrl", "avatar_url"]),
            team_name: wire::text(value, &["teamName", "team_name"]),
            stats,
        }
    }

    /// Precomposed full name when the backend supplies one, otherwise built
    /// from the name parts; `"Player #<id>"` as the last resort.
    pub fn display_name(&self) -> String {
        if let Some(full) = &self.full_name {
            return full.clone();
        }
        wire::join_name_parts(Some(&self.first_name), Some(&self.last_name))
            .unwrap_or_else(|| super::goal_event::create_fallback_name(self.id))
    }

    /// Case-insensitive goalkeeper check used for award pool filtering.
    pub fn is_goalkeeper(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("GOALKEEPER"))
    }
}
