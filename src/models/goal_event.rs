use serde::Serialize;
use serde_json::Value;

use super::wire;

/// Canonical goal event after wire normalization.
///
/// The backend may or may not join player names and avatars into the event;
/// whatever arrived is kept so consumers can build the best label available
/// without another roster lookup.
#[derive(Debug, Clone, Default)]
pub struct GoalEvent {
    pub id: Option<i64>,
    pub match_id: i64,
    pub team_id: Option<i64>,
    pub scorer_player_id: i64,
    pub assist_player_id: Option<i64>,
    pub minute: Option<i64>,

    pub scorer_name: Option<String>,
    pub assist_name: Option<String>,
    pub scorer_avatar_url: Option<String>,
    pub assist_avatar_url: Option<String>,
}

impl GoalEvent {
    /// Normalizes a wire goal event. `fallback_match_id` is used when the
    /// event was embedded in a match payload and carries no match reference
    /// of its own.
    pub fn from_value(value: &Value, fallback_match_id: i64) -> Self {
        let scorer_name = wire::text(value, &["scorerName", "scorer_name"]).or_else(|| {
            wire::join_name_parts(
                wire::text(value, &["scorer_first_name", "scorerFirstName"]).as_deref(),
                wire::text(value, &["scorer_last_name", "scorerLastName"]).as_deref(),
            )
        });

        let assist_name = wire::text(value, &["assistName", "assist_name"]).or_else(|| {
            wire::join_name_parts(
                wire::text(value, &["assist_first_name", "assistFirstName"]).as_deref(),
                wire::text(value, &["assist_last_name", "assistLastName"]).as_deref(),
            )
        });

        GoalEvent {
            id: wire::num(value, &["id"]),
            match_id: wire::num(value, &["matchId", "match_id"]).unwrap_or(fallback_match_id),
            team_id: wire::num(value, &["teamId", "team_id"]),
            scorer_player_id: wire::num(
                value,
                &["scorerPlayerId", "scorer_player_id", "scorer_id"],
            )
            .unwrap_or(0),
            assist_player_id: wire::num(value, &["assistPlayerId", "assist_player_id"]),
            minute: wire::num(value, &["minute"]),
            scorer_name,
            assist_name,
            scorer_avatar_url: wire::text(value, &["scorerAvatarUrl", "scorer_avatar_url"]),
            assist_avatar_url: wire::text(value, &["assistAvatarUrl", "assist_avatar_url"]),
        }
    }

    /// Best-effort display label for the scorer. Never empty: falls back to
    /// `"Player #<id>"` when no name survives normalization.
    pub fn scorer_label(&self) -> String {
        match &self.scorer_name {
            Some(name) => name.clone(),
            None => create_fallback_name(self.scorer_player_id),
        }
    }
}

/// Creates a fallback player name when the actual player name is not
/// available in the event or any supplied roster.
pub fn create_fallback_name(player_id: i64) -> String {
    format!("Player #{player_id}")
}

/// Outbound goal event row for the finalize write (snake_case wire).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GoalEventPayload {
    pub team_id: i64,
    pub scorer_player_id: i64,
    pub assist_player_id: Option<i64>,
    pub minute: Option<i64>,
}

/// Outbound participation row for the finalize write.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParticipationPayload {
    pub player_id: i64,
    pub team_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_all_alias_spellings() {
        let snake = GoalEvent::from_value(
            &json!({"match_id": 5, "team_id": 1, "scorer_player_id": 9, "minute": 17}),
            0,
        );
        assert_eq!(snake.match_id, 5);
        assert_eq!(snake.scorer_player_id, 9);
        assert_eq!(snake.minute, Some(17));

        let camel = GoalEvent::from_value(
            &json!({"matchId": 5, "teamId": 1, "scorerPlayerId": 9}),
            0,
        );
        assert_eq!(camel.scorer_player_id, 9);
        assert_eq!(camel.minute, None);

        let legacy = GoalEvent::from_value(&json!({"scorer_id": 9}), 5);
        assert_eq!(legacy.scorer_player_id, 9);
        assert_eq!(legacy.match_id, 5, "fallback match id not applied");
    }

    #[test]
    fn test_scorer_name_from_parts() {
        let ev = GoalEvent::from_value(
            &json!({"scorer_player_id": 9, "scorer_first_name": "Ada", "scorer_last_name": "Muro"}),
            0,
        );
        assert_eq!(ev.scorer_name.as_deref(), Some("Ada Muro"));
        assert_eq!(ev.scorer_label(), "Ada Muro");
    }

    #[test]
    fn test_precomposed_name_wins_over_parts() {
        let ev = GoalEvent::from_value(
            &json!({
                "scorer_player_id": 9,
                "scorer_name": "A. Muro",
                "scorer_first_name": "Ada",
                "scorer_last_name": "Muro"
            }),
            0,
        );
        assert_eq!(ev.scorer_name.as_deref(), Some("A. Muro"));
    }

    #[test]
    fn test_scorer_label_fallback() {
        let ev = GoalEvent::from_value(&json!({"scorer_player_id": 42}), 0);
        assert_eq!(ev.scorer_label(), "Player #42");
    }

    #[test]
    fn test_payload_serializes_snake_case() {
        let payload = GoalEventPayload {
            team_id: 1,
            scorer_player_id: 9,
            assist_player_id: None,
            minute: Some(12),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"team_id\":1"));
        assert!(json.contains("\"scorer_player_id\":9"));
        assert!(json.contains("\"assist_player_id\":null"));
    }
}
