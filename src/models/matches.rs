use serde::Serialize;
use serde_json::Value;

use super::goal_event::GoalEvent;
use super::wire;

/// Which input slot of the next match the winner advances into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A" | "a" => Some(Slot::A),
            "B" | "b" => Some(Slot::B),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MatchStatus {
    #[default]
    Waiting,
    Scheduled,
    Played,
}

impl MatchStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "played" => MatchStatus::Played,
            "scheduled" => MatchStatus::Scheduled,
            _ => MatchStatus::Waiting,
        }
    }
}

/// Canonical in-memory match record.
///
/// All backend naming conventions (camelCase, snake_case and the historical
/// aliases for embedded goal events) are resolved once in [`Match::from_value`];
/// every algorithm in the crate operates on this one shape.
#[derive(Debug, Clone, Default)]
pub struct Match {
    pub id: i64,
    pub tournament_id: Option<i64>,
    /// 1 = quarterfinal, 2 = semifinal, 3 = final
    pub round: u8,
    /// 1-based position within the round
    pub match_number: u32,
    pub status: MatchStatus,

    pub team_a_id: Option<i64>,
    pub team_b_id: Option<i64>,
    pub team_a_name: Option<String>,
    pub team_b_name: Option<String>,
    pub team_a_logo_url: Option<String>,
    pub team_b_logo_url: Option<String>,

    pub score_a: Option<i64>,
    pub score_b: Option<i64>,

    pub winner_team_id: Option<i64>,
    pub winner_name: Option<String>,

    pub next_match_id: Option<i64>,
    pub next_slot: Option<Slot>,

    /// Goal events embedded in the match payload, when the backend joins them.
    pub goal_events: Vec<GoalEvent>,
}

impl Match {
    /// Normalizes a wire match record. Total over any JSON object; missing or
    /// malformed fields degrade to defaults rather than failing the record.
    pub fn from_value(value: &Value) -> Self {
        let id = wire::num(value, &["id"]).unwrap_or(0);

        // Embedded goal events may sit under any of the historical keys.
        let goal_events = wire::array(
            value,
            &["goal_events", "goalEvents", "match_goal_events", "goals"],
        )
        .map(|events| {
            events
                .iter()
                .map(|e| GoalEvent::from_value(e, id))
                .collect()
        })
        .unwrap_or_default();

        Match {
            id,
            tournament_id: wire::num(value, &["tournamentId", "tournament_id"]),
            round: wire::num(value, &["round"]).unwrap_or(0) as u8,
            match_number: wire::num(value, &["matchNumber", "match_number"]).unwrap_or(1) as u32,
            status: wire::text(value, &["status"])
                .map(|s| MatchStatus::parse(&s))
                .unwrap_or_default(),

            team_a_id: wire::num(value, &["teamAId", "team_a_id"]),
            team_b_id: wire::num(value, &["teamBId", "team_b_id"]),
            team_a_name: wire::text(value, &["teamAName", "team_a_name", "teamA", "team_a"]),
            team_b_name: wire::text(value, &["teamBName", "team_b_name", "teamB", "team_b"]),
            team_a_logo_url: wire::text(value, &["teamALogoUrl", "team_a_logo_url"]),
            team_b_logo_url: wire::text(value, &["teamBLogoUrl", "team_b_logo_url"]),

            score_a: wire::num(value, &["scoreA", "score_a"]),
            score_b: wire::num(value, &["scoreB", "score_b"]),

            winner_team_id: wire::num(value, &["winnerTeamId", "winner_team_id"]),
            winner_name: wire::text(value, &["winnerName", "winner_name"]),

            next_match_id: wire::num(value, &["nextMatchId", "next_match_id"]),
            next_slot: wire::text(value, &["nextSlot", "next_slot"])
                .and_then(|s| Slot::parse(&s)),

            goal_events,
        }
    }

    pub fn is_played(&self) -> bool {
        self.status == MatchStatus::Played
    }

    /// Both team slots filled, so a result can be entered.
    pub fn teams_assigned(&self) -> bool {
        self.team_a_id.is_some() && self.team_b_id.is_some()
    }

    /// Which side the given team occupies, if any.
    pub fn side_of(&self, team_id: i64) -> Option<Slot> {
        if self.team_a_id == Some(team_id) {
            Some(Slot::A)
        } else if self.team_b_id == Some(team_id) {
            Some(Slot::B)
        } else {
            None
        }
    }
}

/// A team's view of one match: the fields a consumer needs to present that
/// team's side of the scoreline.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPresentation {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub score: Option<i64>,
}

/// Resolves name, logo and score for the given team id within a match.
/// Unknown team ids fall back to the A side, mirroring the aggregation
/// fallback for unattributable events.
pub fn team_presentation(m: &Match, team_id: i64) -> TeamPresentation {
    let is_a = m.team_a_id == Some(team_id);
    if is_a || m.team_b_id != Some(team_id) {
        TeamPresentation {
            name: m.team_a_name.clone(),
            logo_url: m.team_a_logo_url.clone(),
            score: m.score_a,
        }
    } else {
        TeamPresentation {
            name: m.team_b_name.clone(),
            logo_url: m.team_b_logo_url.clone(),
            score: m.score_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_snake_case() {
        let m = Match::from_value(&json!({
            "id": 11,
            "tournament_id": 3,
            "round": 1,
            "match_number": 2,
            "status": "played",
            "team_a_id": 100,
            "team_b_id": 200,
            "team_a_name": "Lions",
            "team_b_name": "Wolves",
            "score_a": 3,
            "score_b": 1,
            "winner_team_id": 100,
            "next_match_id": 15,
            "next_slot": "B"
        }));

        assert_eq!(m.id, 11);
        assert_eq!(m.round, 1);
        assert_eq!(m.match_number, 2);
        assert_eq!(m.status, MatchStatus::Played);
        assert_eq!(m.team_a_id, Some(100));
        assert_eq!(m.score_b, Some(1));
        assert_eq!(m.winner_team_id, Some(100));
        assert_eq!(m.next_match_id, Some(15));
        assert_eq!(m.next_slot, Some(Slot::B));
    }

    #[test]
    fn test_from_value_camel_case_and_string_numbers() {
        let m = Match::from_value(&json!({
            "id": "7",
            "round": "2",
            "matchNumber": 1,
            "status": "scheduled",
            "teamAId": "10",
            "teamBId": null,
            "scoreA": "2",
            "nextMatchId": 9,
            "nextSlot": "A"
        }));

        assert_eq!(m.id, 7);
        assert_eq!(m.round, 2);
        assert_eq!(m.status, MatchStatus::Scheduled);
        assert_eq!(m.team_a_id, Some(10));
        assert_eq!(m.team_b_id, None);
        assert_eq!(m.score_a, Some(2));
        assert_eq!(m.next_slot, Some(Slot::A));
        assert!(!m.teams_assigned());
    }

    #[test]
    fn test_from_value_embedded_goal_events_any_key() {
        for key in ["goal_events", "goalEvents", "match_goal_events", "goals"] {
            let m = Match::from_value(&json!({
                "id": 4,
                "round": 3,
                key: [{"scorer_player_id": 9, "team_id": 1, "minute": 12}]
            }));
            assert_eq!(m.goal_events.len(), 1, "key {key} not recognized");
            assert_eq!(m.goal_events[0].match_id, 4);
        }
    }

    #[test]
    fn test_from_value_garbage_is_total() {
        let m = Match::from_value(&json!("not an object"));
        assert_eq!(m.id, 0);
        assert_eq!(m.round, 0);
        assert_eq!(m.status, MatchStatus::Waiting);
        assert!(m.goal_events.is_empty());
    }

    #[test]
    fn test_side_of() {
        let m = Match {
            team_a_id: Some(1),
            team_b_id: Some(2),
            ..Match::default()
        };
        assert_eq!(m.side_of(1), Some(Slot::A));
        assert_eq!(m.side_of(2), Some(Slot::B));
        assert_eq!(m.side_of(3), None);
    }

    #[test]
    fn test_team_presentation_mirrors_sides() {
        let m = Match {
            team_a_id: Some(1),
            team_b_id: Some(2),
            team_a_name: Some("Lions".into()),
            team_b_name: Some("Wolves".into()),
            score_a: Some(3),
            score_b: Some(1),
            ..Match::default()
        };

        let a = team_presentation(&m, 1);
        assert_eq!(a.name.as_deref(), Some("Lions"));
        assert_eq!(a.score, Some(3));

        let b = team_presentation(&m, 2);
        assert_eq!(b.name.as_deref(), Some("Wolves"));
        assert_eq!(b.score, Some(1));

        // Unknown id resolves to the A side as a best-effort default.
        let unknown = team_presentation(&m, 99);
        assert_eq!(unknown.name.as_deref(), Some("Lions"));
    }
}
