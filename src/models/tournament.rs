use serde_json::Value;

use super::matches::Match;
use super::wire;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TournamentStatus {
    #[default]
    Draft,
    Ongoing,
    Completed,
}

impl TournamentStatus {
    /// The wire value drifted from "created" to "draft" at some point; both
    /// normalize to Draft. Unknown values also land on Draft.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "ongoing" => TournamentStatus::Ongoing,
            "completed" => TournamentStatus::Completed,
            _ => TournamentStatus::Draft,
        }
    }
}

/// A team enrolled in a tournament.
#[derive(Debug, Clone, Default)]
pub struct TournamentParticipant {
    pub team_id: i64,
    pub name: Option<String>,
    pub seed: Option<i64>,
}

impl TournamentParticipant {
    pub fn from_value(value: &Value) -> Self {
        TournamentParticipant {
            team_id: wire::num(value, &["team_id", "teamId", "id"]).unwrap_or(0),
            name: wire::text(value, &["name", "team_name", "teamName"]),
            seed: wire::num(value, &["seed"]),
        }
    }
}

/// Canonical tournament record.
#[derive(Debug, Clone, Default)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub start_date: Option<String>,
    pub status: TournamentStatus,
    pub winner_team_id: Option<i64>,
    pub winner_name: Option<String>,
    pub has_results: bool,
    pub has_matches: bool,
    pub participants: Vec<TournamentParticipant>,
}

impl Tournament {
    pub fn from_value(value: &Value) -> Self {
        let participants = wire::array(value, &["participants"])
            .map(|rows| rows.iter().map(TournamentParticipant::from_value).collect())
            .unwrap_or_default();

        Tournament {
            id: wire::num(value, &["id"]).unwrap_or(0),
            name: wire::text(value, &["name"]).unwrap_or_default(),
            start_date: wire::text(value, &["startDate", "start_date"]),
            status: wire::text(value, &["status"])
                .map(|s| TournamentStatus::parse(&s))
                .unwrap_or_default(),
            winner_team_id: wire::num(value, &["winnerTeamId", "winner_team_id"]),
            winner_name: wire::text(value, &["winnerName", "winner_name"]),
            has_results: wire::num(value, &["has_results", "hasResults"]).unwrap_or(0) != 0,
            has_matches: wire::num(value, &["has_matches", "hasMatches"]).unwrap_or(0) != 0,
            participants,
        }
    }

    /// Start date as a calendar date, when the wire value parses.
    pub fn start_date_parsed(&self) -> Option<chrono::NaiveDate> {
        self.start_date.as_deref().and_then(|s| {
            // Tolerate a trailing time component on the wire value
            let date_part = s.get(..10).unwrap_or(s);
            chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
        })
    }

    /// The champion's team id: the tournament record's own winner when set,
    /// otherwise the final match's winner.
    pub fn effective_winner(&self, matches: &[Match]) -> Option<i64> {
        self.winner_team_id.or_else(|| {
            matches
                .iter()
                .find(|m| m.round == 3)
                .and_then(|f| f.winner_team_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_normalization() {
        assert_eq!(TournamentStatus::parse("created"), TournamentStatus::Draft);
        assert_eq!(TournamentStatus::parse("draft"), TournamentStatus::Draft);
        assert_eq!(TournamentStatus::parse("ONGOING"), TournamentStatus::Ongoing);
        assert_eq!(
            TournamentStatus::parse("completed"),
            TournamentStatus::Completed
        );
        assert_eq!(TournamentStatus::parse("???"), TournamentStatus::Draft);
    }

    #[test]
    fn test_from_value_with_participants() {
        let t = Tournament::from_value(&json!({
            "id": 3,
            "name": "Summer Cup",
            "start_date": "2026-06-01",
            "status": "ongoing",
            "has_results": 1,
            "participants": [{"team_id": 1, "name": "Lions", "seed": 1}]
        }));
        assert_eq!(t.id, 3);
        assert_eq!(t.status, TournamentStatus::Ongoing);
        assert!(t.has_results);
        assert_eq!(t.participants.len(), 1);
        assert_eq!(t.participants[0].team_id, 1);
    }

    #[test]
    fn test_effective_winner_falls_back_to_final() {
        let final_match = Match::from_value(&json!({
            "id": 7, "round": 3, "winner_team_id": 42
        }));
        let t = Tournament {
            id: 1,
            ..Tournament::default()
        };
        assert_eq!(t.effective_winner(&[final_match.clone()]), Some(42));

        let t_with_winner = Tournament {
            winner_team_id: Some(5),
            ..Tournament::default()
        };
        assert_eq!(t_with_winner.effective_winner(&[final_match]), Some(5));
        assert_eq!(t.effective_winner(&[]), None);
    }

    #[test]
    fn test_start_date_parsed_tolerates_timestamps() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        for wire in ["2026-06-01", "2026-06-01T18:30:00Z"] {
            let t = Tournament {
                start_date: Some(wire.to_string()),
                ..Tournament::default()
            };
            assert_eq!(t.start_date_parsed(), Some(date), "wire {wire}");
        }

        let bad = Tournament {
            start_date: Some("soon".to_string()),
            ..Tournament::default()
        };
        assert_eq!(bad.start_date_parsed(), None);
    }
}
