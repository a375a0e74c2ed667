//! URL building for the tournament backend endpoints.

pub fn tournaments_url(api_domain: &str) -> String {
    format!("{api_domain}/tournaments")
}

pub fn tournament_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}")
}

pub fn bracket_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/bracket")
}

pub fn tournament_goal_events_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/goal-events")
}

pub fn tournament_players_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/players")
}

pub fn participants_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/participants")
}

pub fn generate_bracket_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/generate-bracket")
}

pub fn tournament_matches_url(api_domain: &str, tournament_id: i64) -> String {
    format!("{api_domain}/tournaments/{tournament_id}/matches")
}

pub fn match_result_url(api_domain: &str, match_id: i64) -> String {
    format!("{api_domain}/matches/{match_id}/result")
}

pub fn match_goal_events_url(api_domain: &str, match_id: i64) -> String {
    format!("{api_domain}/matches/{match_id}/goal-events")
}
