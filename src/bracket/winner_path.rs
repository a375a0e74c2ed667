//! Winner path reconstruction.
//!
//! Walks backward from the final through the champion's semifinal and
//! quarterfinal using only the match linkage fields. This is a targeted
//! search, not a tree traversal: a missing link at any round is tolerated
//! and simply omits that step.
//!
//! Precondition (assumed, not verified): the `next_match_id` edges form a
//! single binary tree of depth 3 rooted at the unique round-3 match. See
//! [`super::validate`] for the optional generation-time check.

use crate::models::{Match, Slot};

#[derive(Debug, Clone, PartialEq)]
pub struct WinnerStep {
    pub round: u8,
    pub label: &'static str,
    pub match_id: i64,
    pub opponent_name: Option<String>,
    pub score_for: Option<i64>,
    pub score_against: Option<i64>,
}

/// Human label for a bracket round.
pub fn round_label(round: u8) -> &'static str {
    match round {
        1 => "Quarterfinal",
        2 => "Semifinal",
        _ => "Final",
    }
}

/// Opponent and mirrored scores for the champion's view of one match. The
/// mirror predicate is strictly "champion holds slot A"; a champion found on
/// neither side reads as slot B.
fn opponent_and_scores(m: &Match, winner_team_id: i64) -> (Option<String>, Option<i64>, Option<i64>) {
    let winner_is_a = m.side_of(winner_team_id) == Some(Slot::A);
    if winner_is_a {
        (m.team_b_name.clone(), m.score_a, m.score_b)
    } else {
        (m.team_a_name.clone(), m.score_b, m.score_a)
    }
}

fn step_for(m: &Match, winner_team_id: i64) -> WinnerStep {
    let (opponent_name, score_for, score_against) = opponent_and_scores(m, winner_team_id);
    WinnerStep {
        round: m.round,
        label: round_label(m.round),
        match_id: m.id,
        opponent_name,
        score_for,
        score_against,
    }
}

/// Reconstructs the champion's match-by-match path, ordered quarterfinal →
/// semifinal → final. Rounds whose match cannot be identified are omitted;
/// no final match means an empty path. Pure and idempotent.
pub fn winner_path(matches: &[Match], winner_team_id: i64) -> Vec<WinnerStep> {
    let Some(final_match) = matches.iter().find(|m| m.round == 3) else {
        return Vec::new();
    };

    let semi = matches.iter().find(|m| {
        m.round == 2
            && m.next_match_id == Some(final_match.id)
            && m.winner_team_id == Some(winner_team_id)
    });

    let quarter = semi.and_then(|s| {
        matches.iter().find(|m| {
            m.round == 1
                && m.next_match_id == Some(s.id)
                && m.winner_team_id == Some(winner_team_id)
        })
    });

    let mut steps = Vec::with_capacity(3);
    if let Some(q) = quarter {
        steps.push(step_for(q, winner_team_id));
    }
    if let Some(s) = semi {
        steps.push(step_for(s, winner_team_id));
    }
    steps.push(step_for(final_match, winner_team_id));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_no_final_means_empty_path() {
        let quarters: Vec<Match> = (1..=4).map(|i| TestDataBuilder::match_at(i, 1, i as u32)).collect();
        assert!(winner_path(&quarters, 1).is_empty());
    }

    #[test]
    fn test_full_path_is_ordered_and_mirrored() {
        let matches = TestDataBuilder::decided_bracket();
        // Champion of the decided bracket is team 1
        let steps = winner_path(&matches, 1);

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].round, 1);
        assert_eq!(steps[0].label, "Quarterfinal");
        assert_eq!(steps[1].round, 2);
        assert_eq!(steps[2].round, 3);
        assert_eq!(steps[2].label, "Final");

        // Quarterfinal was 3-1 against Team2 with the champion on side A
        assert_eq!(steps[0].opponent_name.as_deref(), Some("Team2"));
        assert_eq!(steps[0].score_for, Some(3));
        assert_eq!(steps[0].score_against, Some(1));
    }

    #[test]
    fn test_champion_on_side_b_mirrors_scores() {
        let matches = TestDataBuilder::decided_bracket();
        // Team 8 lost the final 0-2 from side B; a hypothetical path for the
        // runner-up still mirrors the final correctly.
        let steps = winner_path(&matches, 8);
        let final_step = steps.last().unwrap();
        assert_eq!(final_step.round, 3);
        assert_eq!(final_step.score_for, Some(0));
        assert_eq!(final_step.score_against, Some(2));
        assert_eq!(final_step.opponent_name.as_deref(), Some("Team1"));
    }

    #[test]
    fn test_unknown_champion_yields_final_only() {
        let matches = TestDataBuilder::decided_bracket();
        let steps = winner_path(&matches, 999);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].round, 3);

        // A champion on neither side mirrors as slot B: the final was
        // Team1 2-0 Team8, so the step reads 0-2 against Team1.
        assert_eq!(steps[0].opponent_name.as_deref(), Some("Team1"));
        assert_eq!(steps[0].score_for, Some(0));
        assert_eq!(steps[0].score_against, Some(2));
    }

    #[test]
    fn test_broken_semifinal_link_omits_early_rounds() {
        let mut matches = TestDataBuilder::decided_bracket();
        // Sever the semifinal -> final link for the champion's semifinal
        for m in &mut matches {
            if m.round == 2 && m.winner_team_id == Some(1) {
                m.next_match_id = None;
            }
        }
        let steps = winner_path(&matches, 1);
        // Without the semifinal the quarterfinal cannot be located either
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].round, 3);
    }

    #[test]
    fn test_idempotent() {
        let matches = TestDataBuilder::decided_bracket();
        assert_eq!(winner_path(&matches, 1), winner_path(&matches, 1));
    }
}
