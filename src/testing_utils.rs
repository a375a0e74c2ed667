use crate::models::{GoalEvent, Match, MatchStatus, Player, Slot};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a bare match at a bracket position, unplayed and with no
    /// teams assigned.
    pub fn match_at(id: i64, round: u8, match_number: u32) -> Match {
        Match {
            id,
            round,
            match_number,
            status: MatchStatus::Waiting,
            ..Match::default()
        }
    }

    /// Creates a played copy of a match with the given score. The winner is
    /// derived from the score the same way the backend would set it.
    pub fn played_match(m: &Match, score_a: i64, score_b: i64) -> Match {
        let mut played = m.clone();
        played.status = MatchStatus::Played;
        played.score_a = Some(score_a);
        played.score_b = Some(score_b);
        played.winner_team_id = if score_a > score_b {
            m.team_a_id
        } else {
            m.team_b_id
        };
        played
    }

    /// Creates a fully generated but unplayed 7-match bracket with ids 1-7:
    /// quarterfinals 1-4 feeding semifinals 5-6 (slots A/B in order),
    /// semifinals feeding final 7. Round-1 matches carry teams 1-8.
    pub fn full_bracket() -> Vec<Match> {
        let mut matches = Vec::with_capacity(7);

        for number in 1..=4u32 {
            let id = i64::from(number);
            let mut m = Self::match_at(id, 1, number);
            m.team_a_id = Some(i64::from(number) * 2 - 1);
            m.team_b_id = Some(i64::from(number) * 2);
            m.team_a_name = Some(format!("Team{}", number * 2 - 1));
            m.team_b_name = Some(format!("Team{}", number * 2));
            m.next_match_id = Some(if number <= 2 { 5 } else { 6 });
            m.next_slot = Some(if number % 2 == 1 { Slot::A } else { Slot::B });
            matches.push(m);
        }

        for number in 1..=2u32 {
            let id = i64::from(number) + 4;
            let mut m = Self::match_at(id, 2, number);
            m.next_match_id = Some(7);
            m.next_slot = Some(if number == 1 { Slot::A } else { Slot::B });
            matches.push(m);
        }

        matches.push(Self::match_at(7, 3, 1));
        matches
    }

    /// Creates a fully played bracket where team 1 wins the whole cup:
    /// quarterfinal 3-1 over team 2, semifinal 2-1 over team 3, final 2-0
    /// over team 8 (who came through the bottom half).
    pub fn decided_bracket() -> Vec<Match> {
        let mut matches = Self::full_bracket();

        // Quarterfinal winners: teams 1, 3, 5 and 8
        matches[0] = Self::played_match(&matches[0], 3, 1);
        matches[1] = Self::played_match(&matches[1], 2, 0);
        matches[2] = Self::played_match(&matches[2], 1, 0);
        matches[3] = Self::played_match(&matches[3], 0, 1);

        // Semifinal 5: team 1 vs team 3
        matches[4].team_a_id = Some(1);
        matches[4].team_b_id = Some(3);
        matches[4].team_a_name = Some("Team1".into());
        matches[4].team_b_name = Some("Team3".into());
        matches[4] = Self::played_match(&matches[4], 2, 1);

        // Semifinal 6: team 5 vs team 8
        matches[5].team_a_id = Some(5);
        matches[5].team_b_id = Some(8);
        matches[5].team_a_name = Some("Team5".into());
        matches[5].team_b_name = Some("Team8".into());
        matches[5] = Self::played_match(&matches[5], 0, 3);

        // Final: team 1 vs team 8
        matches[6].team_a_id = Some(1);
        matches[6].team_b_id = Some(8);
        matches[6].team_a_name = Some("Team1".into());
        matches[6].team_b_name = Some("Team8".into());
        matches[6] = Self::played_match(&matches[6], 2, 0);

        matches
    }

    /// Creates a goal event with the fields tests usually care about.
    pub fn goal_event(match_id: i64, team_id: i64, scorer: i64, minute: i64) -> GoalEvent {
        GoalEvent {
            match_id,
            team_id: Some(team_id),
            scorer_player_id: scorer,
            minute: Some(minute),
            ..GoalEvent::default()
        }
    }

    /// Creates a five-player roster for one team, ids starting at
    /// `first_player_id`, last player a goalkeeper.
    pub fn roster_for_team(team_id: i64, first_player_id: i64) -> Vec<Player> {
        (0..5)
            .map(|offset| Player {
                id: first_player_id + offset,
                team_id,
                first_name: "Player".to_string(),
                last_name: format!("{}", first_player_id + offset),
                role: Some(if offset == 4 {
                    "GOALKEEPER".to_string()
                } else {
                    "FIELDER".to_string()
                }),
                ..Player::default()
            })
            .collect()
    }
}
