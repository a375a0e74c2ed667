//! End-to-end winner path flow over a bracket played round by round.

use futsal_cup::bracket::{layout_live, validate_bracket, winner_path};
use futsal_cup::models::Slot;
use futsal_cup::testing_utils::TestDataBuilder;

#[test]
fn winner_path_grows_as_rounds_complete() {
    let mut matches = TestDataBuilder::full_bracket();
    assert!(validate_bracket(&matches).is_empty());

    // Quarterfinals: Q1 played 3-1 (team 1 beats team 2), Q2 played 0-2
    // (team 4 advances)
    matches[0] = TestDataBuilder::played_match(&matches[0], 3, 1);
    matches[1] = TestDataBuilder::played_match(&matches[1], 0, 2);

    // Before the semifinal is played the backward walk cannot anchor the
    // quarterfinal (it is located through the champion's won semifinal),
    // so only the still-undecided final step is reported.
    let early = winner_path(&matches, 1);
    assert_eq!(early.len(), 1);
    assert_eq!(early[0].round, 3);
    assert_eq!(early[0].score_for, None);

    // Semifinal S1: teams 1 and 4 advanced, team 1 wins 5-0
    matches[4].team_a_id = Some(1);
    matches[4].team_b_id = Some(4);
    matches[4].team_a_name = Some("Team1".into());
    matches[4].team_b_name = Some("Team4".into());
    matches[4] = TestDataBuilder::played_match(&matches[4], 5, 0);

    // Bottom half: Q3/Q4 and S2 played, team 8 reaches the final
    matches[2] = TestDataBuilder::played_match(&matches[2], 1, 0);
    matches[3] = TestDataBuilder::played_match(&matches[3], 0, 1);
    matches[5].team_a_id = Some(5);
    matches[5].team_b_id = Some(8);
    matches[5] = TestDataBuilder::played_match(&matches[5], 0, 2);

    // Final: team 1 beats team 8
    matches[6].team_a_id = Some(1);
    matches[6].team_b_id = Some(8);
    matches[6].team_a_name = Some("Team1".into());
    matches[6].team_b_name = Some("Team8".into());
    matches[6] = TestDataBuilder::played_match(&matches[6], 2, 0);

    let steps = winner_path(&matches, 1);
    assert_eq!(steps.len(), 3);
    assert_eq!(
        steps.iter().map(|s| s.round).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(steps[1].opponent_name.as_deref(), Some("Team4"));
    assert_eq!(steps[1].score_for, Some(5));
    assert_eq!(steps[2].label, "Final");
    assert_eq!(steps[2].opponent_name.as_deref(), Some("Team8"));
}

#[test]
fn layout_stays_total_while_bracket_fills_in() {
    // Layout must hold its invariants at every stage of play
    let mut matches = TestDataBuilder::full_bracket();
    for stage in 0..matches.len() {
        let layout = layout_live(&matches);
        assert_eq!(layout.nodes.len(), 7);
        assert_eq!(layout.edges.len(), 6);

        let played_edges = layout.edges.iter().filter(|e| e.played).count();
        assert_eq!(played_edges, stage.min(6));

        if stage < matches.len() {
            matches[stage] = TestDataBuilder::played_match(&matches[stage], 1, 0);
        }
    }
}

#[test]
fn unknown_champion_path_reports_final_only_or_nothing() {
    let matches = TestDataBuilder::decided_bracket();
    // Team 3 lost its semifinal; its path holds only the (foreign) final step
    let steps = winner_path(&matches, 3);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].round, 3);

    // With no final at all, the path is empty for anyone
    let no_final: Vec<_> = matches.into_iter().filter(|m| m.round != 3).collect();
    assert!(winner_path(&no_final, 1).is_empty());
}

#[test]
fn full_bracket_slots_are_exclusive() {
    let matches = TestDataBuilder::full_bracket();
    let layout = layout_live(&matches);

    // Each semifinal receives exactly one A and one B feeder
    for semi_id in [5i64, 6] {
        let slots: Vec<_> = layout
            .edges
            .iter()
            .filter(|e| e.target_id == semi_id)
            .map(|e| e.target_slot)
            .collect();
        assert_eq!(slots.len(), 2);
        assert!(slots.contains(&Some(Slot::A)));
        assert!(slots.contains(&Some(Slot::B)));
    }
}
