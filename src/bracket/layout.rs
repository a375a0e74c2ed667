//! Bracket layout engine.
//!
//! Computes 2-D node positions and directed edges for an 8-team
//! single-elimination bracket. Two modes exist: live mode derives positions
//! from materialized match records (semifinal and final rows centered between
//! their feeders), while builder mode places static slots because no results
//! exist yet to derive anything from.
//!
//! The engine is total: structurally incomplete input produces partial
//! output, never a panic.

use crate::constants::layout::{X_GAP, Y_GAP};
use crate::models::{Match, MatchStatus, Slot};

use super::builder::BuilderSlot;

/// Synthetic node ids for builder-mode placeholders, which have no backing
/// match record.
pub const BUILDER_SEMI_1_ID: i64 = -1;
pub const BUILDER_SEMI_2_ID: i64 = -2;
pub const BUILDER_FINAL_ID: i64 = -3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub match_id: i64,
    pub round: u8,
    pub match_number: u32,
    pub x: f64,
    pub y: f64,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub source_id: i64,
    pub target_id: i64,
    /// Which input slot of the target the winner advances into; `None` when
    /// the backend did not specify one.
    pub target_slot: Option<Slot>,
    /// Whether the source match is already played. Consumers use this to
    /// mute decided edges; it is a direct function of match state.
    pub played: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BracketLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Column x positions, left quarterfinals through right quarterfinals.
fn col_x(column: u8) -> f64 {
    f64::from(column) * X_GAP
}

/// Average y of the matches in `pool` that feed into `target_id`.
/// Returns `None` when no positioned feeder exists, and also for a zero
/// average (a lone feeder in the top row), so callers apply the constant-row
/// fallback in both cases.
fn avg_y_from_sources(
    pool: &[&Match],
    positions: &std::collections::HashMap<i64, (f64, f64)>,
    target_id: i64,
) -> Option<f64> {
    let ys: Vec<f64> = pool
        .iter()
        .filter(|m| m.next_match_id == Some(target_id))
        .filter_map(|m| positions.get(&m.id).map(|p| p.1))
        .collect();
    if ys.is_empty() {
        None
    } else {
        Some(ys.iter().sum::<f64>() / ys.len() as f64).filter(|y| *y != 0.0)
    }
}

/// Lays out a materialized bracket from its flat match list.
///
/// Quarterfinals 1-2 form the left column, 3-4 the right; each semifinal
/// sits between its feeders on the side its feeders came from; the final is
/// centered between the semifinals.
pub fn layout_live(matches: &[Match]) -> BracketLayout {
    let mut quarters: Vec<&Match> = matches.iter().filter(|m| m.round == 1).collect();
    let mut semis: Vec<&Match> = matches.iter().filter(|m| m.round == 2).collect();
    let mut finals: Vec<&Match> = matches.iter().filter(|m| m.round == 3).collect();
    quarters.sort_by_key(|m| m.match_number);
    semis.sort_by_key(|m| m.match_number);
    finals.sort_by_key(|m| m.match_number);

    let mut positions: std::collections::HashMap<i64, (f64, f64)> =
        std::collections::HashMap::new();

    for m in &quarters {
        let is_left = m.match_number <= 2;
        let idx = if is_left {
            m.match_number.saturating_sub(1)
        } else {
            m.match_number.saturating_sub(3)
        };
        let x = if is_left { col_x(0) } else { col_x(4) };
        let y = f64::from(idx) * 2.0 * Y_GAP;
        positions.insert(m.id, (x, y));
    }

    for m in &semis {
        let feeders: Vec<&&Match> = quarters
            .iter()
            .filter(|q| q.next_match_id == Some(m.id))
            .collect();
        // An empty feeder set defaults to the left column; the y fallback
        // below covers the position.
        let is_left = feeders.iter().all(|q| q.match_number <= 2);
        let x = if is_left { col_x(1) } else { col_x(3) };
        let y = avg_y_from_sources(&quarters, &positions, m.id).unwrap_or(Y_GAP);
        positions.insert(m.id, (x, y));
    }

    for m in &finals {
        let y = avg_y_from_sources(&semis, &positions, m.id).unwrap_or(Y_GAP);
        positions.insert(m.id, (col_x(2), y));
    }

    let center_x = col_x(2);
    let nodes = matches
        .iter()
        .map(|m| {
            let (x, y) = positions.get(&m.id).copied().unwrap_or((0.0, 0.0));
            let side = match m.round {
                1 => {
                    if m.match_number <= 2 {
                        Side::Left
                    } else {
                        Side::Right
                    }
                }
                2 => {
                    if x < center_x {
                        Side::Left
                    } else {
                        Side::Right
                    }
                }
                _ => Side::Center,
            };
            LayoutNode {
                match_id: m.id,
                round: m.round,
                match_number: m.match_number,
                x,
                y,
                side,
            }
        })
        .collect();

    let edges = matches
        .iter()
        .filter_map(|m| {
            m.next_match_id.map(|target| LayoutEdge {
                source_id: m.id,
                target_id: target,
                target_slot: m.next_slot,
                played: m.status == MatchStatus::Played,
            })
        })
        .collect();

    BracketLayout { nodes, edges }
}

/// Lays out the pre-assignment builder view.
///
/// Positions are a fixed template: four corner quarterfinal slots, two
/// mid-column semifinal placeholders and a centered final placeholder.
/// Nothing is derived from data since no match results exist yet.
pub fn layout_builder(slots: &[BuilderSlot]) -> BracketLayout {
    let corner = [
        (col_x(0), 0.0),
        (col_x(0), 2.0 * Y_GAP),
        (col_x(4), 0.0),
        (col_x(4), 2.0 * Y_GAP),
    ];

    let mut nodes: Vec<LayoutNode> = slots
        .iter()
        .take(4)
        .enumerate()
        .map(|(idx, slot)| {
            let (x, y) = corner[idx];
            LayoutNode {
                match_id: slot.match_id,
                round: 1,
                match_number: idx as u32 + 1,
                x,
                y,
                side: if idx < 2 { Side::Left } else { Side::Right },
            }
        })
        .collect();

    nodes.push(LayoutNode {
        match_id: BUILDER_SEMI_1_ID,
        round: 2,
        match_number: 1,
        x: col_x(1),
        y: Y_GAP,
        side: Side::Left,
    });
    nodes.push(LayoutNode {
        match_id: BUILDER_SEMI_2_ID,
        round: 2,
        match_number: 2,
        x: col_x(3),
        y: Y_GAP,
        side: Side::Right,
    });
    nodes.push(LayoutNode {
        match_id: BUILDER_FINAL_ID,
        round: 3,
        match_number: 1,
        x: col_x(2),
        y: Y_GAP,
        side: Side::Center,
    });

    let template = [
        (0usize, BUILDER_SEMI_1_ID, Slot::A),
        (1, BUILDER_SEMI_1_ID, Slot::B),
        (2, BUILDER_SEMI_2_ID, Slot::A),
        (3, BUILDER_SEMI_2_ID, Slot::B),
    ];

    let mut edges: Vec<LayoutEdge> = template
        .iter()
        .filter_map(|&(idx, target, slot)| {
            slots.get(idx).map(|s| LayoutEdge {
                source_id: s.match_id,
                target_id: target,
                target_slot: Some(slot),
                played: false,
            })
        })
        .collect();
    edges.push(LayoutEdge {
        source_id: BUILDER_SEMI_1_ID,
        target_id: BUILDER_FINAL_ID,
        target_slot: Some(Slot::A),
        played: false,
    });
    edges.push(LayoutEdge {
        source_id: BUILDER_SEMI_2_ID,
        target_id: BUILDER_FINAL_ID,
        target_slot: Some(Slot::B),
        played: false,
    });

    BracketLayout { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_live_layout_full_bracket_has_7_nodes_6_edges() {
        let matches = TestDataBuilder::full_bracket();
        let layout = layout_live(&matches);
        assert_eq!(layout.nodes.len(), 7);
        assert_eq!(layout.edges.len(), 6);
    }

    #[test]
    fn test_quarterfinal_columns_and_rows() {
        let matches = TestDataBuilder::full_bracket();
        let layout = layout_live(&matches);

        let node = |id: i64| layout.nodes.iter().find(|n| n.match_id == id).unwrap();

        // Quarterfinals 1-2 on the left column, stacked two rows apart
        assert_eq!(node(1).x, 0.0);
        assert_eq!(node(1).y, 0.0);
        assert_eq!(node(2).x, 0.0);
        assert_eq!(node(2).y, 2.0 * Y_GAP);
        // Quarterfinals 3-4 on the right column
        assert_eq!(node(3).x, 4.0 * X_GAP);
        assert_eq!(node(3).y, 0.0);
        assert_eq!(node(4).x, 4.0 * X_GAP);
        assert_eq!(node(4).y, 2.0 * Y_GAP);
    }

    #[test]
    fn test_semifinals_sit_between_their_feeders() {
        let matches = TestDataBuilder::full_bracket();
        let layout = layout_live(&matches);
        let node = |id: i64| layout.nodes.iter().find(|n| n.match_id == id).unwrap();

        // Left semifinal: x one column in, y = avg(0, 2*Y_GAP) = Y_GAP
        assert_eq!(node(5).x, X_GAP);
        assert_eq!(node(5).y, Y_GAP);
        assert_eq!(node(5).side, Side::Left);

        // Right semifinal mirrors it
        assert_eq!(node(6).x, 3.0 * X_GAP);
        assert_eq!(node(6).y, Y_GAP);
        assert_eq!(node(6).side, Side::Right);

        // Final centered
        assert_eq!(node(7).x, 2.0 * X_GAP);
        assert_eq!(node(7).y, Y_GAP);
        assert_eq!(node(7).side, Side::Center);
    }

    #[test]
    fn test_side_classification_is_stable() {
        let matches = TestDataBuilder::full_bracket();
        let first = layout_live(&matches);
        let second = layout_live(&matches);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_feeders_fall_back_to_constant_row() {
        // A lone semifinal with no quarterfinals positioned yet
        let semi = TestDataBuilder::match_at(5, 2, 1);
        let layout = layout_live(&[semi]);
        assert_eq!(layout.nodes.len(), 1);
        assert_eq!(layout.nodes[0].y, Y_GAP);
        assert!(layout.edges.is_empty() || layout.edges[0].target_id == 7);
    }

    #[test]
    fn test_zero_row_feeder_falls_back_to_constant_row() {
        // A lone feeder in the top row averages to y = 0, which reads as
        // unpositioned and lands the semifinal on the fallback row.
        let mut quarter = TestDataBuilder::match_at(1, 1, 1);
        quarter.next_match_id = Some(5);
        let semi = TestDataBuilder::match_at(5, 2, 1);
        let layout = layout_live(&[quarter, semi]);

        let node = |id: i64| layout.nodes.iter().find(|n| n.match_id == id).unwrap();
        assert_eq!(node(1).y, 0.0);
        assert_eq!(node(5).y, Y_GAP);
    }

    #[test]
    fn test_edges_carry_slot_and_played_state() {
        let mut matches = TestDataBuilder::full_bracket();
        matches[0] = TestDataBuilder::played_match(&matches[0], 3, 1);
        let layout = layout_live(&matches);

        let q1_edge = layout.edges.iter().find(|e| e.source_id == 1).unwrap();
        assert_eq!(q1_edge.target_id, 5);
        assert_eq!(q1_edge.target_slot, Some(Slot::A));
        assert!(q1_edge.played);

        let q2_edge = layout.edges.iter().find(|e| e.source_id == 2).unwrap();
        assert!(!q2_edge.played);
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        let layout = layout_live(&[]);
        assert!(layout.nodes.is_empty());
        assert!(layout.edges.is_empty());
    }

    #[test]
    fn test_builder_layout_is_static_template() {
        let slots: Vec<BuilderSlot> = (1..=4).map(BuilderSlot::new).collect();
        let layout = layout_builder(&slots);

        assert_eq!(layout.nodes.len(), 7);
        assert_eq!(layout.edges.len(), 6);

        // Corner positions for the four quarterfinal slots
        let q1 = &layout.nodes[0];
        assert_eq!((q1.x, q1.y), (0.0, 0.0));
        let q4 = &layout.nodes[3];
        assert_eq!((q4.x, q4.y), (4.0 * X_GAP, 2.0 * Y_GAP));

        // Template edges: q1 feeds semi 1 slot A, semi 2 feeds final slot B
        assert_eq!(layout.edges[0].source_id, 1);
        assert_eq!(layout.edges[0].target_id, BUILDER_SEMI_1_ID);
        assert_eq!(layout.edges[0].target_slot, Some(Slot::A));
        let last = layout.edges.last().unwrap();
        assert_eq!(last.source_id, BUILDER_SEMI_2_ID);
        assert_eq!(last.target_id, BUILDER_FINAL_ID);
        assert_eq!(last.target_slot, Some(Slot::B));
    }

    #[test]
    fn test_builder_layout_with_fewer_slots_is_partial() {
        let slots: Vec<BuilderSlot> = (1..=2).map(BuilderSlot::new).collect();
        let layout = layout_builder(&slots);
        // 2 slots + 3 placeholders, template edges only for present slots
        assert_eq!(layout.nodes.len(), 5);
        assert_eq!(layout.edges.len(), 4);
    }
}
