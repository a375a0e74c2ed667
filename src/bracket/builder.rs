//! Builder-mode slot management.
//!
//! Before a bracket is committed, teams are assigned to quarterfinal slots
//! held client-side. Each slot references the backing round-1 match record
//! by id and carries up to two candidate teams pending commit.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Slot, Team};

/// One quarterfinal slot in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderSlot {
    pub match_id: i64,
    pub team_a_id: Option<i64>,
    pub team_b_id: Option<i64>,
}

impl BuilderSlot {
    pub fn new(match_id: i64) -> Self {
        BuilderSlot {
            match_id,
            team_a_id: None,
            team_b_id: None,
        }
    }
}

/// The set of quarterfinal slots being assembled before commit.
#[derive(Debug, Clone, Default)]
pub struct SlotBoard {
    slots: Vec<BuilderSlot>,
}

impl SlotBoard {
    /// Creates a board with one empty slot per round-1 match id.
    pub fn new(quarterfinal_match_ids: impl IntoIterator<Item = i64>) -> Self {
        SlotBoard {
            slots: quarterfinal_match_ids
                .into_iter()
                .map(BuilderSlot::new)
                .collect(),
        }
    }

    pub fn slots(&self) -> &[BuilderSlot] {
        &self.slots
    }

    /// Team ids already placed on the board, in slot order.
    pub fn assigned_team_ids(&self) -> Vec<i64> {
        self.slots
            .iter()
            .flat_map(|s| [s.team_a_id, s.team_b_id])
            .flatten()
            .collect()
    }

    /// Assigns a team to one side of a slot. A team already placed elsewhere
    /// is removed from its previous position first, so the board never holds
    /// the same team twice.
    pub fn assign(&mut self, match_id: i64, side: Slot, team_id: i64) {
        for slot in &mut self.slots {
            if slot.team_a_id == Some(team_id) {
                slot.team_a_id = None;
            }
            if slot.team_b_id == Some(team_id) {
                slot.team_b_id = None;
            }
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| s.match_id == match_id) {
            match side {
                Slot::A => slot.team_a_id = Some(team_id),
                Slot::B => slot.team_b_id = Some(team_id),
            }
        }
    }

    /// Empties both sides of one slot.
    pub fn clear_slot(&mut self, match_id: i64) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.match_id == match_id) {
            slot.team_a_id = None;
            slot.team_b_id = None;
        }
    }

    /// Empties the whole board.
    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            slot.team_a_id = None;
            slot.team_b_id = None;
        }
    }

    /// Deals the given teams into the slots two at a time, in random order.
    /// The RNG is injected so callers can seed it for reproducible draws.
    pub fn shuffle_teams<R: Rng>(&mut self, teams: &[Team], rng: &mut R) {
        let mut ids: Vec<i64> = teams.iter().map(|t| t.id).collect();
        ids.shuffle(rng);

        let mut pairs = ids.chunks_exact(2);
        for slot in &mut self.slots {
            match pairs.next() {
                Some(pair) => {
                    slot.team_a_id = Some(pair[0]);
                    slot.team_b_id = Some(pair[1]);
                }
                None => {
                    slot.team_a_id = None;
                    slot.team_b_id = None;
                }
            }
        }
    }

    /// True once every slot holds two teams.
    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty()
            && self
                .slots
                .iter()
                .all(|s| s.team_a_id.is_some() && s.team_b_id.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn teams(n: i64) -> Vec<Team> {
        (1..=n)
            .map(|id| Team {
                id,
                name: format!("Team{id}"),
                logo_url: None,
            })
            .collect()
    }

    #[test]
    fn test_assign_moves_team_between_slots() {
        let mut board = SlotBoard::new([1, 2, 3, 4]);
        board.assign(1, Slot::A, 10);
        board.assign(2, Slot::B, 10);

        assert_eq!(board.slots()[0].team_a_id, None);
        assert_eq!(board.slots()[1].team_b_id, Some(10));
        assert_eq!(board.assigned_team_ids(), vec![10]);
    }

    #[test]
    fn test_clear_slot_and_clear_all() {
        let mut board = SlotBoard::new([1, 2]);
        board.assign(1, Slot::A, 10);
        board.assign(1, Slot::B, 11);
        board.assign(2, Slot::A, 12);

        board.clear_slot(1);
        assert_eq!(board.assigned_team_ids(), vec![12]);

        board.clear_all();
        assert!(board.assigned_team_ids().is_empty());
    }

    #[test]
    fn test_shuffle_fills_all_slots_with_8_teams() {
        let mut board = SlotBoard::new([1, 2, 3, 4]);
        let mut rng = SmallRng::seed_from_u64(7);
        board.shuffle_teams(&teams(8), &mut rng);

        assert!(board.is_complete());
        let mut ids = board.assigned_team_ids();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_reproducible_with_same_seed() {
        let mut a = SlotBoard::new([1, 2, 3, 4]);
        let mut b = SlotBoard::new([1, 2, 3, 4]);
        a.shuffle_teams(&teams(8), &mut SmallRng::seed_from_u64(42));
        b.shuffle_teams(&teams(8), &mut SmallRng::seed_from_u64(42));
        assert_eq!(a.slots(), b.slots());
    }
}
