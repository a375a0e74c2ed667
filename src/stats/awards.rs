//! Deterministic award selection.
//!
//! Award winners are picked with a seeded 32-bit mix PRNG so the same
//! tournament always shows the same "best player" and "best goalkeeper"
//! across re-renders and reloads. Seeds are derived from the tournament id
//! with a distinct multiplier per category so the two picks are not
//! correlated.

use crate::constants::awards;
use crate::models::Player;

/// One step of the mulberry32 mix function, returning a value in [0, 1).
fn mulberry32_next(state: &mut u32) -> f64 {
    *state = state.wrapping_add(0x6d2b_79f5);
    let mut t = *state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    f64::from(t ^ (t >> 14)) / 4_294_967_296.0
}

/// Picks one element deterministically. Same `(candidates, seed)` always
/// yields the same element; an empty pool yields `None`.
pub fn pick_stable<T>(candidates: &[T], seed: u32) -> Option<&T> {
    if candidates.is_empty() {
        return None;
    }
    let mut state = seed;
    let r = mulberry32_next(&mut state);
    let index = (r * candidates.len() as f64) as usize;
    // r < 1.0 keeps index in range, but guard against float edge behavior
    candidates.get(index.min(candidates.len() - 1))
}

fn seed_for(tournament_id: i64, multiplier: i64, offset: i64) -> u32 {
    tournament_id.wrapping_mul(multiplier).wrapping_add(offset) as u32
}

/// Best player pick over the full tournament roster.
pub fn best_player<'a>(roster: &'a [Player], tournament_id: i64) -> Option<&'a Player> {
    pick_stable(roster, seed_for(tournament_id, awards::BEST_PLAYER_SEED_MUL, 0))
}

/// Best goalkeeper pick. The pool is pre-filtered to goalkeepers; with no
/// goalkeepers in the roster there is no award.
pub fn best_goalkeeper<'a>(roster: &'a [Player], tournament_id: i64) -> Option<&'a Player> {
    let keepers: Vec<&Player> = roster.iter().filter(|p| p.is_goalkeeper()).collect();
    pick_stable(
        &keepers,
        seed_for(
            tournament_id,
            awards::BEST_GOALKEEPER_SEED_MUL,
            awards::BEST_GOALKEEPER_SEED_ADD,
        ),
    )
    .copied()
}
