//! Scorer aggregation and award selection over fetched snapshots.

pub mod aggregator;
pub mod awards;

pub use aggregator::{ScorerLine, TopScorer, group_goals_by_match, scorers_for_team, top_scorer};
pub use awards::{best_goalkeeper, best_player, pick_stable};
