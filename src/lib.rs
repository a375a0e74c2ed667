//! Futsal Cup Tournament Client Library
//!
//! This library manages 8-team single-elimination futsal tournaments against
//! a REST backend: bracket geometry, winner-path reconstruction, goal-event
//! aggregation, award selection, and the result-finalization protocol.
//!
//! # Examples
//!
//! ```rust,no_run
//! use futsal_cup::api;
//! use futsal_cup::bracket::{layout_live, winner_path};
//! use futsal_cup::config::Config;
//! use futsal_cup::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = api::create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let matches = api::fetch_bracket(&client, &config, 1).await?;
//!     let layout = layout_live(&matches);
//!     println!("{} nodes, {} edges", layout.nodes.len(), layout.edges.len());
//!
//!     if let Some(final_match) = matches.iter().find(|m| m.round == 3)
//!         && let Some(champion) = final_match.winner_team_id
//!     {
//!         for step in winner_path(&matches, champion) {
//!             println!("{}: {:?}", step.label, step.opponent_name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bracket;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod finalize;
pub mod logging;
pub mod models;
pub mod render;
pub mod stats;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use models::{GoalEvent, Match, MatchStatus, Player, Slot, Team, Tournament};
