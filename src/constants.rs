//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Number of teams in a bracket; fixed by the single-elimination format
pub const BRACKET_TEAM_COUNT: usize = 8;

/// Number of match records in a fully generated bracket (4 + 2 + 1)
pub const BRACKET_MATCH_COUNT: usize = 7;

/// Players each team must have to be tournament-ready
pub const ROSTER_SIZE: usize = 5;

/// Bracket layout geometry, shared by live and builder modes
pub mod layout {
    /// Horizontal distance between bracket columns
    pub const X_GAP: f64 = 430.0;

    /// Vertical distance between stacked rows
    pub const Y_GAP: f64 = 175.0;
}

/// Seed derivation constants for stable award picks.
///
/// Each award category multiplies the tournament id by its own constant so
/// that picks for different categories are not correlated.
pub mod awards {
    /// Multiplier for the "best player" seed
    pub const BEST_PLAYER_SEED_MUL: i64 = 99991;

    /// Multiplier for the "best goalkeeper" seed
    pub const BEST_GOALKEEPER_SEED_MUL: i64 = 77777;

    /// Additive offset for the "best goalkeeper" seed
    pub const BEST_GOALKEEPER_SEED_ADD: i64 = 11;
}

/// Ceiling for auto-assigned goal minutes (futsal-style match length)
pub const MAX_GOAL_MINUTE: u32 = 50;

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for bracket data while the tournament is still ongoing
    pub const ONGOING_BRACKET_SECONDS: u64 = 30;

    /// TTL for bracket data of completed tournaments (1 hour)
    pub const COMPLETED_BRACKET_SECONDS: u64 = 3600;

    /// TTL for goal events of an unplayed or just-finalized match
    pub const PENDING_GOAL_EVENTS_SECONDS: u64 = 30;

    /// TTL for goal events of a played match (locked server-side, 1 hour)
    pub const PLAYED_GOAL_EVENTS_SECONDS: u64 = 3600;

    /// TTL for team rosters (24 hours)
    pub const PLAYER_DATA_SECONDS: u64 = 86400;
}
