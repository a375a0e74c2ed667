pub mod goal_event;
pub mod matches;
pub mod player;
pub mod team;
pub mod tournament;
pub mod wire;

// Re-export the canonical types for convenience
pub use goal_event::{GoalEvent, GoalEventPayload, ParticipationPayload, create_fallback_name};
pub use matches::{Match, MatchStatus, Slot, TeamPresentation, team_presentation};
pub use player::{Player, PlayerStats};
pub use team::Team;
pub use tournament::{Tournament, TournamentParticipant, TournamentStatus};
