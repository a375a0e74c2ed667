//! Backend REST boundary: client construction, generic fetch plumbing,
//! response caching, and the tournament/match endpoint wrappers.

pub mod cache;
pub mod fetch;
pub mod http_client;
pub mod match_api;
pub mod tournament_api;
pub mod urls;

pub use fetch::{fetch_value, send_write, unwrap_collection, unwrap_envelope};
pub use http_client::create_http_client_with_timeout;
pub use match_api::{fetch_match_goal_events, submit_result};
pub use tournament_api::{
    add_participants, assert_no_results, commit_builder_slots, create_tournament,
    delete_tournament, fetch_bracket, fetch_players, fetch_tournament,
    fetch_tournament_goal_events, fetch_tournaments, generate_bracket, has_results,
    update_tournament,
};
