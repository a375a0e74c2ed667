//! Bracket geometry and structure for an 8-team single-elimination cup.

pub mod builder;
pub mod layout;
pub mod validate;
pub mod winner_path;

pub use builder::{BuilderSlot, SlotBoard};
pub use layout::{BracketLayout, LayoutEdge, LayoutNode, Side, layout_builder, layout_live};
pub use validate::{BracketIssue, validate_bracket};
pub use winner_path::{WinnerStep, round_label, winner_path};
