//! Well-formedness checks for a generated bracket.
//!
//! Run once after bracket generation; the layout and path code assume a
//! well-formed tree and do not repeat these checks.

use std::collections::HashMap;

use crate::models::Match;

/// One structural problem found in a bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketIssue {
    WrongRoundCount { round: u8, expected: usize, found: usize },
    MissingLink { match_id: i64 },
    DanglingLink { match_id: i64, target_id: i64 },
    WrongRoundTarget { match_id: i64, target_id: i64 },
    MissingSlot { match_id: i64 },
    SlotConflict { target_id: i64, slot: crate::models::Slot },
    FinalHasLink { match_id: i64 },
}

impl std::fmt::Display for BracketIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongRoundCount { round, expected, found } => {
                write!(f, "round {round} has {found} matches, expected {expected}")
            }
            Self::MissingLink { match_id } => {
                write!(f, "match {match_id} has no next match")
            }
            Self::DanglingLink { match_id, target_id } => {
                write!(f, "match {match_id} points at unknown match {target_id}")
            }
            Self::WrongRoundTarget { match_id, target_id } => {
                write!(f, "match {match_id} feeds {target_id} which is not in the next round")
            }
            Self::MissingSlot { match_id } => {
                write!(f, "match {match_id} has a next match but no slot")
            }
            Self::SlotConflict { target_id, slot } => {
                write!(f, "more than one match feeds slot {slot:?} of match {target_id}")
            }
            Self::FinalHasLink { match_id } => {
                write!(f, "final match {match_id} has a next match")
            }
        }
    }
}

/// Checks round counts, linkage integrity, and slot exclusivity for a
/// single-elimination bracket of 8 teams. Returns every issue found; an
/// empty list means the bracket is well-formed.
pub fn validate_bracket(matches: &[Match]) -> Vec<BracketIssue> {
    let mut issues = Vec::new();

    let by_id: HashMap<i64, &Match> = matches.iter().map(|m| (m.id, m)).collect();

    for (round, expected) in [(1u8, 4usize), (2, 2), (3, 1)] {
        let found = matches.iter().filter(|m| m.round == round).count();
        if found != expected {
            issues.push(BracketIssue::WrongRoundCount { round, expected, found });
        }
    }

    let mut slot_seen: HashMap<(i64, crate::models::Slot), u32> = HashMap::new();

    for m in matches {
        if m.round >= 3 {
            if m.next_match_id.is_some() {
                issues.push(BracketIssue::FinalHasLink { match_id: m.id });
            }
            continue;
        }

        let Some(target_id) = m.next_match_id else {
            issues.push(BracketIssue::MissingLink { match_id: m.id });
            continue;
        };

        match by_id.get(&target_id) {
            None => {
                issues.push(BracketIssue::DanglingLink { match_id: m.id, target_id });
            }
            Some(target) if target.round != m.round + 1 => {
                issues.push(BracketIssue::WrongRoundTarget { match_id: m.id, target_id });
            }
            Some(_) => {}
        }

        match m.next_slot {
            None => issues.push(BracketIssue::MissingSlot { match_id: m.id }),
            Some(slot) => {
                *slot_seen.entry((target_id, slot)).or_insert(0) += 1;
            }
        }
    }

    for ((target_id, slot), count) in slot_seen {
        if count > 1 {
            issues.push(BracketIssue::SlotConflict { target_id, slot });
        }
    }

    issues
}
