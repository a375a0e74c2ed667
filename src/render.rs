//! Terminal output for brackets and winner stories.
//!
//! Purely cosmetic: consumes layout, path and aggregation outputs and draws
//! them with crossterm styling. No tournament logic lives here.

use std::io::Write;

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::bracket::{BracketLayout, WinnerStep, round_label};
use crate::error::AppError;
use crate::models::{Match, Player, Tournament};
use crate::stats::TopScorer;

const HEADER_FG: Color = Color::Cyan;
const ROUND_FG: Color = Color::Green;
const SCORE_FG: Color = Color::Yellow;
const TEXT_FG: Color = Color::White;
const PENDING_FG: Color = Color::DarkGrey;
const CHAMPION_FG: Color = Color::Magenta;

fn team_label(name: Option<&str>) -> &str {
    name.unwrap_or("........")
}

fn write_match_line(out: &mut impl Write, m: &Match) -> Result<(), AppError> {
    let tag = match m.round {
        1 => format!("Q{}", m.match_number),
        2 => format!("S{}", m.match_number),
        _ => "F ".to_string(),
    };

    execute!(out, SetForegroundColor(ROUND_FG), Print(format!("  {tag} ")))?;

    if m.is_played() {
        execute!(
            out,
            SetForegroundColor(TEXT_FG),
            Print(format!("{:<16}", team_label(m.team_a_name.as_deref()))),
            SetForegroundColor(SCORE_FG),
            Print(format!(
                " {} - {} ",
                m.score_a.unwrap_or(0),
                m.score_b.unwrap_or(0)
            )),
            SetForegroundColor(TEXT_FG),
            Print(format!("{:<16}", team_label(m.team_b_name.as_deref()))),
        )?;
    } else {
        execute!(
            out,
            SetForegroundColor(PENDING_FG),
            Print(format!(
                "{:<16}   -   {:<16}",
                team_label(m.team_a_name.as_deref()),
                team_label(m.team_b_name.as_deref())
            )),
        )?;
    }
    execute!(out, ResetColor, Print("\n"))?;
    Ok(())
}

/// Draws the bracket round by round, ordered by the computed layout
/// positions so the printout matches the visual arrangement.
pub fn render_bracket(
    out: &mut impl Write,
    matches: &[Match],
    layout: &BracketLayout,
) -> Result<(), AppError> {
    for (round, title) in [(1u8, "QUARTERFINALS"), (2, "SEMIFINALS"), (3, "FINAL")] {
        let mut nodes: Vec<_> = layout.nodes.iter().filter(|n| n.round == round).collect();
        if nodes.is_empty() {
            continue;
        }
        nodes.sort_by(|a, b| {
            a.y.partial_cmp(&b.y)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        });

        execute!(
            out,
            SetForegroundColor(HEADER_FG),
            Print(format!("\n{title}\n")),
            ResetColor
        )?;

        for node in nodes {
            if let Some(m) = matches.iter().find(|m| m.id == node.match_id) {
                write_match_line(out, m)?;
            }
        }
    }
    execute!(out, Print("\n"))?;
    Ok(())
}

/// Draws the champion's path, the top scorer and the award picks.
pub fn render_winner_story(
    out: &mut impl Write,
    tournament: &Tournament,
    champion_name: Option<&str>,
    steps: &[WinnerStep],
    top: Option<&TopScorer>,
    best_player: Option<&Player>,
    best_goalkeeper: Option<&Player>,
) -> Result<(), AppError> {
    execute!(
        out,
        SetForegroundColor(HEADER_FG),
        Print(format!("\n{}\n", tournament.name)),
        ResetColor
    )?;

    if steps.is_empty() {
        execute!(
            out,
            SetForegroundColor(PENDING_FG),
            Print("  No final played yet.\n"),
            ResetColor
        )?;
        return Ok(());
    }

    if let Some(name) = champion_name {
        execute!(
            out,
            SetForegroundColor(CHAMPION_FG),
            Print(format!("  Champions: {name}\n\n")),
            ResetColor
        )?;
    }

    for step in steps {
        execute!(
            out,
            SetForegroundColor(ROUND_FG),
            Print(format!("  {:<13}", round_label(step.round))),
            SetForegroundColor(SCORE_FG),
            Print(format!(
                "{} - {}",
                step.score_for.unwrap_or(0),
                step.score_against.unwrap_or(0)
            )),
            SetForegroundColor(TEXT_FG),
            Print(format!(
                "  vs {}\n",
                step.opponent_name.as_deref().unwrap_or("Unknown")
            )),
            ResetColor
        )?;
    }

    execute!(out, Print("\n"))?;
    if let Some(top) = top {
        execute!(
            out,
            SetForegroundColor(TEXT_FG),
            Print(format!("  Top scorer:      {} ({})\n", top.name, top.goals)),
            ResetColor
        )?;
    }
    if let Some(player) = best_player {
        execute!(
            out,
            SetForegroundColor(TEXT_FG),
            Print(format!("  Best player:     {}\n", player.display_name())),
            ResetColor
        )?;
    }
    if let Some(keeper) = best_goalkeeper {
        execute!(
            out,
            SetForegroundColor(TEXT_FG),
            Print(format!("  Best goalkeeper: {}\n", keeper.display_name())),
            ResetColor
        )?;
    }
    execute!(out, Print("\n"))?;
    Ok(())
}
