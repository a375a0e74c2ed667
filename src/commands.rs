//! Command handlers for the CLI entry point.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use reqwest::Client;
use std::io::stdout;
use tracing::info;

use crate::api;
use crate::bracket::{layout_live, winner_path};
use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::finalize::{ResultEntry, ResultOverlay, finalize_match};
use crate::render;
use crate::stats::{best_goalkeeper, best_player, top_scorer};

/// Validates command line argument combinations.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.finalize.is_some() && (args.score_a.is_none() || args.score_b.is_none()) {
        return Err(AppError::config_error(
            "--finalize requires both --score-a and --score-b",
        ));
    }
    if args.finalize.is_some() && args.tournament.is_none() {
        return Err(AppError::config_error(
            "--finalize requires --tournament to locate the match",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file,
/// --clear-log-file). Updates the stored configuration and saves it.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        if new_domain.is_empty() {
            return Err(AppError::config_error(
                "--config requires an API domain value",
            ));
        }
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    }

    if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    config.save().await?;
    println!("Configuration updated.");
    Ok(())
}

/// Handles `--bracket <ID>`: fetches the bracket, lays it out and prints it.
pub async fn handle_bracket_command(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<(), AppError> {
    let matches = api::fetch_bracket(client, config, tournament_id).await?;
    let layout = layout_live(&matches);
    render::render_bracket(&mut stdout(), &matches, &layout)
}

/// Handles `--generate <ID>`: materializes the bracket server-side and
/// prints the result.
pub async fn handle_generate_command(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<(), AppError> {
    let matches = api::generate_bracket(client, config, tournament_id).await?;
    info!(
        "Generated bracket with {} matches for tournament {}",
        matches.len(),
        tournament_id
    );
    let layout = layout_live(&matches);
    render::render_bracket(&mut stdout(), &matches, &layout)
}

/// Handles `--story <ID>`: champion path, top scorer and award picks.
pub async fn handle_story_command(
    client: &Client,
    config: &Config,
    tournament_id: i64,
) -> Result<(), AppError> {
    // The four reads are independent of each other
    let (tournament, matches, events, players) = futures::try_join!(
        api::fetch_tournament(client, config, tournament_id),
        api::fetch_bracket(client, config, tournament_id),
        api::fetch_tournament_goal_events(client, config, tournament_id),
        api::fetch_players(client, config, tournament_id),
    )?;

    let champion = tournament.effective_winner(&matches);
    let steps = champion
        .map(|id| winner_path(&matches, id))
        .unwrap_or_default();

    let champion_name = tournament.winner_name.clone().or_else(|| {
        champion.and_then(|id| {
            matches.iter().find_map(|m| {
                if m.team_a_id == Some(id) {
                    m.team_a_name.clone()
                } else if m.team_b_id == Some(id) {
                    m.team_b_name.clone()
                } else {
                    None
                }
            })
        })
    });

    let top = top_scorer(&events, &players);
    let mvp = best_player(&players, tournament.id);
    let keeper = best_goalkeeper(&players, tournament.id);

    render::render_winner_story(
        &mut stdout(),
        &tournament,
        champion_name.as_deref(),
        &steps,
        top.as_ref(),
        mvp,
        keeper,
    )
}

/// Handles `--finalize <MATCH_ID> --score-a N --score-b N --tournament ID`.
pub async fn handle_finalize_command(
    client: &Client,
    config: &Config,
    match_id: i64,
    tournament_id: i64,
    score_a: i64,
    score_b: i64,
) -> Result<(), AppError> {
    let matches = api::fetch_bracket(client, config, tournament_id).await?;
    let m = matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(AppError::MatchNotFound {
            match_id,
            tournament_id,
        })?;

    let roster = api::fetch_players(client, config, tournament_id).await?;
    let entry = ResultEntry {
        score_a,
        score_b,
        scorers: Vec::new(),
    };

    let mut overlay = ResultOverlay::new();
    let mut rng = SmallRng::from_os_rng();
    let outcome =
        finalize_match(client, config, &mut overlay, &mut rng, m, &entry, &roster).await?;

    println!(
        "Match {} finalized {}-{}. Winner: team {}.",
        match_id, score_a, score_b, outcome.winner_team_id
    );
    for event in &outcome.goal_events {
        println!("  {}' {}", event.minute.unwrap_or(0), event.scorer_label());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_finalize_without_scores_rejected() {
        let args = Args::parse_from(["futsal_cup", "--finalize", "11", "--tournament", "2"]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_finalize_without_tournament_rejected() {
        let args = Args::parse_from([
            "futsal_cup",
            "--finalize",
            "11",
            "--score-a",
            "1",
            "--score-b",
            "0",
        ]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_complete_finalize_args_accepted() {
        let args = Args::parse_from([
            "futsal_cup",
            "--finalize",
            "11",
            "--score-a",
            "1",
            "--score-b",
            "0",
            "--tournament",
            "2",
        ]);
        assert!(validate_args(&args).is_ok());
    }
}
