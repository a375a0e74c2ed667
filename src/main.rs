use clap::Parser;

use futsal_cup::api::create_http_client_with_timeout;
use futsal_cup::cli::{Args, is_config_only};
use futsal_cup::commands;
use futsal_cup::config::Config;
use futsal_cup::error::AppError;
use futsal_cup::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    commands::validate_args(&args)?;

    // Config-only invocations skip logging setup and the API client
    if args.version {
        commands::handle_version_command();
        return Ok(());
    }
    if args.list_config {
        return commands::handle_list_config_command().await;
    }
    if args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        return commands::handle_config_update_command(&args).await;
    }
    debug_assert!(!is_config_only(&args));

    let config_log_path = Config::load().await.ok().and_then(|c| c.log_file_path);
    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    // Keep the guard alive so buffered logs flush on exit
    let _guard = setup_logging(custom_log_path, args.debug).await?;

    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    if let Some(tournament_id) = args.generate {
        return commands::handle_generate_command(&client, &config, tournament_id).await;
    }
    if let Some(tournament_id) = args.bracket {
        return commands::handle_bracket_command(&client, &config, tournament_id).await;
    }
    if let Some(tournament_id) = args.story {
        return commands::handle_story_command(&client, &config, tournament_id).await;
    }
    if let Some(match_id) = args.finalize {
        // validate_args guarantees these are present
        let tournament_id = args.tournament.ok_or(AppError::Custom(
            "--tournament is required with --finalize".to_string(),
        ))?;
        let score_a = args
            .score_a
            .ok_or_else(|| AppError::invalid_score("missing --score-a"))?;
        let score_b = args
            .score_b
            .ok_or_else(|| AppError::invalid_score("missing --score-b"))?;
        return match commands::handle_finalize_command(
            &client,
            &config,
            match_id,
            tournament_id,
            score_a,
            score_b,
        )
        .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_validation_error() => {
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
            Err(e) => Err(e),
        };
    }

    Err(AppError::config_error(
        "No command given; try --bracket, --story, --finalize or --help",
    ))
}
