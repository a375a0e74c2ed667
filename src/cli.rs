use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether the invocation only touches configuration, so no API client or
/// tournament id is needed.
pub fn is_config_only(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
}

/// Futsal Cup Tournament Viewer
///
/// A terminal client for 8-team single-elimination futsal tournaments.
/// Shows the bracket with computed positions, reconstructs the champion's
/// path through the rounds, aggregates goal scorers, and enters match
/// results against the tournament backend.
#[derive(Parser, Debug)]
#[command(author = "Futsal Cup contributors", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the laid-out bracket for a tournament.
    #[arg(long = "bracket", short = 'b', help_heading = "Tournament", value_name = "TOURNAMENT_ID")]
    pub bracket: Option<i64>,

    /// Print the winner story for a completed tournament: the champion's
    /// path round by round, top scorer and award picks.
    #[arg(long = "story", short = 's', help_heading = "Tournament", value_name = "TOURNAMENT_ID")]
    pub story: Option<i64>,

    /// Generate the 7-match bracket for a tournament. Refused when the
    /// tournament already has recorded results.
    #[arg(long = "generate", help_heading = "Tournament", value_name = "TOURNAMENT_ID")]
    pub generate: Option<i64>,

    /// Finalize a match with the scores given by --score-a and --score-b.
    /// Scorers are auto-assigned from the rosters.
    #[arg(long = "finalize", short = 'f', help_heading = "Results", value_name = "MATCH_ID")]
    pub finalize: Option<i64>,

    /// Goals for the A side when finalizing.
    #[arg(long = "score-a", help_heading = "Results", requires = "finalize")]
    pub score_a: Option<i64>,

    /// Goals for the B side when finalizing.
    #[arg(long = "score-b", help_heading = "Results", requires = "finalize")]
    pub score_b: Option<i64>,

    /// Tournament the finalized match belongs to; used to refresh cached
    /// bracket reads and to look the match up.
    #[arg(long = "tournament", short = 't', help_heading = "Results", value_name = "TOURNAMENT_ID")]
    pub tournament: Option<i64>,

    /// Update API domain in config.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: info logs go to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
