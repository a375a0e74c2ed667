//! Logging setup: daily-rolling file appender plus optional stdout output.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;
use crate::error::AppError;

const LOG_FILE_NAME: &str = "futsal_cup.log";

fn default_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        "futsal_cup=info"
            .parse()
            .expect("static directive is valid"),
    )
}

/// Resolves the log directory and file name from an explicit path override
/// or the platform default location.
fn log_location(custom_log_path: Option<&String>) -> (String, String) {
    match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (
                parent.to_string_lossy().to_string(),
                file_name.to_string(),
            )
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging to a daily-rolling file, and to stdout as well when
/// `debug` is set. The returned guard must be kept alive for the duration
/// of the program so buffered logs get flushed.
pub async fn setup_logging(
    custom_log_path: Option<&String>,
    debug: bool,
) -> Result<WorkerGuard, AppError> {
    let (log_dir, log_file_name) = log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(default_filter()),
    );

    if debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(std::io::stdout)
                    .with_ansi(true)
                    .with_filter(default_filter()),
            )
            .init();
    } else {
        registry.init();
    }

    Ok(guard)
}
