use crate::cli::Args;
use crate::config::Config;
use crate::constants::{DEFAULT_LOG_DIRECTIVE, files};
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Resolves the log directory and file name.
///
/// Precedence: `--log-file`, then the config file (including its environment
/// override), then the platform default.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(files::LOG_FILE);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), files::LOG_FILE.to_string()),
    }
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive: Directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the application.
///
/// - Always logs to a daily rolling file
/// - With `--debug`, also mirrors logs to stdout
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let stdout_layer = if args.debug {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = Path::new(&log_dir)
        .join(&log_file_name)
        .to_string_lossy()
        .to_string();
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_log_file_wins_over_config() {
        let args = args(&["nfl_sched_builder", "--log-file", "/tmp/cli/run.log", "Buffalo Bills"]);
        let config = Config {
            log_file_path: Some("/tmp/config/app.log".to_string()),
            json_output: false,
        };
        let (dir, name) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/tmp/cli");
        assert_eq!(name, "run.log");
    }

    #[test]
    fn test_config_log_file_used_without_cli_flag() {
        let args = args(&["nfl_sched_builder", "Buffalo Bills"]);
        let config = Config {
            log_file_path: Some("/tmp/config/app.log".to_string()),
            json_output: false,
        };
        let (dir, name) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/tmp/config");
        assert_eq!(name, "app.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_current_dir() {
        let args = args(&["nfl_sched_builder", "--log-file", "sched.log", "Buffalo Bills"]);
        let (dir, name) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, ".");
        assert_eq!(name, "sched.log");
    }

    #[test]
    fn test_default_location() {
        let args = args(&["nfl_sched_builder", "Buffalo Bills"]);
        let (dir, name) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(name, files::LOG_FILE);
    }
}
