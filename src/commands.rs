use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::league::{self, Conference};
use crate::schedule::{Schedule, generate_schedule};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

/// Output format chosen for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// `--json` forces JSON; otherwise the config default applies.
    pub fn resolve(args: &Args, config: &Config) -> Self {
        if args.json || config.json_output {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Builds a schedule for `team`, seeded when `seed` is given.
///
/// # Arguments
/// * `team` - Full team name, matched exactly against the league table
/// * `seed` - Optional seed for reproducible output
///
/// # Returns
/// * `Ok(Schedule)` - The generated 18-week schedule
/// * `Err(AppError)` - `AppError::TeamNotFound` for an unknown team
///
/// # Notes
/// - Without a seed the thread-local generator is used, so every run differs
/// - The same seed and team always produce the same schedule
pub fn build_schedule(team: &str, seed: Option<u64>) -> Result<Schedule, AppError> {
    match seed {
        Some(seed) => {
            tracing::info!("Generating schedule for {team} with seed {seed}");
            generate_schedule(team, &mut StdRng::seed_from_u64(seed))
        }
        None => {
            tracing::info!("Generating schedule for {team}");
            generate_schedule(team, &mut rand::rng())
        }
    }
}

/// Writes a schedule in the requested format.
///
/// # Returns
/// * `Ok(())` - The schedule was written to `out`
/// * `Err(AppError)` - Writing failed or JSON serialization failed
///
/// # Notes
/// - Text output is the header line plus one line per week
/// - JSON output is a single pretty-printed document followed by a newline
pub fn write_schedule<W: Write>(
    out: &mut W,
    schedule: &Schedule,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => write!(out, "{}", schedule.render_text())?,
        OutputFormat::Json => writeln!(out, "{}", schedule.to_json()?)?,
    }
    Ok(())
}

/// Handles the default action: generate and print a schedule.
///
/// # Returns
/// * `Ok(())` - The schedule, or the unknown-team message, was written
/// * `Err(AppError)` - Output could not be written
///
/// # Notes
/// - An unknown team is reported on `out` and is not an error for the caller,
///   so the process still exits normally
pub fn handle_generate_command<W: Write>(
    out: &mut W,
    team: &str,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match build_schedule(team, seed) {
        Ok(schedule) => {
            let open = schedule.open_weeks();
            if !open.is_empty() {
                tracing::debug!("Weeks without a game: {open:?}");
            }
            write_schedule(out, &schedule, format)
        }
        Err(e) if e.is_user_input_error() => {
            tracing::warn!("{e}");
            writeln!(out, "{e}")?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Handles the --list-teams command.
pub fn handle_list_teams_command<W: Write>(out: &mut W) -> Result<(), AppError> {
    for conference in [Conference::Afc, Conference::Nfc] {
        for division in league::divisions_in(conference) {
            writeln!(out, "{}", division.name)?;
            for team in division.teams {
                writeln!(out, "  {team}")?;
            }
        }
    }
    Ok(())
}

/// Handles the --list-config command.
///
/// Shows the effective settings: the stored file plus environment overrides.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update operations against the default config file.
///
/// # Returns
/// * `Ok(())` - The config file was updated
/// * `Err(AppError)` - The existing file could not be parsed, or saving failed
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at(&mut std::io::stdout().lock(), args, &Config::get_config_path()).await?;
    Ok(())
}

/// Applies `--set-log-file` / `--clear-log-file` to the config file at `path`.
///
/// # Returns
/// * `Ok(Config)` - The settings that were saved
/// * `Err(AppError)` - The existing file could not be read or parsed, the new
///   settings failed validation, or saving failed
///
/// # Notes
/// - Starts from what is stored in the file, never from environment overrides,
///   so `NFL_SCHED_*` variables set for one run are not persisted
/// - A missing file starts from defaults; a malformed file is left untouched
pub async fn update_config_at<W: Write>(
    out: &mut W,
    args: &Args,
    path: &str,
) -> Result<Config, AppError> {
    let mut config = Config::load_stored(path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        writeln!(out, "Custom log file path cleared. Using default location.")?;
    }

    config.validate()?;
    config.save_to_path(path).await?;
    tracing::info!("Config saved to {path}");
    writeln!(out, "Config updated successfully!")?;
    Ok(config)
}
