// src/main.rs
use clap::Parser;
use nfl_sched_builder::cli::{Args, is_config_operation};
use nfl_sched_builder::commands::{
    OutputFormat, handle_config_update_command, handle_generate_command,
    handle_list_config_command, handle_list_teams_command,
};
use nfl_sched_builder::config::Config;
use nfl_sched_builder::error::AppError;
use nfl_sched_builder::logging::setup_logging;
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // clap prints usage and exits non-zero on a wrong argument count
    let args = Args::parse();

    // A broken config file should not block listing or fixing it
    let config = match Config::load().await {
        Ok(config) => config,
        Err(e) if is_config_operation(&args) => {
            eprintln!("Ignoring unreadable config: {e}");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_teams {
        return handle_list_teams_command(&mut stdout().lock());
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        return handle_config_update_command(&args).await;
    }

    let Some(team) = args.team.as_deref() else {
        return Err(AppError::config_error("No team given"));
    };

    let format = OutputFormat::resolve(&args, &config);
    handle_generate_command(&mut stdout().lock(), team, args.seed, format)
}
