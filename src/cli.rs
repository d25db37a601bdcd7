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

/// Whether the invocation only touches configuration or listings and
/// never generates a schedule.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.list_teams
}

/// NFL Schedule Builder
///
/// Generates a randomized 18-week schedule for a single NFL team: six
/// divisional games (one of them moved to a Week 18 rematch), a full
/// same-conference division, a full opposite-conference division, three
/// extra conference opponents and a bye between weeks 5 and 14.
///
/// The team must be given by its full name, e.g. "Buffalo Bills".
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Full team name including city and mascot, e.g. "Kansas City Chiefs".
    #[arg(
        value_name = "TEAM",
        required_unless_present_any = ["list_teams", "list_config", "new_log_file_path", "clear_log_file_path"]
    )]
    pub team: Option<String>,

    /// Print the schedule as JSON instead of plain text.
    #[arg(long = "json", short = 'j', help_heading = "Display Options")]
    pub json: bool,

    /// Seed the random generator to get the same schedule on every run.
    #[arg(long = "seed", short = 's', help_heading = "Display Options")]
    pub seed: Option<u64>,

    /// List every team by conference and division.
    #[arg(long = "list-teams", short = 't', help_heading = "Info")]
    pub list_teams: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to the terminal in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
