//! Application-wide constants
//!
//! Season shape, file names and environment variable names live here so the
//! generator, config and logging code agree on them.

/// Season shape
pub mod season {
    /// Number of weeks in the regular season, bye included
    pub const WEEKS: u8 = 18;

    /// Earliest week the bye may fall on
    pub const BYE_WEEK_FIRST: u8 = 5;

    /// Latest week the bye may fall on
    pub const BYE_WEEK_LAST: u8 = 14;

    /// Possible totals for the home-game target, picked per schedule
    pub const HOME_TARGET_CHOICES: [u8; 2] = [8, 9];

    /// Home legs reserved for the divisional round-robin when splitting the target
    pub const DIVISIONAL_HOME_GAMES: u8 = 3;

    /// Same-conference opponents drawn from the leftover divisions
    pub const EXTRA_CONFERENCE_GAMES: usize = 3;

    /// Teams per division
    pub const TEAMS_PER_DIVISION: usize = 4;

    /// Opponent label used for the bye placeholder
    pub const BYE_LABEL: &str = "Bye Week";
}

/// File and directory names
pub mod files {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "nfl_sched_builder";

    /// Config file name
    pub const CONFIG_FILE: &str = "config.toml";

    /// Log sub-directory
    pub const LOG_DIR: &str = "logs";

    /// Default log file name
    pub const LOG_FILE: &str = "nfl_sched_builder.log";
}

/// Environment variables that override config file values
pub mod env_vars {
    /// Overrides `log_file_path`
    pub const LOG_FILE: &str = "NFL_SCHED_LOG_FILE";

    /// Overrides `json_output` (`1`/`true`/`yes` enable it)
    pub const JSON_OUTPUT: &str = "NFL_SCHED_JSON";
}

/// Default tracing directive for this crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "nfl_sched_builder=info";
