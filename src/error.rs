use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Team '{team}' not found in NFL team list.")]
    TeamNotFound { team: String },

    #[error("Cannot pick {requested} home games from {available} opponents")]
    InvalidHomeCount { requested: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a team lookup error for a name missing from the league table
    pub fn team_not_found(team: impl Into<String>) -> Self {
        Self::TeamNotFound { team: team.into() }
    }

    /// Create an error for a home-game quota larger than the opponent pool
    pub fn invalid_home_count(requested: usize, available: usize) -> Self {
        Self::InvalidHomeCount {
            requested,
            available,
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Whether this error comes from bad user input rather than the environment.
    ///
    /// The CLI prints these and exits normally.
    pub fn is_user_input_error(&self) -> bool {
        matches!(self, AppError::TeamNotFound { .. })
    }
}
