use crate::constants::{env_vars, files};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing persistent settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Print schedules as JSON instead of plain text unless overridden on the command line.
    #[serde(default)]
    pub json_output: bool,
}

impl Config {
    /// Loads the effective configuration from the default config file location.
    ///
    /// # Environment Variables
    /// - `NFL_SCHED_LOG_FILE` - Override log file path
    /// - `NFL_SCHED_JSON` - Override JSON output (`1`, `true` or `yes`)
    ///
    /// # Returns
    /// * `Ok(Config)` - File settings with environment overrides applied
    /// * `Err(AppError)` - The file exists but could not be read, parsed or validated
    ///
    /// # Notes
    /// - A missing file is not an error; defaults are used and nothing is written
    /// - Environment variables take precedence over config file values
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Loads `path` if it exists, then applies environment overrides and validates.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = Self::load_stored(path).await?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the settings actually stored at `path`, without environment overrides.
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed file contents, or defaults if no file exists
    /// * `Err(AppError)` - The file exists but could not be read or parsed
    ///
    /// # Notes
    /// - Use this before saving so one-off environment overrides are never persisted
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Ok(Config::default())
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(value) = std::env::var(env_vars::JSON_OUTPUT) {
            self.json_output = matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Log file the application writes to when no custom path is set
    pub fn default_log_file_path() -> String {
        Path::new(&get_log_dir_path())
            .join(files::LOG_FILE)
            .to_string_lossy()
            .to_string()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully displayed configuration
    /// * `Err(AppError)` - Error occurred while reading config
    pub async fn display() -> Result<(), AppError> {
        Self::display_to(&mut std::io::stdout().lock(), &get_config_path()).await
    }

    /// Writes the effective configuration loaded from `config_path` to `out`.
    ///
    /// # Notes
    /// - Shows config file location, output format and log file location
    /// - Notes when the file does not exist yet and defaults are shown
    pub async fn display_to<W: Write>(out: &mut W, config_path: &str) -> Result<(), AppError> {
        let config = Config::load_with_overrides(config_path).await?;
        let separator = "────────────────────────────────────";

        writeln!(out, "\nCurrent Configuration")?;
        writeln!(out, "{separator}")?;
        writeln!(out, "Config Location:")?;
        writeln!(out, "{config_path}")?;
        if !Path::new(config_path).exists() {
            writeln!(out, "(Not created yet, showing defaults)")?;
        }
        writeln!(out, "{separator}")?;
        writeln!(out, "Output Format:")?;
        writeln!(out, "{}", if config.json_output { "json" } else { "text" })?;
        writeln!(out, "{separator}")?;
        writeln!(out, "Log File Location:")?;
        match &config.log_file_path {
            Some(custom_path) => writeln!(out, "{custom_path}")?,
            None => {
                writeln!(out, "{}", Self::default_log_file_path())?;
                writeln!(out, "(Default location)")?;
            }
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// # Arguments
    /// * `path` - The file path where the configuration should be saved
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred while saving
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    ///
    /// # Notes
    /// - Creates the parent directory if it doesn't exist
    /// - Overwrites any existing file at `path`
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    ///
    /// # Errors
    /// * `AppError::Io` - The file is missing or unreadable
    /// * `AppError::TomlDeserialize` - The file is not valid TOML for `Config`
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::JSON_OUTPUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
log_file_path = "/custom/log/path"
json_output = true
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert!(config.json_output);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "json_output = [not toml")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("nfl_sched_builder");
        let config_path = config_dir.join("config.toml");
        let config = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            json_output: true,
        };
        config
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert!(config_dir.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("log_file_path") && content.contains("/custom/log/path"),
            "Content should contain log_file_path. Content: {content}"
        );

        let loaded = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(toml_string.contains("json_output = false"));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_yields_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(!config_path.exists(), "loading must not create a file");
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let env_log = temp_dir.path().join("env").join("sched.log");

        tokio::fs::write(&config_path, "json_output = false\n")
            .await
            .unwrap();

        unsafe {
            std::env::set_var(env_vars::LOG_FILE, env_log.to_string_lossy().to_string());
            std::env::set_var(env_vars::JSON_OUTPUT, "TRUE");
        }

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(
            config.log_file_path,
            Some(env_log.to_string_lossy().to_string())
        );
        assert!(config.json_output);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_log_path_fails_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "log_file_path = \"\"\n")
            .await
            .unwrap();

        let result = Config::load_with_overrides(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::Config(_)));
    }

    #[test]
    fn test_default_log_file_path() {
        let path = Config::default_log_file_path();
        assert!(path.ends_with(files::LOG_FILE));
        assert!(path.contains(files::APP_DIR));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_stored_ignores_environment() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "json_output = false\n")
            .await
            .unwrap();

        unsafe {
            std::env::set_var(env_vars::JSON_OUTPUT, "1");
            std::env::set_var(env_vars::LOG_FILE, "/env/only.log");
        }

        let stored = Config::load_stored(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(stored, Config::default());

        clear_env();
    }

    #[tokio::test]
    async fn test_load_stored_missing_file_and_malformed_file() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let stored = Config::load_stored(&missing.to_string_lossy()).await.unwrap();
        assert_eq!(stored, Config::default());

        let broken = temp_dir.path().join("broken.toml");
        tokio::fs::write(&broken, "json_output = true\nlog_file_path = [broken")
            .await
            .unwrap();
        let result = Config::load_stored(&broken.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    #[serial]
    async fn test_display_existing_config() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let log_path = temp_dir.path().join("sched.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            json_output: true,
        };
        config
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        let mut out = Vec::new();
        Config::display_to(&mut out, &config_path.to_string_lossy())
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Current Configuration"));
        assert!(text.contains(config_path.to_string_lossy().as_ref()));
        assert!(text.contains("Output Format:\njson\n"));
        assert!(text.contains(log_path.to_string_lossy().as_ref()));
        assert!(!text.contains("(Default location)"));
        assert!(!text.contains("Not created yet"));
    }

    #[tokio::test]
    #[serial]
    async fn test_display_without_config_file() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut out = Vec::new();
        Config::display_to(&mut out, &config_path.to_string_lossy())
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("(Not created yet, showing defaults)"));
        assert!(text.contains("Output Format:\ntext\n"));
        assert!(text.contains(&Config::default_log_file_path()));
        assert!(text.contains("(Default location)"));
        assert!(!config_path.exists());
    }
}
