use crate::constants::files;
use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(files::APP_DIR)
        .join(files::CONFIG_FILE)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(files::APP_DIR)
        .join(files::LOG_DIR)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path() {
        let path = get_config_path();
        assert!(path.contains("nfl_sched_builder"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let path = get_log_dir_path();
        assert!(path.contains("nfl_sched_builder"));
        assert!(path.ends_with("logs"));
    }
}
