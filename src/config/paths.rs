// Platform path utilities.
// Locates the config file and the log directory for postie.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "postie";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the base config directory (~/.config/postie on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the optional TOML config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Default directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        // These tests verify path construction, not actual filesystem
        if let Some(path) = config_path() {
            assert!(path.ends_with("config.toml"));
        }
        if let Some(dir) = log_dir() {
            assert!(dir.ends_with("logs"));
        }
    }
}
