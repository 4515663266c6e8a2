//! Isolated test environment with a temp config directory.

#![allow(dead_code)]

use super::JotCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with its own config file.
///
/// The config file starts empty, so every run uses built-in defaults
/// rather than whatever lives in the user's config directory.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the config file passed with `--config`
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty config.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").expect("Failed to write config");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    /// Creates an environment whose config file holds `toml`.
    pub fn with_config(toml: &str) -> Self {
        let env = Self::new();
        env.write_config(toml);
        env
    }

    /// Returns the path to the config file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Replaces the config file's contents.
    pub fn write_config(&self, toml: &str) {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().config(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_empty_config() {
        let env = TestEnv::new();
        assert!(env.config_path().is_file());
        assert_eq!(std::fs::read_to_string(env.config_path()).unwrap(), "");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.config_path().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_with_config_writes_contents() {
        let env = TestEnv::with_config("samples = false\n");
        assert_eq!(
            std::fs::read_to_string(env.config_path()).unwrap(),
            "samples = false\n"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], env.config_path().to_string_lossy());
    }
}
