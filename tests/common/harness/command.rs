//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility shared by several test crates
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

use super::TestScript;

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// Collects arguments and the session script fed to stdin.
pub struct JotCommand {
    args: Vec<String>,
    stdin: String,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: String::new(),
        }
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Feeds a session script to stdin.
    pub fn script(mut self, script: &TestScript) -> Self {
        self.stdin = script.to_string();
        self
    }

    /// Feeds session lines to stdin, one per element.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.stdin.push_str(line.as_ref());
            self.stdin.push('\n');
        }
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        cmd.write_stdin(self.stdin);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Option Shortcuts
    // ===========================================

    /// Adds `--no-samples`.
    pub fn no_samples(self) -> Self {
        self.args(["--no-samples"])
    }

    /// Selects the `shell --live` subcommand.
    pub fn live(self) -> Self {
        self.args(["shell", "--live"])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_runs_binary() {
        JotCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_config() {
        let cmd = JotCommand::new().config(Path::new("/tmp/jot.toml"));
        let args = cmd.get_args();
        assert_eq!(args[0], "--config");
        assert_eq!(args[1], "/tmp/jot.toml");
    }

    #[test]
    fn test_command_lines_become_stdin() {
        let cmd = JotCommand::new().lines(["ls", "quit"]);
        assert_eq!(cmd.stdin, "ls\nquit\n");
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = JotCommand::new().no_samples().live();
        assert_eq!(cmd.get_args(), ["--no-samples", "shell", "--live"]);
    }
}
