//! Builder for session scripts fed to the shell on stdin.

#![allow(dead_code)]

use std::fmt;

/// Builder for a session script with shell-safe quoting.
///
/// Each method appends one command line; arguments containing spaces or
/// quotes are escaped with `shell_words::quote`.
#[derive(Debug, Default)]
pub struct TestScript {
    lines: Vec<String>,
}

impl TestScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw line as typed.
    pub fn raw(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Appends a command built from words, quoting each one as needed.
    pub fn cmd<I, S>(self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        self.raw(shell_words::join(words))
    }

    /// `new <title> -c <content> [-t <tag>]`
    pub fn new_note(self, title: &str, content: &str, tag: Option<&str>) -> Self {
        let mut words = vec!["new", title, "-c", content];
        if let Some(tag) = tag {
            words.extend(["-t", tag]);
        }
        self.cmd(words)
    }

    pub fn ls(self) -> Self {
        self.raw("ls")
    }

    pub fn ls_json(self) -> Self {
        self.raw("ls -f json")
    }

    pub fn sort(self, order: &str) -> Self {
        self.cmd(["sort", order])
    }

    pub fn search(self, query: &str) -> Self {
        self.cmd(["search", query])
    }

    pub fn quit(self) -> Self {
        self.raw("quit")
    }
}

impl fmt::Display for TestScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_quotes_arguments() {
        let script = TestScript::new().new_note("Shopping List", "it's milk", Some("Personal"));
        let line = script.to_string();
        let words = shell_words::split(line.trim()).unwrap();
        assert_eq!(
            words,
            ["new", "Shopping List", "-c", "it's milk", "-t", "Personal"]
        );
    }

    #[test]
    fn test_script_one_line_per_command() {
        let script = TestScript::new().ls().sort("title-asc").quit();
        assert_eq!(script.to_string(), "ls\nsort title-asc\nquit\n");
    }
}
