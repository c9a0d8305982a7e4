//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `notes` binary.
pub struct NotesCommand {
    args: Vec<String>,
}

impl NotesCommand {
    /// Creates a new command for the `notes` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
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

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json(self) -> serde_json::Value {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `links` command.
    pub fn links(self) -> Self {
        self.args(["links"])
    }

    /// Configures for the `show` command with a file argument.
    pub fn show(self, file: &str) -> Self {
        self.args(["show", file])
    }

    /// Adds a `--format` option.
    pub fn with_format(self, format: &str) -> Self {
        self.args(["--format", format])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}
