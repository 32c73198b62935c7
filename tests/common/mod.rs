//! Shared testing utilities for issue-branch CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const OWNER: &str = "acme";
pub const REPO: &str = "widgets";
pub const SHA: &str = "abc123";

/// Isolated runner environment: a temp dir for the event payload and a
/// mock GitHub API server.
pub struct TestContext {
    root: TempDir,
    pub server: mockito::ServerGuard,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = mockito::Server::new();
        Self { root, server }
    }

    /// Write the webhook payload and return its path.
    pub fn write_event(&self, json: &str) -> PathBuf {
        let path = self.root.path().join("event.json");
        fs::write(&path, json).expect("Failed to write event payload");
        path
    }

    /// Path of `repos/acme/widgets` plus `suffix`.
    pub fn repo_path(suffix: &str) -> String {
        format!("/repos/{}/{}{}", OWNER, REPO, suffix)
    }

    /// Build a command for the compiled binary with a clean runner environment.
    pub fn cli(&self, event_name: &str) -> Command {
        let mut cmd = Command::cargo_bin("issue-branch").expect("Failed to locate issue-branch binary");
        cmd.env_clear()
            .env("INPUT_TOKEN", "test-token")
            .env("INPUT_NAME_PATTERN", "issue-{number}")
            .env("GITHUB_EVENT_NAME", event_name)
            .env("GITHUB_REPOSITORY", format!("{}/{}", OWNER, REPO))
            .env("GITHUB_SHA", SHA)
            .env("GITHUB_API_URL", self.server.url());
        cmd
    }

    /// Command for an `issues` event carrying `number`.
    pub fn issue_cli(&self, number: u64) -> Command {
        let path = self.write_event(&format!(
            r#"{{"action":"opened","issue":{{"number":{},"title":"Something broke"}}}}"#,
            number
        ));
        let mut cmd = self.cli("issues");
        cmd.env("GITHUB_EVENT_PATH", path).env("GITHUB_REF", "refs/heads/main");
        cmd
    }

    /// Command for a `push` event to `refs/heads/<branch>`.
    pub fn push_cli(&self, branch: &str) -> Command {
        let path = self.write_event(&format!(r#"{{"ref":"refs/heads/{}"}}"#, branch));
        let mut cmd = self.cli("push");
        cmd.env("GITHUB_EVENT_PATH", path).env("GITHUB_REF", format!("refs/heads/{}", branch));
        cmd
    }
}
