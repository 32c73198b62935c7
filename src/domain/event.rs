//! Triggering event kinds and payload contexts.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;

/// Webhook event that started the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Issues,
    Push,
    Other(String),
}

impl EventKind {
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "issues" => EventKind::Issues,
            "push" => EventKind::Push,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Issues => "issues",
            EventKind::Push => "push",
            EventKind::Other(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue carried by an `issues` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IssueContext {
    pub number: u64,
}

/// Ref and commit carried by a `push` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushContext {
    pub git_ref: String,
    pub sha: String,
}

impl PushContext {
    /// Last `/`-separated segment of the pushed ref.
    pub fn branch_name(&self) -> &str {
        self.git_ref.rsplit('/').next().unwrap_or_default()
    }
}

/// Subset of the webhook payload read from `GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub issue: Option<IssueContext>,
}

impl EventPayload {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::ParseError {
            what: "event payload".into(),
            details: e.to_string(),
        })
    }

    /// Load the payload file. A missing file yields an empty payload.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "event payload file does not exist");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// What started the run: event kind, its payload and the ref it carried.
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    pub kind: EventKind,
    pub payload: EventPayload,
    pub git_ref: String,
}
