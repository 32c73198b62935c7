//! Action inputs and host runner context, read once at start-up.

use std::path::Path;

use crate::domain::{
    AppError, EventKind, EventPayload, GitHubApiConfig, NamePattern, RepositoryRef, TriggerEvent,
};

pub const INPUT_TOKEN: &str = "INPUT_TOKEN";
pub const INPUT_NAME_PATTERN: &str = "INPUT_NAME_PATTERN";

/// User-supplied action inputs.
#[derive(Clone)]
pub struct ActionInputs {
    pub token: String,
    pub name_pattern: NamePattern,
}

impl std::fmt::Debug for ActionInputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInputs")
            .field("token", &"[REDACTED]")
            .field("name_pattern", &self.name_pattern)
            .finish()
    }
}

impl ActionInputs {
    /// Validate raw input values: both required, pattern must carry `{number}`.
    pub fn resolve(token: Option<String>, name_pattern: Option<String>) -> Result<Self, AppError> {
        let token = required_input("token", token)?;
        let name_pattern = NamePattern::new(required_input("name_pattern", name_pattern)?)?;
        Ok(Self { token, name_pattern })
    }
}

fn required_input(name: &str, value: Option<String>) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingInput(name.to_string())),
    }
}

/// State the runner exposes through `GITHUB_*` variables.
#[derive(Debug, Clone)]
pub struct HostContext {
    pub trigger: TriggerEvent,
    pub repository: RepositoryRef,
    pub sha: String,
    pub api: GitHubApiConfig,
    pub debug: bool,
}

impl HostContext {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let repository = non_empty("GITHUB_REPOSITORY")
            .ok_or_else(|| {
                AppError::config_error(
                    "GITHUB_REPOSITORY environment variable like 'owner/repo' is required",
                )
            })?
            .parse::<RepositoryRef>()?;

        let sha = non_empty("GITHUB_SHA")
            .map(|sha| sha.trim().to_string())
            .ok_or_else(|| AppError::config_error("GITHUB_SHA environment variable is required"))?;

        let payload = match non_empty("GITHUB_EVENT_PATH") {
            Some(path) => EventPayload::load(Path::new(path.trim()))?,
            None => EventPayload::default(),
        };

        let trigger = TriggerEvent {
            kind: EventKind::parse(&lookup("GITHUB_EVENT_NAME").unwrap_or_default()),
            payload,
            git_ref: lookup("GITHUB_REF").map(|r| r.trim().to_string()).unwrap_or_default(),
        };

        let api = GitHubApiConfig::from_url_str(lookup("GITHUB_API_URL").as_deref())?;
        let debug = lookup("RUNNER_DEBUG").is_some_and(|value| value.trim() == "1");

        Ok(Self { trigger, repository, sha, api, debug })
    }
}

/// Everything the run needs, validated before any workflow starts.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub inputs: ActionInputs,
    pub host: HostContext,
}

impl ActionConfig {
    /// Load the host context from the process environment.
    ///
    /// `token` and `name_pattern` are the already-resolved input values (flag or
    /// `INPUT_*` variable) and take the place of the `INPUT_*` lookups.
    pub fn from_env(token: Option<String>, name_pattern: Option<String>) -> Result<Self, AppError> {
        Self::from_lookup(|key| match key {
            INPUT_TOKEN => token.clone(),
            INPUT_NAME_PATTERN => name_pattern.clone(),
            _ => std::env::var(key).ok(),
        })
    }

    /// Load from an arbitrary variable source. Inputs are validated first.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let inputs = ActionInputs::resolve(lookup(INPUT_TOKEN), lookup(INPUT_NAME_PATTERN))?;
        let host = HostContext::from_lookup(&lookup)?;
        Ok(Self { inputs, host })
    }
}
