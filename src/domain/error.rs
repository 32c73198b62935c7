use std::io;

use thiserror::Error;

/// Library-wide error type for issue-branch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required action input was absent or blank.
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    /// Name pattern lacks the `{number}` placeholder.
    #[error("Please use a name pattern with \"{{number}}\" included, e.g. \"issue-{{number}}\"")]
    InvalidNamePattern { pattern: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Event kind is neither `issues` nor `push`.
    #[error(
        "This action was not run using an \"issues\" or \"push\" event, please supply at least one of these events for this action to work."
    )]
    UnsupportedEvent(String),

    /// `issues` event without an issue in its payload.
    #[error("The \"issues\" event payload does not contain an issue")]
    MissingIssuePayload,

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// GitHub REST API call failed.
    #[error("GitHub API error{}: {message}", format_status(.status))]
    GitHubApi { message: String, status: Option<u16> },

    /// Creating the issue branch failed.
    #[error(
        "Error creating branch with repo \"{repository}\", branch name \"{branch}\" and sha \"{sha}\": {source}"
    )]
    BranchCreation {
        repository: String,
        branch: String,
        sha: String,
        #[source]
        source: Box<AppError>,
    },

    /// Both the draft and the non-draft pull request attempts failed.
    #[error("{error} (draft attempt: {draft_error})")]
    PullRequestFallback { draft_error: Box<AppError>, error: Box<AppError> },

    /// Any failure inside the push workflow.
    #[error("Error while creating PR: {source}")]
    PullRequestWorkflow {
        #[source]
        source: Box<AppError>,
    },
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({})", code)).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// HTTP status of the underlying GitHub API failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::GitHubApi { status, .. } => *status,
            AppError::BranchCreation { source, .. } | AppError::PullRequestWorkflow { source } => {
                source.status()
            }
            AppError::PullRequestFallback { error, .. } => error.status(),
            _ => None,
        }
    }

    /// Whether the failure happened before any workflow ran.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AppError::MissingInput(_)
                | AppError::InvalidNamePattern { .. }
                | AppError::Configuration(_)
                | AppError::UnsupportedEvent(_)
        )
    }
}
