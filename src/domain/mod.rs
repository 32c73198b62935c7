pub mod api_config;
pub mod error;
pub mod event;
pub mod name_pattern;
pub mod repository;

pub use api_config::GitHubApiConfig;
pub use error::AppError;
pub use event::{EventKind, EventPayload, IssueContext, PushContext, TriggerEvent};
pub use name_pattern::{NUMBER_PLACEHOLDER, NamePattern};
pub use repository::{
    BranchCreationRequest, PullCreationRequest, PullRequestInfo, PullRequestSummary,
    RepositoryInfo, RepositoryRef,
};
