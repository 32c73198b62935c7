//! Repository coordinates and the request/response values exchanged with GitHub.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Target repository, e.g. `acme/widgets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self { owner: owner.into(), name: name.into() }
    }

    /// `owner:branch` head label for a branch of this repository.
    pub fn head_for(&self, branch: &str) -> String {
        format!("{}:{}", self.owner, branch)
    }
}

impl FromStr for RepositoryRef {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(AppError::ParseError {
                what: "repository".into(),
                details: format!("expected 'owner/repo', got '{}'", s),
            }),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository metadata needed by the push workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    pub default_branch: String,
}

/// Pull request as returned by a head-filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub head_label: String,
}

/// Pull request created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub url: String,
    pub draft: bool,
}

/// Request to create a branch for an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCreationRequest {
    pub branch_name: String,
    pub repository: RepositoryRef,
    pub sha: String,
}

impl BranchCreationRequest {
    /// Fully qualified ref, `refs/heads/<branch>`.
    pub fn git_ref(&self) -> String {
        format!("refs/heads/{}", self.branch_name)
    }
}

/// Request to open a pull request that resolves an existing issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullCreationRequest {
    pub repository: RepositoryRef,
    pub base: String,
    pub head: String,
    pub draft: bool,
    pub issue_number: u64,
}

impl PullCreationRequest {
    /// Same request, not flagged as draft.
    pub fn as_ready_for_review(&self) -> Self {
        Self { draft: false, ..self.clone() }
    }
}
