use std::sync::Mutex;

use crate::domain::{
    AppError, BranchCreationRequest, PullCreationRequest, PullRequestInfo, PullRequestSummary,
    RepositoryInfo, RepositoryRef,
};
use crate::ports::GitHub;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubCall {
    GetRepository,
    ListPullRequests(String),
    CreateReference(BranchCreationRequest),
    CreatePullRequest(PullCreationRequest),
}

/// In-memory gateway that records every call and keeps created pulls.
pub struct FakeGitHub {
    default_branch: String,
    pulls: Mutex<Vec<PullRequestSummary>>,
    pull_failures: Mutex<Vec<(String, u16)>>,
    reference_failure: Option<(String, u16)>,
    repository_failure: Option<(String, u16)>,
    list_failure: Option<(String, u16)>,
    pub calls: Mutex<Vec<GitHubCall>>,
}

impl Default for FakeGitHub {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self {
            default_branch: "main".to_string(),
            pulls: Mutex::new(Vec::new()),
            pull_failures: Mutex::new(Vec::new()),
            reference_failure: None,
            repository_failure: None,
            list_failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_default_branch(mut self, branch: &str) -> Self {
        self.default_branch = branch.to_string();
        self
    }

    pub fn with_open_pull(self, head_label: &str) -> Self {
        self.pulls.lock().unwrap().push(PullRequestSummary { head_label: head_label.to_string() });
        self
    }

    /// Queue a failure for the next pull request creation attempt.
    pub fn failing_pull_creation(self, message: &str, status: u16) -> Self {
        self.pull_failures.lock().unwrap().push((message.to_string(), status));
        self
    }

    pub fn failing_reference(mut self, message: &str, status: u16) -> Self {
        self.reference_failure = Some((message.to_string(), status));
        self
    }

    pub fn failing_repository(mut self, message: &str, status: u16) -> Self {
        self.repository_failure = Some((message.to_string(), status));
        self
    }

    pub fn failing_list(mut self, message: &str, status: u16) -> Self {
        self.list_failure = Some((message.to_string(), status));
        self
    }

    pub fn recorded(&self) -> Vec<GitHubCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn pull_attempts(&self) -> Vec<PullCreationRequest> {
        self.recorded()
            .into_iter()
            .filter_map(|call| match call {
                GitHubCall::CreatePullRequest(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    /// Whether any call wrote to the repository.
    pub fn wrote_anything(&self) -> bool {
        self.recorded().iter().any(|call| {
            matches!(call, GitHubCall::CreateReference(_) | GitHubCall::CreatePullRequest(_))
        })
    }

    fn record(&self, call: GitHubCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn api_error(failure: &(String, u16)) -> AppError {
    AppError::GitHubApi { message: failure.0.clone(), status: Some(failure.1) }
}

impl GitHub for FakeGitHub {
    fn get_repository(&self, _repository: &RepositoryRef) -> Result<RepositoryInfo, AppError> {
        self.record(GitHubCall::GetRepository);
        if let Some(failure) = &self.repository_failure {
            return Err(api_error(failure));
        }
        Ok(RepositoryInfo { default_branch: self.default_branch.clone() })
    }

    fn list_pull_requests(
        &self,
        _repository: &RepositoryRef,
        head: &str,
    ) -> Result<Vec<PullRequestSummary>, AppError> {
        self.record(GitHubCall::ListPullRequests(head.to_string()));
        if let Some(failure) = &self.list_failure {
            return Err(api_error(failure));
        }
        Ok(self.pulls.lock().unwrap().iter().filter(|pull| pull.head_label == head).cloned().collect())
    }

    fn create_reference(&self, request: &BranchCreationRequest) -> Result<(), AppError> {
        self.record(GitHubCall::CreateReference(request.clone()));
        match &self.reference_failure {
            Some(failure) => Err(api_error(failure)),
            None => Ok(()),
        }
    }

    fn create_pull_request(
        &self,
        request: &PullCreationRequest,
    ) -> Result<PullRequestInfo, AppError> {
        self.record(GitHubCall::CreatePullRequest(request.clone()));
        let mut failures = self.pull_failures.lock().unwrap();
        if !failures.is_empty() {
            return Err(api_error(&failures.remove(0)));
        }

        let mut pulls = self.pulls.lock().unwrap();
        pulls.push(PullRequestSummary { head_label: request.head.clone() });
        Ok(PullRequestInfo {
            number: pulls.len() as u64,
            url: format!("https://github.com/acme/widgets/pull/{}", pulls.len()),
            draft: request.draft,
        })
    }
}
