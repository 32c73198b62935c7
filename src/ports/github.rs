use crate::domain::{
    AppError, BranchCreationRequest, PullCreationRequest, PullRequestInfo, PullRequestSummary,
    RepositoryInfo, RepositoryRef,
};

/// Remote repository operations used by the workflows.
pub trait GitHub {
    /// Fetch repository metadata (default branch).
    fn get_repository(&self, repository: &RepositoryRef) -> Result<RepositoryInfo, AppError>;

    /// List open pull requests whose head is `head` (`owner:branch`).
    fn list_pull_requests(
        &self,
        repository: &RepositoryRef,
        head: &str,
    ) -> Result<Vec<PullRequestSummary>, AppError>;

    /// Create a git reference pointing at the request's commit.
    fn create_reference(&self, request: &BranchCreationRequest) -> Result<(), AppError>;

    /// Open a pull request that converts the referenced issue.
    fn create_pull_request(
        &self,
        request: &PullCreationRequest,
    ) -> Result<PullRequestInfo, AppError>;
}
