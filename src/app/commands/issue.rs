//! Issue workflow: create `refs/heads/<pattern rendered with issue number>`.

use crate::app::AppContext;
use crate::app::commands::WorkflowOutcome;
use crate::domain::{AppError, BranchCreationRequest, IssueContext};
use crate::ports::{GitHub, Reporter};

/// Create the branch for a newly opened issue at the triggering commit.
pub fn execute<G: GitHub, R: Reporter>(
    ctx: &AppContext<G, R>,
    issue: Option<IssueContext>,
) -> Result<WorkflowOutcome, AppError> {
    let issue = issue.ok_or(AppError::MissingIssuePayload)?;
    let settings = ctx.settings();

    let request = BranchCreationRequest {
        branch_name: settings.name_pattern.render(issue.number),
        repository: settings.repository.clone(),
        sha: settings.sha.clone(),
    };
    tracing::debug!(issue = issue.number, branch = %request.branch_name, "creating issue branch");

    ctx.github().create_reference(&request).map_err(|source| AppError::BranchCreation {
        repository: request.repository.to_string(),
        branch: request.branch_name.clone(),
        sha: request.sha.clone(),
        source: Box::new(source),
    })?;

    Ok(WorkflowOutcome::BranchCreated { branch: request.branch_name })
}
