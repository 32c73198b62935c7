//! Push workflow: open a pull request linking a pattern branch to its issue.
//!
//! Steps: extract branch, validate against the pattern, fetch the default
//! branch, skip when a pull request for the head exists, then create a draft
//! pull request, retrying once as non-draft.

use crate::app::AppContext;
use crate::app::commands::WorkflowOutcome;
use crate::domain::{AppError, PullCreationRequest, PullRequestInfo, PushContext};
use crate::ports::{GitHub, Reporter};

/// Run the push workflow. Every failure is wrapped into a single PR error.
pub fn execute<G: GitHub, R: Reporter>(
    ctx: &AppContext<G, R>,
    push: &PushContext,
) -> Result<WorkflowOutcome, AppError> {
    open_pull_request(ctx, push)
        .map_err(|source| AppError::PullRequestWorkflow { source: Box::new(source) })
}

fn open_pull_request<G: GitHub, R: Reporter>(
    ctx: &AppContext<G, R>,
    push: &PushContext,
) -> Result<WorkflowOutcome, AppError> {
    let settings = ctx.settings();
    let branch = push.branch_name();

    let Some(issue_number) = settings.name_pattern.extract_number(branch) else {
        tracing::debug!(branch, pattern = %settings.name_pattern, "branch outside name pattern");
        return Ok(WorkflowOutcome::Ignored { branch: branch.to_string() });
    };

    let base = ctx.github().get_repository(&settings.repository)?.default_branch;
    let head = settings.repository.head_for(branch);

    let pulls = ctx.github().list_pull_requests(&settings.repository, &head)?;
    if settings.debug {
        let labels: Vec<&str> = pulls.iter().map(|pull| pull.head_label.as_str()).collect();
        ctx.reporter()
            .info(&format!("Found pull requests for refs: \"{}\"", labels.join("\", \"")));
    }
    if !pulls.is_empty() {
        return Ok(WorkflowOutcome::AlreadyOpen { head });
    }

    let request = PullCreationRequest {
        repository: settings.repository.clone(),
        base,
        head,
        draft: true,
        issue_number,
    };
    let pull = create_with_fallback(ctx.github(), ctx.reporter(), &request)?;
    tracing::debug!(number = pull.number, url = %pull.url, draft = pull.draft, "pull request created");

    Ok(WorkflowOutcome::PullRequestCreated { issue_number, number: pull.number, draft: pull.draft })
}

/// Try the request as given; on any failure retry once as non-draft.
fn create_with_fallback(
    github: &impl GitHub,
    reporter: &impl Reporter,
    request: &PullCreationRequest,
) -> Result<PullRequestInfo, AppError> {
    match github.create_pull_request(request) {
        Ok(pull) => Ok(pull),
        Err(draft_error) => {
            reporter.debug(&format!(
                "Draft pull request creation failed ({}), retrying as non-draft",
                draft_error
            ));
            github.create_pull_request(&request.as_ready_for_review()).map_err(|error| {
                AppError::PullRequestFallback {
                    draft_error: Box::new(draft_error),
                    error: Box::new(error),
                }
            })
        }
    }
}
