//! Route the triggering event to its workflow and report the result.

use crate::app::AppContext;
use crate::app::commands::{WorkflowOutcome, issue, push};
use crate::domain::{AppError, EventKind, PushContext, TriggerEvent};
use crate::ports::{GitHub, Reporter};

/// Run the workflow matching `trigger.kind`.
pub fn execute<G: GitHub, R: Reporter>(
    ctx: &AppContext<G, R>,
    trigger: &TriggerEvent,
) -> Result<WorkflowOutcome, AppError> {
    tracing::debug!(event = %trigger.kind, action = ?trigger.payload.action, "dispatching event");
    match &trigger.kind {
        EventKind::Issues => issue::execute(ctx, trigger.payload.issue),
        EventKind::Push => {
            let push = PushContext {
                git_ref: trigger.git_ref.clone(),
                sha: ctx.settings().sha.clone(),
            };
            push::execute(ctx, &push)
        }
        EventKind::Other(name) => Err(AppError::UnsupportedEvent(name.clone())),
    }
}

/// Execute and report: one info line on success, one failure otherwise.
///
/// Returns the process exit code.
pub fn run<G: GitHub, R: Reporter>(ctx: &AppContext<G, R>, trigger: &TriggerEvent) -> i32 {
    match execute(ctx, trigger) {
        Ok(outcome) => {
            ctx.reporter().info(&outcome.to_string());
            0
        }
        Err(err) => {
            tracing::debug!(error = ?err, status = ?err.status(), "workflow failed");
            ctx.reporter().fail(&err.to_string());
            1
        }
    }
}
