//! Event workflows.
//!
//! `dispatch` routes the triggering event to the issue or push workflow.

pub mod dispatch;
pub mod issue;
pub mod push;

use std::fmt;

/// How a workflow finished when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Issue branch created.
    BranchCreated { branch: String },
    /// Pull request opened for the pushed branch.
    PullRequestCreated { issue_number: u64, number: u64, draft: bool },
    /// Pushed branch does not follow the name pattern.
    Ignored { branch: String },
    /// A pull request for the head already exists.
    AlreadyOpen { head: String },
}

impl fmt::Display for WorkflowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowOutcome::BranchCreated { branch } => {
                write!(f, "Successfully created branch with name \"{}\"", branch)
            }
            WorkflowOutcome::PullRequestCreated { issue_number, .. } => {
                write!(f, "Successfully created PR for issue #{}", issue_number)
            }
            WorkflowOutcome::Ignored { .. } => {
                f.write_str("Branch name doesn't match name pattern, aborting peacefully...")
            }
            WorkflowOutcome::AlreadyOpen { .. } => {
                f.write_str("Pull request already created, aborting peacefully...")
            }
        }
    }
}
