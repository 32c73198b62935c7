//! issue-branch: link GitHub issues, branches and pull requests from a workflow run.
//!
//! An `issues` event creates a branch named after the issue; a `push` to such a
//! branch opens a draft pull request that closes the issue.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::commands::WorkflowOutcome;
pub use domain::{AppError, NamePattern};
