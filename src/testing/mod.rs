mod fake_github;
mod recording_reporter;

pub use fake_github::{FakeGitHub, GitHubCall};
pub use recording_reporter::RecordingReporter;

use crate::app::{AppContext, RunSettings};
use crate::domain::{NamePattern, RepositoryRef};

/// Settings for `acme/widgets` with pattern `issue-{number}` at `abc123`.
pub fn settings() -> RunSettings {
    RunSettings {
        repository: RepositoryRef::new("acme", "widgets"),
        name_pattern: NamePattern::new("issue-{number}").unwrap(),
        sha: "abc123".to_string(),
        debug: false,
    }
}

pub fn context(github: FakeGitHub) -> AppContext<FakeGitHub, RecordingReporter> {
    AppContext::new(github, RecordingReporter::default(), settings())
}
