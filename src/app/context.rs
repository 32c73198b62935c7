use crate::domain::{NamePattern, RepositoryRef};
use crate::ports::{GitHub, Reporter};

/// Values fixed for the whole run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub repository: RepositoryRef,
    pub name_pattern: NamePattern,
    /// Commit that triggered the run.
    pub sha: String,
    pub debug: bool,
}

/// Application context holding dependencies for workflow execution.
pub struct AppContext<G: GitHub, R: Reporter> {
    github: G,
    reporter: R,
    settings: RunSettings,
}

impl<G: GitHub, R: Reporter> AppContext<G, R> {
    /// Create a new application context.
    pub fn new(github: G, reporter: R, settings: RunSettings) -> Self {
        Self { github, reporter, settings }
    }

    /// Get a reference to the repository gateway.
    pub fn github(&self) -> &G {
        &self.github
    }

    /// Get a reference to the run reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }
}
