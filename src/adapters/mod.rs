pub mod actions_reporter;
pub mod github_http;

pub use actions_reporter::ActionsReporter;
pub use github_http::HttpGitHubClient;
