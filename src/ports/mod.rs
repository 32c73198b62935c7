mod github;
mod reporter;

pub use github::GitHub;
pub use reporter::Reporter;
