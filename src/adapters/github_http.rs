//! GitHub REST client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    AppError, BranchCreationRequest, GitHubApiConfig, PullCreationRequest, PullRequestInfo,
    PullRequestSummary, RepositoryInfo, RepositoryRef,
};
use crate::ports::GitHub;

const GITHUB_JSON: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("issue-branch/", env!("CARGO_PKG_VERSION"));
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";

/// HTTP transport for the GitHub REST API.
///
/// Each call performs exactly one request.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a new client authenticated with `token`.
    pub fn new(token: String, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::GitHubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { token, api_url: config.api_url.clone(), client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::config_error(format!("Invalid GitHub API URL: {}", self.api_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn repo_endpoint(&self, repository: &RepositoryRef, rest: &[&str]) -> Result<Url, AppError> {
        let mut segments = vec!["repos", repository.owner.as_str(), repository.name.as_str()];
        segments.extend_from_slice(rest);
        self.endpoint(&segments)
    }

    /// Send the request and return the body of a successful response.
    fn send(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(X_GITHUB_API_VERSION, API_VERSION)
            .send()
            .map_err(|e| AppError::GitHubApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "GitHub API response");
        let body_text = response.text().map_err(|e| AppError::GitHubApi {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                status.canonical_reason().unwrap_or(DEFAULT_STATUS_MESSAGE).to_string()
            }
        });

        Err(AppError::GitHubApi { message, status: Some(status.as_u16()) })
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, AppError> {
        let body = self.send(request)?;
        serde_json::from_str(&body).map_err(|e| AppError::ParseError {
            what: format!("{} response", what),
            details: e.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct PullListItem {
    head: PullHead,
}

#[derive(Debug, Deserialize)]
struct PullHead {
    label: String,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    number: u64,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    draft: bool,
}

#[derive(Debug, Serialize)]
struct CreateRefBody<'a> {
    #[serde(rename = "ref")]
    git_ref: String,
    sha: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePullBody<'a> {
    base: &'a str,
    head: &'a str,
    draft: bool,
    issue: u64,
}

/// Pull the human-readable message out of a GitHub error body.
///
/// Validation failures carry details in `errors[].message`; those are appended.
fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let message = parsed.get("message").and_then(|message| message.as_str())?;

    let details: Vec<&str> = parsed
        .get("errors")
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors.iter().filter_map(|error| error.get("message")?.as_str()).collect()
        })
        .unwrap_or_default();

    if details.is_empty() {
        Some(message.to_string())
    } else {
        Some(format!("{}: {}", message, details.join("; ")))
    }
}

impl GitHub for HttpGitHubClient {
    fn get_repository(&self, repository: &RepositoryRef) -> Result<RepositoryInfo, AppError> {
        let url = self.repo_endpoint(repository, &[])?;
        tracing::debug!(%url, "fetching repository");
        let repo: RepoResponse = self.send_json(self.client.get(url), "repository")?;
        Ok(RepositoryInfo { default_branch: repo.default_branch })
    }

    fn list_pull_requests(
        &self,
        repository: &RepositoryRef,
        head: &str,
    ) -> Result<Vec<PullRequestSummary>, AppError> {
        let url = self.repo_endpoint(repository, &["pulls"])?;
        tracing::debug!(%url, head, "listing pull requests");
        let pulls: Vec<PullListItem> =
            self.send_json(self.client.get(url).query(&[("head", head)]), "pull request list")?;
        Ok(pulls.into_iter().map(|pull| PullRequestSummary { head_label: pull.head.label }).collect())
    }

    fn create_reference(&self, request: &BranchCreationRequest) -> Result<(), AppError> {
        let url = self.repo_endpoint(&request.repository, &["git", "refs"])?;
        let body = CreateRefBody { git_ref: request.git_ref(), sha: &request.sha };
        tracing::debug!(%url, git_ref = %body.git_ref, sha = body.sha, "creating reference");
        self.send(self.client.post(url).json(&body))?;
        Ok(())
    }

    fn create_pull_request(
        &self,
        request: &PullCreationRequest,
    ) -> Result<PullRequestInfo, AppError> {
        let url = self.repo_endpoint(&request.repository, &["pulls"])?;
        let body = CreatePullBody {
            base: &request.base,
            head: &request.head,
            draft: request.draft,
            issue: request.issue_number,
        };
        tracing::debug!(%url, head = body.head, draft = body.draft, "creating pull request");
        let pull: PullResponse = self.send_json(self.client.post(url).json(&body), "pull request")?;
        Ok(PullRequestInfo { number: pull.number, url: pull.html_url, draft: pull.draft })
    }
}
