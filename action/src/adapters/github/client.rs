//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::domain::ports::{AssignmentApi, GitHubIssue, GitHubPullRequest, GitHubUser, TeamLookup};
use crate::error::GitHubError;

/// Page size for list endpoints (GitHub's maximum)
const PER_PAGE: usize = 100;

/// Implementation of the GitHub REST API client
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(base_url: &str, token: &str) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GitHubError::Unauthorized)?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("auto-assign/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn repo_path(owner: &str, repo: &str) -> String {
        format!("/repos/{}/{}", encode(owner), encode(repo))
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, GitHubError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| GitHubError::Deserialization(e.to_string()))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), GitHubError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: reqwest::Response) -> GitHubError {
        let status = response.status().as_u16();
        let rate_limit_exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            == Some("0");
        let url = response.url().path().to_string();
        let message = response.text().await.unwrap_or_default();
        classify_status(status, rate_limit_exhausted, &url, message)
    }

    async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<GitHubIssue, GitHubError> {
        let resp = self
            .http
            .get(self.api_url(&format!("{}/issues/{}", Self::repo_path(owner, repo), number)))
            .send()
            .await?;

        self.handle_response(resp).await
    }
}

/// Map a failed response onto an error variant
fn classify_status(
    status: u16,
    rate_limit_exhausted: bool,
    path: &str,
    message: String,
) -> GitHubError {
    match status {
        401 => GitHubError::Unauthorized,
        429 => GitHubError::RateLimited,
        403 if rate_limit_exhausted => GitHubError::RateLimited,
        404 => GitHubError::NotFound(path.to_string()),
        _ => GitHubError::Api { status, message },
    }
}

/// Request types for GitHub API
#[derive(Serialize)]
struct AssigneesRequest<'a> {
    assignees: &'a [String],
}

#[derive(Serialize)]
struct ReviewersRequest<'a> {
    reviewers: &'a [String],
}

#[async_trait]
impl TeamLookup for GitHubClientImpl {
    async fn fetch_team_members(
        &self,
        org: &str,
        team: &str,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        let mut members = Vec::new();
        let mut page = 1;

        loop {
            let resp = self
                .http
                .get(self.api_url(&format!(
                    "/orgs/{}/teams/{}/members",
                    encode(org),
                    encode(team)
                )))
                .query(&[("per_page", PER_PAGE), ("page", page)])
                .send()
                .await?;

            let batch: Vec<GitHubUser> = self.handle_response(resp).await?;
            let done = batch.len() < PER_PAGE;
            members.extend(batch);
            if done {
                break;
            }
            page += 1;
        }

        tracing::debug!(org, team, members = members.len(), "Fetched team members");
        Ok(members)
    }
}

#[async_trait]
impl AssignmentApi for GitHubClientImpl {
    async fn fetch_current_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        Ok(self.get_issue(owner, repo, number).await?.assignees)
    }

    async fn fetch_current_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<GitHubUser>, GitHubError> {
        let resp = self
            .http
            .get(self.api_url(&format!("{}/pulls/{}", Self::repo_path(owner, repo), number)))
            .send()
            .await?;

        let pr: GitHubPullRequest = self.handle_response(resp).await?;
        Ok(pr.requested_reviewers)
    }

    async fn is_target_an_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<bool, GitHubError> {
        // The issues endpoint serves pull requests too, flagged by `pull_request`
        let issue = self.get_issue(owner, repo, number).await?;
        Ok(!issue.is_pull_request())
    }

    async fn add_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        let resp = self
            .http
            .post(self.api_url(&format!(
                "{}/issues/{}/assignees",
                Self::repo_path(owner, repo),
                number
            )))
            .json(&AssigneesRequest { assignees: logins })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    async fn remove_assignees(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        let resp = self
            .http
            .delete(self.api_url(&format!(
                "{}/issues/{}/assignees",
                Self::repo_path(owner, repo),
                number
            )))
            .json(&AssigneesRequest { assignees: logins })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    async fn request_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        let resp = self
            .http
            .post(self.api_url(&format!(
                "{}/pulls/{}/requested_reviewers",
                Self::repo_path(owner, repo),
                number
            )))
            .json(&ReviewersRequest { reviewers: logins })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    async fn remove_reviewers(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        logins: &[String],
    ) -> Result<(), GitHubError> {
        let resp = self
            .http
            .delete(self.api_url(&format!(
                "{}/pulls/{}/requested_reviewers",
                Self::repo_path(owner, repo),
                number
            )))
            .json(&ReviewersRequest { reviewers: logins })
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }
}
