//! HTTP client for the Reddit REST API.
//!
//! Exchanges client credentials for a bearer token at construction and talks
//! to the OAuth API host for all subsequent calls. Use [`RedditClient::new`]
//! for production or [`RedditClient::with_base_urls`] to point both hosts at
//! a mock server in tests.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use prodscout_core::DiscussionNode;

use crate::error::RedditError;
use crate::parse::comments_from_response;
use crate::types::{Listing, SubmissionSummary, Subreddit, Thing};

const AUTH_BASE_URL: &str = "https://www.reddit.com";
const API_BASE_URL: &str = "https://oauth.reddit.com";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Reddit API client holding a valid access token.
pub struct RedditClient {
    client: reqwest::Client,
    token: String,
    user_agent: String,
    api_base: String,
}

/// Credentials for the client-credentials OAuth grant.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl RedditClient {
    /// Creates a client against the production Reddit hosts.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] if the token exchange fails, or
    /// [`RedditError::Http`] if the underlying client cannot be built or
    /// the exchange request errors.
    pub async fn new(
        credentials: &RedditCredentials,
        timeout_secs: u64,
    ) -> Result<Self, RedditError> {
        Self::with_base_urls(credentials, timeout_secs, AUTH_BASE_URL, API_BASE_URL).await
    }

    /// Creates a client with custom auth/API hosts (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RedditClient::new`].
    pub async fn with_base_urls(
        credentials: &RedditCredentials,
        timeout_secs: u64,
        auth_base: &str,
        api_base: &str,
    ) -> Result<Self, RedditError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let token = Self::fetch_token(&client, credentials, auth_base).await?;

        Ok(Self {
            client,
            token,
            user_agent: credentials.user_agent.clone(),
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_token(
        client: &reqwest::Client,
        credentials: &RedditCredentials,
        auth_base: &str,
    ) -> Result<String, RedditError> {
        let url = format!("{}/api/v1/access_token", auth_base.trim_end_matches('/'));
        let response = client
            .post(url)
            .header("User-Agent", &credentials.user_agent)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::Api(format!(
                "token exchange failed with status {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| RedditError::Api(format!("token parse error: {e}")))?;

        Ok(token.access_token)
    }

    /// Fetches subreddit metadata from `/r/{name}/about`.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] for non-2xx responses (including 404 for
    /// unknown subreddits) and [`RedditError::Deserialize`] for unexpected
    /// response shapes.
    pub async fn subreddit_info(&self, name: &str) -> Result<Subreddit, RedditError> {
        let url = format!("{}/r/{name}/about", self.api_base);
        let body = self.get_json(&url, &[]).await?;

        let envelope: Thing<Subreddit> =
            serde_json::from_value(body).map_err(|e| RedditError::Deserialize {
                context: format!("subreddit_info({name})"),
                source: e,
            })?;

        Ok(envelope.data)
    }

    /// Searches a subreddit for submissions matching `term`.
    ///
    /// Results come back in Reddit's relevance order, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] for non-2xx responses and
    /// [`RedditError::Deserialize`] for unexpected response shapes.
    pub async fn search_submissions(
        &self,
        subreddit: &str,
        term: &str,
        limit: u32,
    ) -> Result<Vec<SubmissionSummary>, RedditError> {
        let url = format!("{}/r/{subreddit}/search", self.api_base);
        let limit = limit.to_string();
        let params = [
            ("q", term),
            ("restrict_sr", "true"),
            ("limit", limit.as_str()),
        ];
        let body = self.get_json(&url, &params).await?;

        let listing: Listing<SubmissionSummary> =
            serde_json::from_value(body).map_err(|e| RedditError::Deserialize {
                context: format!("search_submissions({subreddit}, {term})"),
                source: e,
            })?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect())
    }

    /// Fetches the full comment tree of one submission.
    ///
    /// Returns top-level comments with nested replies materialized, in the
    /// order the API lists them.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Api`] for non-2xx responses.
    pub async fn submission_comments(
        &self,
        submission_id: &str,
    ) -> Result<Vec<DiscussionNode>, RedditError> {
        let url = format!("{}/comments/{submission_id}", self.api_base);
        let body = self.get_json(&url, &[]).await?;
        Ok(comments_from_response(&body))
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, RedditError> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", &self.user_agent)
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::Api(format!(
                "request to {url} failed with status {}",
                response.status()
            )));
        }

        let body = response
            .json()
            .await
            .map_err(|e| RedditError::Api(format!("response parse error: {e}")))?;

        Ok(body)
    }
}
