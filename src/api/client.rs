//! JIRA API client implementation.
//!
//! This module provides the client for the JIRA REST API v2. It attaches
//! basic authentication when credentials are configured, turns non-success
//! responses into typed errors, and decodes JSON bodies into the types in
//! [`super::types`]. Requests are issued one at a time and never retried.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::query::{build_search_body, resource_url, API_SUFFIX};
use super::types::{Issue, Project, SearchResult};
use crate::config::Configuration;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A response as received, before any status or body interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status.
    pub status: StatusCode,
    /// The response headers.
    pub headers: header::HeaderMap,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Fail with an [`ApiError`] unless the status is 2xx.
    fn error_for_status(self, url: &str) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            debug!(
                "Error response body: {}",
                String::from_utf8_lossy(&self.body)
            );
            Err(ApiError::from_response(self.status, url, &self.body))
        }
    }
}

/// The JIRA API client.
#[derive(Debug)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// The base URL for the JIRA instance, without trailing slash.
    base_url: String,
    /// Basic auth, present only when credentials are configured.
    auth: Option<Auth>,
}

impl JiraClient {
    /// Create a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(url = %config.service.url))]
    pub fn new(config: &Configuration) -> Result<Self> {
        let auth = config.credentials.as_ref().map(Auth::from_credentials);
        match &auth {
            Some(auth) => info!(user = %auth.user(), "Using basic authentication"),
            None => info!("No credentials configured, sending anonymous requests"),
        }

        Ok(Self {
            client: Self::build_http_client()?,
            base_url: normalize_base_url(&config.service.url),
            auth,
        })
    }

    /// Build the HTTP client with appropriate settings.
    fn build_http_client() -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Network)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a single request.
    ///
    /// Without a body this is a GET; with a body it is a POST of
    /// `application/json`. The status is returned as-is, not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on transport failure.
    #[instrument(skip(self, body), fields(post = body.is_some()))]
    pub async fn request(&self, url: &str, body: Option<&str>) -> Result<RawResponse> {
        let builder = match body {
            Some(body) => self
                .client
                .post(url)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_string()),
            None => self.client.get(url),
        };

        let builder = match &self.auth {
            Some(auth) => builder.header(header::AUTHORIZATION, auth.header_value()),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        debug!(status = %status, bytes = body.len(), "Response received");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// GET a resource and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.request(url, None).await?;
        parse_json(url, response)
    }

    /// POST a JSON body and decode the JSON response.
    async fn post_json<T: DeserializeOwned>(&self, url: &str, body: &str) -> Result<T> {
        let response = self.request(url, Some(body)).await?;
        parse_json(url, response)
    }

    /// URL of a resource under the REST API.
    fn api_url(&self, resource: &str) -> String {
        resource_url(&self.base_url, API_SUFFIX, resource)
    }

    /// List all projects visible to the user.
    ///
    /// Calls `GET /rest/api/2/project`.
    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.get_json(&self.api_url("project")).await?;
        debug!("Fetched {} projects", projects.len());
        Ok(projects)
    }

    /// Get a single issue by key.
    ///
    /// Calls `GET /rest/api/2/issue/{key}`.
    #[instrument(skip(self), fields(issue_key = %key))]
    pub async fn get_issue(&self, key: &str) -> Result<Issue> {
        let url = self.api_url(&format!("issue/{}", urlencoding::encode(key)));
        let issue: Issue = self.get_json(&url).await.map_err(|e| match e {
            ApiError::NotFound(_) => ApiError::NotFound(format!("Issue '{}' not found", key)),
            e => e,
        })?;

        debug!("Fetched issue: {}", issue.key);
        Ok(issue)
    }

    /// Search for issues using JQL.
    ///
    /// Calls `POST /rest/api/2/search` with `{"jql", "maxResults"}`.
    #[instrument(skip(self), fields(jql = %jql))]
    pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<SearchResult> {
        let body = build_search_body(jql, max_results);
        let result: SearchResult = self.post_json(&self.api_url("search"), &body).await?;

        debug!("Found {} issues (total: {})", result.issues.len(), result.total);
        Ok(result)
    }

    /// Download raw bytes from an absolute URL, such as an attachment link.
    #[instrument(skip(self))]
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.request(url, None).await?.error_for_status(url)?;
        let content_type = response
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");
        debug!(content_type, "Downloaded content");
        Ok(response.body)
    }
}

/// Check the status of a response and decode its JSON body.
fn parse_json<T: DeserializeOwned>(url: &str, response: RawResponse) -> Result<T> {
    let response = response.error_for_status(url)?;
    serde_json::from_slice(&response.body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

/// Normalize the base URL by removing trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. Credentials are sent in clear text.", url);
    }

    url.to_string()
}
