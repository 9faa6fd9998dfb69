use crate::error::{Result, StarredExportError};
use crate::types::{ApiErrorPayload, Page, PER_PAGE};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
// Field-level decoding depends on this schema revision.
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("starred-export/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_options(token, API_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Build a client against an arbitrary API root, e.g. a GitHub Enterprise
    /// `https://host/api/v3` or a local mock server.
    pub fn with_options(token: String, api_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(api_url)
            .map_err(|e| StarredExportError::InvalidApiUrl(format!("{}: {}", api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(StarredExportError::InvalidApiUrl(api_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            base_url,
        })
    }

    /// URL of one page of a user's starred repositories. The username is
    /// percent-encoded as a single path segment.
    pub fn starred_page_url(&self, username: &str, page: u32) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", username, "starred"]);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PER_PAGE.to_string());
        url
    }

    /// Fetch a single page of starred repositories.
    ///
    /// Issues exactly one request. A non-200 status is decoded as GitHub's
    /// error body and reported as [`StarredExportError::ApiError`]; bodies
    /// that do not parse are reported as [`StarredExportError::JsonError`].
    pub async fn fetch_starred_page(&self, username: &str, page: u32) -> Result<Page> {
        let url = self.starred_page_url(username, page);
        debug!(%url, page, "Requesting starred repositories");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .bearer_auth(&self.token)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            let payload: ApiErrorPayload = serde_json::from_slice(&body)?;
            return Err(StarredExportError::ApiError {
                status: status.as_u16(),
                message: payload.message,
                documentation_url: payload.documentation_url,
            });
        }

        let repos: Page = serde_json::from_slice(&body)?;
        Ok(repos)
    }
}
