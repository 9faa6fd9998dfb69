use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Maximum number of records GitHub returns per page.
pub const PER_PAGE: usize = 100;

/// Pages are 1-indexed.
pub const FIRST_PAGE: u32 = 1;

/// One page of starred repositories, in the order the API returned them.
pub type Page = Vec<StarredRepo>;

// GitHub API response structures

/// A repository from `/users/{username}/starred`, as returned at fetch time.
///
/// Only the fields the writers consume are typed. Everything else in the
/// payload (owner, internal URLs, license, visibility flags) lands in `extra`
/// so new upstream fields never break decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarredRepo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error body GitHub sends alongside any non-200 status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorPayload {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
