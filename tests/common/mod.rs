#![allow(dead_code)]

use serde_json::{json, Value};
use starred_export::GitHubClient;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "alice";
pub const TOKEN: &str = "T";

/// A starred repository as GitHub serializes it, trimmed to a realistic subset.
pub fn repo_json(index: usize) -> Value {
    json!({
        "id": 1000 + index,
        "node_id": format!("R_kgDO{index:04}"),
        "name": format!("repo-{index}"),
        "full_name": format!("owner/repo-{index}"),
        "private": false,
        "owner": {
            "login": "owner",
            "id": 42,
            "html_url": "https://github.com/owner",
            "type": "User",
            "site_admin": false
        },
        "html_url": format!("https://github.com/owner/repo-{index}"),
        "description": format!("Repository number {index}"),
        "fork": false,
        "created_at": "2020-01-02T03:04:05Z",
        "updated_at": "2024-06-07T08:09:10Z",
        "pushed_at": "2024-06-07T08:09:10Z",
        "stargazers_count": index * 10,
        "watchers_count": index * 10,
        "language": "Rust",
        "forks_count": index,
        "license": {
            "key": "mit",
            "name": "MIT License",
            "spdx_id": "MIT",
            "url": null,
            "node_id": "MDc6TGljZW5zZTEz"
        },
        "topics": ["cli", "rust"],
        "visibility": "public",
        "default_branch": "main"
    })
}

/// `count` repositories numbered from `start`.
pub fn page_json(start: usize, count: usize) -> Value {
    Value::Array((start..start + count).map(repo_json).collect())
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_options(TOKEN.to_string(), &server.uri(), Duration::from_secs(5))
        .expect("Failed to create client")
}

/// Serve `body` for exactly one request to the given page.
pub async fn mount_page(server: &MockServer, page: u32, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{USERNAME}/starred")))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", "100"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if the given page is ever requested.
pub async fn forbid_page(server: &MockServer, page: u32) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{USERNAME}/starred")))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(server)
        .await;
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
