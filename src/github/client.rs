use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::source::RepoSource;
use crate::models::Repository;

pub const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
    max_pages: u32,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitfolio/0.1"),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
            max_pages: 1,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Follow `Link: rel="next"` up to `max_pages` pages instead of the
    /// default single-page listing.
    pub fn with_pagination(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    async fn fetch_first_page(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.base_url, username, PER_PAGE
        );
        tracing::info!("Fetching repositories for: {}", username);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi { status, body });
        }

        let values: Vec<serde_json::Value> = response.json().await?;
        Ok(parse_repositories(values))
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn fetch_repos(&self, account: &str) -> Result<Vec<Repository>> {
        if self.max_pages > 1 {
            let url = format!("{}/users/{}/repos?sort=updated", self.base_url, account);
            let paginator = Paginator::new(&self.client);
            paginator.fetch_pages(&url, PER_PAGE, self.max_pages).await
        } else {
            self.fetch_first_page(account).await
        }
    }
}

/// Decodes listing elements one by one, skipping anything that does not
/// match the expected shape instead of failing the whole fetch.
pub(crate) fn parse_repositories(values: Vec<serde_json::Value>) -> Vec<Repository> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Repository>(value) {
            Ok(repo) => Some(repo),
            Err(e) => {
                tracing::warn!("Skipping malformed repository record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    fn repo_json(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "description": "Simple machine learning classifier in Python",
            "html_url": format!("https://github.com/test/{}", name),
            "language": "Python",
            "topics": ["machine-learning"],
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_fetch_repos_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/users/test/repos")
            .match_query(mockito::Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!([repo_json("ml-classifier"), repo_json("senti-pred")]).to_string())
            .create_async()
            .await;

        let client = GitHubClient::new(None)
            .unwrap()
            .with_base_url(server.url());
        let repos = client.fetch_repos("test").await.unwrap();

        mock.assert_async().await;
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "ml-classifier");
    }

    #[tokio::test]
    async fn test_fetch_repos_non_success_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Regex("/users/test/repos.*".into()))
            .with_status(403)
            .with_body("rate limit exceeded")
            .create_async()
            .await;

        let client = GitHubClient::new(None)
            .unwrap()
            .with_base_url(server.url());
        let err = client.fetch_repos("test").await.unwrap_err();

        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn test_malformed_elements_are_skipped() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", mockito::Matcher::Regex("/users/test/repos.*".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    repo_json("ml-classifier"),
                    { "name": "no-url-or-date" },
                    42
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let client = GitHubClient::new(None)
            .unwrap()
            .with_base_url(server.url());
        let repos = client.fetch_repos("test").await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "ml-classifier");
    }
}
