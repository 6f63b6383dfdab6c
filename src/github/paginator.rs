use reqwest::Client;

use crate::error::{Error, Result};
use crate::github::client::parse_repositories;
use crate::models::Repository;

/// Bounded page walker for the repository listing endpoint. Stops on a short
/// page, a missing `rel="next"` link, or the page cap.
pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn fetch_pages(
        &self,
        base_url: &str,
        per_page: u32,
        max_pages: u32,
    ) -> Result<Vec<Repository>> {
        let mut all_repos = Vec::new();
        let mut page = 1;

        loop {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GitHubApi { status, body });
            }

            let has_next = response
                .headers()
                .get("link")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.contains("rel=\"next\""))
                .unwrap_or(false);

            let values: Vec<serde_json::Value> = response.json().await?;
            let page_size = values.len();
            all_repos.extend(parse_repositories(values));

            if !has_next || page_size < per_page as usize || page >= max_pages {
                break;
            }

            page += 1;
        }

        Ok(all_repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn page_body(names: &[&str]) -> String {
        let repos: Vec<_> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "html_url": format!("https://github.com/test/{}", name),
                    "created_at": "2023-06-01T00:00:00Z"
                })
            })
            .collect();
        json!(repos).to_string()
    }

    #[tokio::test]
    async fn test_follows_next_links_until_short_page() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/users/test/repos")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_header("link", "<next>; rel=\"next\"")
            .with_body(page_body(&["a", "b"]))
            .create_async()
            .await;
        server
            .mock("GET", "/users/test/repos")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body(page_body(&["c"]))
            .create_async()
            .await;

        let client = Client::new();
        let url = format!("{}/users/test/repos?sort=updated", server.url());
        let repos = Paginator::new(&client).fetch_pages(&url, 2, 10).await.unwrap();

        assert_eq!(repos.len(), 3);
        assert_eq!(repos[2].name, "c");
    }

    #[tokio::test]
    async fn test_respects_page_cap() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Regex("/users/test/repos.*".into()))
            .with_status(200)
            .with_header("link", "<next>; rel=\"next\"")
            .with_body(page_body(&["a", "b"]))
            .expect(1)
            .create_async()
            .await;

        let client = Client::new();
        let url = format!("{}/users/test/repos", server.url());
        let repos = Paginator::new(&client).fetch_pages(&url, 2, 1).await.unwrap();

        mock.assert_async().await;
        assert_eq!(repos.len(), 2);
    }
}
