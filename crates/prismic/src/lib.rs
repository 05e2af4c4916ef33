mod document;
mod predicates;

pub use document::{ApiData, ApiRef, Banner, ContentBlock, Document, DocumentData, Paragraph, SearchResponse};
pub use predicates::{query_param, Predicate, QueryOptions};

use anyhow::{Context, Result};

/// Client for one Prismic repository. Holds the access token so it is
/// appended server-side and never has to travel with cursors or callers.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl Client {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        let mut endpoint = endpoint.into();
        // Remove trailing slash if present
        if endpoint.ends_with('/') {
            endpoint.pop();
        }
        Self {
            http,
            endpoint,
            access_token,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether `url` points back into this repository's API. Cursor URLs
    /// handed out by the API always do.
    pub fn is_same_repository(&self, url: &str) -> bool {
        url.starts_with(&self.endpoint)
    }

    /// Resolves the current master ref. Queries must carry a ref, and the
    /// master ref moves on every publish, so this is fetched per query.
    async fn master_ref(&self) -> Result<String> {
        let mut request = self.http.get(&self.endpoint);
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        let res = request
            .send()
            .await
            .context("Failed to reach the repository API")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("Repository API failed: {} - {}", status, text);
        }

        let api: ApiData = res
            .json()
            .await
            .context("Failed to parse repository API response")?;

        api.master_ref()
            .map(str::to_string)
            .context("Repository API returned no master ref")
    }

    /// Runs a predicate search against the repository.
    pub async fn search(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> Result<SearchResponse> {
        let reference = self.master_ref().await?;
        let q = query_param(predicates);

        tracing::debug!("Searching documents (q={}, options={:?})", q, options);

        let url = format!("{}/documents/search", self.endpoint);
        let mut request = self
            .http
            .get(&url)
            .query(&[("ref", reference.as_str()), ("q", q.as_str())]);

        if let Some(page_size) = options.page_size {
            request = request.query(&[("pageSize", page_size.to_string())]);
        }
        if let Some(orderings) = &options.orderings {
            request = request.query(&[("orderings", orderings.as_str())]);
        }
        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        let res = request
            .send()
            .await
            .context("Failed to send search request")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("Search API failed: {} - {}", status, text);
        }

        res.json().await.context("Failed to parse search response")
    }

    /// Resolves a single document of `doc_type` by its UID.
    pub async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<Document>> {
        let predicates = [
            Predicate::at("document.type", doc_type),
            Predicate::at(format!("my.{}.uid", doc_type), uid),
        ];
        let options = QueryOptions {
            page_size: Some(1),
            ..Default::default()
        };

        let mut response = self.search(&predicates, &options).await?;
        if response.results.is_empty() {
            Ok(None)
        } else {
            Ok(Some(response.results.remove(0)))
        }
    }

    /// Follows a previously issued `next_page` URL and parses the page.
    pub async fn fetch_page(&self, url: &str) -> Result<SearchResponse> {
        let body = self.fetch_page_raw(url).await?;
        serde_json::from_str(&body).context("Failed to parse page response")
    }

    /// Follows a previously issued `next_page` URL and returns the body
    /// verbatim. Used by the relay so the browser sees exactly what the
    /// API answered.
    pub async fn fetch_page_raw(&self, url: &str) -> Result<String> {
        let url = self.authorized_url(url);

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to fetch page")?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            anyhow::bail!("Page fetch failed: {} - {}", status, text);
        }

        res.text().await.context("Failed to read page body")
    }

    // Cursor URLs always carry a query string already, so appending with
    // '&' is safe.
    fn authorized_url(&self, url: &str) -> String {
        match &self.access_token {
            Some(token) => format!("{}&access_token={}", url, urlencoding::encode(token)),
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> Client {
        Client::new(
            reqwest::Client::new(),
            "https://repo.cdn.prismic.io/api/v2/",
            token.map(str::to_string),
        )
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        assert_eq!(client(None).endpoint(), "https://repo.cdn.prismic.io/api/v2");
    }

    #[test]
    fn test_is_same_repository() {
        let client = client(None);
        assert!(client
            .is_same_repository("https://repo.cdn.prismic.io/api/v2/documents/search?ref=x&page=2"));
        assert!(!client.is_same_repository("https://attacker.example/api/v2/documents/search"));
    }

    #[test]
    fn test_authorized_url_appends_encoded_token() {
        let client = client(Some("se cret"));
        assert_eq!(
            client.authorized_url("https://repo.cdn.prismic.io/api/v2/documents/search?ref=x"),
            "https://repo.cdn.prismic.io/api/v2/documents/search?ref=x&access_token=se%20cret"
        );
    }

    #[test]
    fn test_authorized_url_without_token() {
        let client = client(None);
        let url = "https://repo.cdn.prismic.io/api/v2/documents/search?ref=x";
        assert_eq!(client.authorized_url(url), url);
    }
}
