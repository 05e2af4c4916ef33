use anyhow::Result;
use async_trait::async_trait;
use prismic::{Document, Predicate, QueryOptions, SearchResponse};

/// The slice of the CMS client the flows depend on. Kept narrow so the
/// flows can be exercised against a mock.
#[async_trait]
pub trait DocumentSource {
    async fn search(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> Result<SearchResponse>;

    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<Document>>;

    /// Follows an opaque `next_page` URL issued by an earlier search.
    async fn fetch_page(&self, url: &str) -> Result<SearchResponse>;
}

#[async_trait]
impl DocumentSource for prismic::Client {
    async fn search(
        &self,
        predicates: &[Predicate],
        options: &QueryOptions,
    ) -> Result<SearchResponse> {
        prismic::Client::search(self, predicates, options).await
    }

    async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Option<Document>> {
        prismic::Client::get_by_uid(self, doc_type, uid).await
    }

    async fn fetch_page(&self, url: &str) -> Result<SearchResponse> {
        prismic::Client::fetch_page(self, url).await
    }
}
