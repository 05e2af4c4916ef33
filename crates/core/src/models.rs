use serde::Serialize;

/// A post as it appears in the list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub uid: String,
    /// ISO timestamp as the CMS handed it out; formatting happens at the
    /// rendering edge.
    pub first_publication_date: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One fetched page of the list plus the cursor to the next one. A `None`
/// cursor means the list is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPage {
    pub posts: Vec<PostSummary>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: Vec<String>,
}

/// A post as it appears on its own page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    pub uid: String,
    pub first_publication_date: String,
    pub last_publication_date: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: String,
    pub content: Vec<ContentBlock>,
}

/// Stub for the previous/next footer navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub uid: String,
    pub title: String,
}

/// Everything a detail page needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView {
    pub post: PostDetail,
    pub estimated_reading_time: String,
    pub prev_post: Option<Neighbor>,
    pub next_post: Option<Neighbor>,
}
