use crate::models::{PostPage, PostSummary};

/// The incremental list state: posts fetched so far plus the cursor to the
/// next page. One fetch may be outstanding at a time; `begin_load` hands
/// the cursor out once and refuses again until the load settles.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFeed {
    posts: Vec<PostSummary>,
    next_page: Option<String>,
    in_flight: bool,
}

impl PostFeed {
    pub fn new(initial: PostPage) -> Self {
        Self {
            posts: initial.posts,
            next_page: initial.next_page,
            in_flight: false,
        }
    }

    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// Whether a further page exists. Drives the load-more affordance.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Starts a load. Returns the cursor to fetch, or `None` when the list
    /// is exhausted or a fetch is already outstanding.
    pub fn begin_load(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let cursor = self.next_page.clone()?;
        self.in_flight = true;
        Some(cursor)
    }

    /// Applies a fetched page: new posts go after the existing ones, in the
    /// order the CMS returned them, and the cursor is replaced with
    /// whatever the page carried.
    pub fn apply_page(&mut self, page: PostPage) {
        self.posts.extend(page.posts);
        self.next_page = page.next_page;
        self.in_flight = false;
    }

    /// Settles a failed load. The cursor stays, so the trigger can be used
    /// again; there is no automatic retry.
    pub fn fail_load(&mut self) {
        self.in_flight = false;
    }

    pub fn into_posts(self) -> Vec<PostSummary> {
        self.posts
    }
}
