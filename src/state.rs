use crate::pages::PageStore;
use blog_core::PostPage;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Values resolved once in `main` and injected everywhere that needs them.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub site_name: String,
    /// GitHub repository backing the comments widget; the widget is
    /// omitted when unset.
    pub comments_repo: Option<String>,
    pub home_page_size: usize,
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub prismic: prismic::Client,
    pub pages: PageStore,
    /// First page of the list, generated at startup.
    pub home: Arc<RwLock<Option<PostPage>>>,
}
