use crate::state::AppState;
use anyhow::Result;
use blog_core::{detail, PostView};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State of one detail page in the store.
#[derive(Clone, Debug)]
pub enum PageEntry {
    /// Resolution is running; the page renders a placeholder meanwhile.
    Pending,
    /// Generated and ready to render.
    Ready(Arc<PostView>),
    /// The CMS does not know this UID.
    Missing,
}

/// Pre-generated detail pages keyed by UID. Filled at startup, extended on
/// demand when a UID unknown at generation time is requested.
#[derive(Clone, Default)]
pub struct PageStore {
    inner: Arc<RwLock<HashMap<String, PageEntry>>>,
}

impl PageStore {
    pub async fn get(&self, uid: &str) -> Option<PageEntry> {
        self.inner.read().await.get(uid).cloned()
    }

    pub async fn insert_ready(&self, uid: impl Into<String>, view: PostView) {
        self.inner
            .write()
            .await
            .insert(uid.into(), PageEntry::Ready(Arc::new(view)));
    }

    pub async fn insert_missing(&self, uid: impl Into<String>) {
        self.inner.write().await.insert(uid.into(), PageEntry::Missing);
    }

    /// Claims a UID for resolution. False when another request got there
    /// first or the page already settled.
    pub async fn claim_pending(&self, uid: &str) -> bool {
        let mut inner = self.inner.write().await;
        if inner.contains_key(uid) {
            return false;
        }
        inner.insert(uid.to_string(), PageEntry::Pending);
        true
    }

    /// Drops a pending claim after a failed resolution so a later request
    /// can try again.
    pub async fn clear_pending(&self, uid: &str) {
        let mut inner = self.inner.write().await;
        if matches!(inner.get(uid), Some(PageEntry::Pending)) {
            inner.remove(uid);
        }
    }
}

/// Startup generation: fetch the home page, then pre-resolve every post
/// the repository knows about. Returns the number of generated pages.
pub async fn generate(state: &AppState) -> Result<usize> {
    let home = detail::first_page(&state.prismic, state.config.home_page_size).await?;
    *state.home.write().await = Some(home);

    let posts = detail::discover_posts(&state.prismic).await?;

    let mut generated = 0;
    for summary in &posts {
        if summary.uid.is_empty() {
            continue;
        }
        match detail::load_post(&state.prismic, &summary.uid).await? {
            Some(view) => {
                state.pages.insert_ready(summary.uid.clone(), view).await;
                generated += 1;
            }
            None => {
                tracing::warn!("Post {} disappeared between discovery and generation", summary.uid);
            }
        }
    }

    Ok(generated)
}

/// Fallback path: resolve a UID that was not known at generation time, off
/// the request cycle. The page keeps rendering the placeholder until this
/// settles.
pub fn resolve_in_background(state: AppState, uid: String) {
    tokio::spawn(async move {
        match detail::load_post(&state.prismic, &uid).await {
            Ok(Some(view)) => {
                tracing::info!("Resolved fallback page for {}", uid);
                state.pages.insert_ready(uid, view).await;
            }
            Ok(None) => {
                tracing::info!("No document behind {}, marking missing", uid);
                state.pages.insert_missing(uid).await;
            }
            Err(err) => {
                tracing::error!("Fallback resolution for {} failed: {:#}", uid, err);
                state.pages.clear_pending(&uid).await;
            }
        }
    });
}
