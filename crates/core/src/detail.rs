use crate::dates;
use crate::feed::PostFeed;
use crate::models::{PostPage, PostSummary, PostView};
use crate::reading_time;
use crate::shape;
use crate::source::DocumentSource;
use anyhow::Result;
use chrono::Utc;
use prismic::{Predicate, QueryOptions};

const DOCUMENT_TYPE: &str = "posts";
const DISCOVERY_PAGE_SIZE: usize = 20;

/// Loads one post together with its chronological neighbors and reading
/// time. `None` when the CMS does not know the UID.
pub async fn load_post<S: DocumentSource>(source: &S, uid: &str) -> Result<Option<PostView>> {
    let Some(doc) = source.get_by_uid(DOCUMENT_TYPE, uid).await? else {
        return Ok(None);
    };

    let post = shape::post_detail(&doc);
    let published = dates::parse(&post.first_publication_date).unwrap_or_else(Utc::now);

    let prev_response = source
        .search(
            &[
                Predicate::at("document.type", DOCUMENT_TYPE),
                Predicate::date_before("document.first_publication_date", published),
            ],
            &QueryOptions {
                page_size: Some(1),
                orderings: Some("[document.first_publication_date desc]".to_string()),
            },
        )
        .await?;

    let next_response = source
        .search(
            &[
                Predicate::at("document.type", DOCUMENT_TYPE),
                Predicate::date_after("document.first_publication_date", published),
            ],
            &QueryOptions {
                page_size: Some(1),
                orderings: Some("[document.first_publication_date]".to_string()),
            },
        )
        .await?;

    let estimated_reading_time = reading_time::estimate(&post.content);

    Ok(Some(PostView {
        post,
        estimated_reading_time,
        prev_post: shape::neighbor(&prev_response),
        next_post: shape::neighbor(&next_response),
    }))
}

/// Fetches the first page of the list.
pub async fn first_page<S: DocumentSource>(source: &S, page_size: usize) -> Result<PostPage> {
    let response = source
        .search(
            &[Predicate::at("document.type", DOCUMENT_TYPE)],
            &QueryOptions {
                page_size: Some(page_size),
                ..Default::default()
            },
        )
        .await?;

    Ok(shape::post_page(&response))
}

/// Walks the whole pagination chain to enumerate every published post.
/// Used to decide which detail pages to generate up front.
pub async fn discover_posts<S: DocumentSource>(source: &S) -> Result<Vec<PostSummary>> {
    let mut feed = PostFeed::new(first_page(source, DISCOVERY_PAGE_SIZE).await?);

    while let Some(url) = feed.begin_load() {
        match source.fetch_page(&url).await {
            Ok(response) => feed.apply_page(shape::post_page(&response)),
            Err(err) => {
                feed.fail_load();
                return Err(err);
            }
        }
    }

    tracing::debug!("Discovered {} posts", feed.posts().len());
    Ok(feed.into_posts())
}
