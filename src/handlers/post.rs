use crate::error::AppError;
use crate::pages::{self, PageEntry};
use crate::state::SharedState;
use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use blog_core::{dates, PostView};

#[derive(Template)]
#[template(path = "post.html")]
struct PostTemplate {
    site_name: String,
    title: String,
    author: String,
    date: String,
    reading_time: String,
    edited_note: Option<String>,
    banner_url: String,
    blocks: Vec<BlockView>,
    prev_post: Option<LinkView>,
    next_post: Option<LinkView>,
    comments_repo: Option<String>,
}

struct BlockView {
    heading: String,
    paragraphs: Vec<String>,
}

struct LinkView {
    uid: String,
    title: String,
}

#[derive(Template)]
#[template(path = "fallback.html")]
struct FallbackTemplate {
    site_name: String,
}

/// A post page. Pre-generated pages render straight away; an unknown UID
/// enters the fallback flow and renders a placeholder that refreshes until
/// background resolution settles.
pub async fn post_detail(
    State(state): State<SharedState>,
    Path(uid): Path<String>,
) -> Result<Html<String>, AppError> {
    match state.pages.get(&uid).await {
        Some(PageEntry::Ready(view)) => render_post(&state, &view),
        Some(PageEntry::Pending) => render_fallback(&state),
        Some(PageEntry::Missing) => Err(AppError::NotFound(format!("No post {}", uid))),
        None => {
            if state.pages.claim_pending(&uid).await {
                pages::resolve_in_background(state.clone(), uid);
            }
            render_fallback(&state)
        }
    }
}

fn render_post(state: &SharedState, view: &PostView) -> Result<Html<String>, AppError> {
    let post = &view.post;

    let template = PostTemplate {
        site_name: state.config.site_name.clone(),
        title: post.title.clone(),
        author: post.author.clone(),
        date: dates::format_short(&post.first_publication_date),
        reading_time: view.estimated_reading_time.clone(),
        edited_note: dates::edited_note(
            &post.first_publication_date,
            post.last_publication_date.as_deref(),
        ),
        banner_url: post.banner_url.clone(),
        blocks: post
            .content
            .iter()
            .map(|block| BlockView {
                heading: block.heading.clone(),
                paragraphs: block.body.clone(),
            })
            .collect(),
        prev_post: view.prev_post.as_ref().map(|neighbor| LinkView {
            uid: neighbor.uid.clone(),
            title: neighbor.title.clone(),
        }),
        next_post: view.next_post.as_ref().map(|neighbor| LinkView {
            uid: neighbor.uid.clone(),
            title: neighbor.title.clone(),
        }),
        comments_repo: state.config.comments_repo.clone(),
    };

    Ok(Html(template.render()?))
}

fn render_fallback(state: &SharedState) -> Result<Html<String>, AppError> {
    let template = FallbackTemplate {
        site_name: state.config.site_name.clone(),
    };

    Ok(Html(template.render()?))
}
