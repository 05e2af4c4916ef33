use crate::error::AppError;
use crate::state::SharedState;
use askama::Template;
use axum::{extract::State, response::Html};
use blog_core::{dates, detail, PostFeed};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    site_name: String,
    posts: Vec<HomePost>,
    next_page: Option<String>,
}

struct HomePost {
    uid: String,
    title: String,
    subtitle: String,
    author: String,
    date: String,
}

/// The post list. Served from the page data generated at startup; fetched
/// on demand only when startup generation did not get that far.
pub async fn home(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let cached = state.home.read().await.clone();
    let page = match cached {
        Some(page) => page,
        None => {
            let page = detail::first_page(&state.prismic, state.config.home_page_size)
                .await
                .map_err(AppError::Upstream)?;
            *state.home.write().await = Some(page.clone());
            page
        }
    };

    let feed = PostFeed::new(page);

    let posts = feed
        .posts()
        .iter()
        .map(|post| HomePost {
            uid: post.uid.clone(),
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            author: post.author.clone(),
            date: dates::format_short(&post.first_publication_date),
        })
        .collect();

    let template = HomeTemplate {
        site_name: state.config.site_name.clone(),
        posts,
        next_page: feed.next_page().map(str::to_string),
    };

    Ok(Html(template.render()?))
}
