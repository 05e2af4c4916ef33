use prismic_blog::state::{AppConfig, AppState};
use prismic_blog::{app, pages};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let endpoint =
        std::env::var("PRISMIC_API_ENDPOINT").expect("PRISMIC_API_ENDPOINT must be set");
    let access_token = std::env::var("PRISMIC_ACCESS_TOKEN").ok();
    if access_token.is_none() {
        tracing::warn!("PRISMIC_ACCESS_TOKEN is not set. A private repository will refuse queries.");
    }

    let http_client = reqwest::Client::builder()
        .user_agent("PrismicBlog/0.1")
        .build()
        .expect("Failed to build HTTP client");

    let config = AppConfig {
        site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "spacetraveling".to_string()),
        comments_repo: std::env::var("COMMENTS_REPO").ok(),
        home_page_size: 1,
    };

    let state = AppState {
        config,
        prismic: prismic::Client::new(http_client, endpoint, access_token),
        pages: pages::PageStore::default(),
        home: Arc::new(RwLock::new(None)),
    };

    // Static generation. A failure here is not fatal: pages resolve on
    // first request through the fallback flow instead.
    match pages::generate(&state).await {
        Ok(generated) => tracing::info!("Generated {} post pages", generated),
        Err(err) => tracing::warn!(
            "Startup generation failed: {:#}. Pages will resolve on first request.",
            err
        ),
    }

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Blog server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
