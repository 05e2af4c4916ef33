//! Lists every post the configured repository knows about. Handy for
//! checking credentials and discovery before deploying.

use blog_core::detail;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let endpoint =
        std::env::var("PRISMIC_API_ENDPOINT").expect("PRISMIC_API_ENDPOINT must be set");
    let access_token = std::env::var("PRISMIC_ACCESS_TOKEN").ok();

    let http_client = reqwest::Client::builder()
        .user_agent("PrismicBlog/0.1")
        .build()?;
    let client = prismic::Client::new(http_client, endpoint, access_token);

    let posts = detail::discover_posts(&client).await?;

    println!("Found {} posts", posts.len());
    for post in posts {
        println!("  {}  {}  ({})", post.first_publication_date, post.uid, post.title);
    }

    Ok(())
}
