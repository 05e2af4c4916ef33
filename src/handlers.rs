mod home;
mod post;
mod relay;

pub use home::home;
pub use post::post_detail;
pub use relay::{load_more, method_not_allowed};

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
