pub mod dates;
pub mod detail;
pub mod feed;
pub mod models;
pub mod reading_time;
pub mod shape;
pub mod source;

pub use feed::PostFeed;
pub use models::{ContentBlock, Neighbor, PostDetail, PostPage, PostSummary, PostView};
pub use source::DocumentSource;
