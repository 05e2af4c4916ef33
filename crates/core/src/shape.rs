use crate::models::{ContentBlock, Neighbor, PostDetail, PostPage, PostSummary};
use chrono::Utc;
use prismic::{Document, SearchResponse};

/// Maps a raw document into a list entry. Absent fields become empty
/// strings, never errors.
pub fn post_summary(doc: &Document) -> PostSummary {
    PostSummary {
        uid: doc.uid.clone().unwrap_or_default(),
        first_publication_date: doc.first_publication_date.clone().unwrap_or_default(),
        title: doc.data.title.clone().unwrap_or_default(),
        subtitle: doc.data.subtitle.clone().unwrap_or_default(),
        author: doc.data.author.clone().unwrap_or_default(),
    }
}

pub fn post_page(response: &SearchResponse) -> PostPage {
    PostPage {
        posts: response.results.iter().map(post_summary).collect(),
        next_page: response.next_page.clone(),
    }
}

/// Maps a raw document into the detail view. A missing publication date
/// falls back to "now" so neighbor date math always has an anchor.
pub fn post_detail(doc: &Document) -> PostDetail {
    PostDetail {
        uid: doc.uid.clone().unwrap_or_default(),
        first_publication_date: doc
            .first_publication_date
            .clone()
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
        last_publication_date: doc.last_publication_date.clone(),
        title: doc.data.title.clone().unwrap_or_default(),
        subtitle: doc.data.subtitle.clone().unwrap_or_default(),
        author: doc.data.author.clone().unwrap_or_default(),
        banner_url: doc
            .data
            .banner
            .as_ref()
            .and_then(|banner| banner.url.clone())
            .unwrap_or_default(),
        content: doc
            .data
            .content
            .iter()
            .map(|block| ContentBlock {
                heading: block.heading.clone().unwrap_or_default(),
                body: block
                    .body
                    .iter()
                    .map(|paragraph| paragraph.text.clone().unwrap_or_default())
                    .collect(),
            })
            .collect(),
    }
}

/// First result of a neighbor query, or `None` when there is no neighbor
/// in that direction. A result without a UID cannot be linked to, so it
/// counts as absent too.
pub fn neighbor(response: &SearchResponse) -> Option<Neighbor> {
    let doc = response.results.first()?;
    let uid = doc.uid.clone()?;
    Some(Neighbor {
        uid,
        title: doc.data.title.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prismic::{Banner, DocumentData, Paragraph};

    fn document(uid: Option<&str>, title: Option<&str>) -> Document {
        Document {
            id: "doc-id".to_string(),
            uid: uid.map(str::to_string),
            doc_type: "posts".to_string(),
            first_publication_date: Some("2021-04-19T20:13:02+0000".to_string()),
            last_publication_date: None,
            data: DocumentData {
                title: title.map(str::to_string),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_missing_fields_default_to_empty_strings() {
        let summary = post_summary(&document(None, None));
        assert_eq!(summary.uid, "");
        assert_eq!(summary.title, "");
        assert_eq!(summary.subtitle, "");
        assert_eq!(summary.author, "");
        assert_eq!(summary.first_publication_date, "2021-04-19T20:13:02+0000");
    }

    #[test]
    fn test_post_page_carries_cursor_through() {
        let response = SearchResponse {
            next_page: Some("https://repo/api/v2/documents/search?page=2".to_string()),
            results: vec![document(Some("primeiro-post"), Some("Primeiro"))],
            ..Default::default()
        };

        let page = post_page(&response);
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].uid, "primeiro-post");
        assert_eq!(
            page.next_page.as_deref(),
            Some("https://repo/api/v2/documents/search?page=2")
        );
    }

    #[test]
    fn test_post_detail_shapes_banner_and_content() {
        let mut doc = document(Some("primeiro-post"), Some("Primeiro"));
        doc.data.banner = Some(Banner {
            url: Some("https://images.prismic.io/banner.png".to_string()),
        });
        doc.data.content = vec![prismic::ContentBlock {
            heading: Some("Primeiros passos".to_string()),
            body: vec![
                Paragraph {
                    text: Some("Um paragrafo".to_string()),
                },
                Paragraph { text: None },
            ],
        }];

        let detail = post_detail(&doc);
        assert_eq!(detail.banner_url, "https://images.prismic.io/banner.png");
        assert_eq!(detail.content.len(), 1);
        assert_eq!(detail.content[0].heading, "Primeiros passos");
        assert_eq!(detail.content[0].body, vec!["Um paragrafo".to_string(), String::new()]);
    }

    #[test]
    fn test_post_detail_defaults_missing_date_to_now() {
        let mut doc = document(Some("primeiro-post"), None);
        doc.first_publication_date = None;

        let detail = post_detail(&doc);
        assert!(!detail.first_publication_date.is_empty());
    }

    #[test]
    fn test_neighbor_from_first_result() {
        let response = SearchResponse {
            results: vec![document(Some("segundo-post"), Some("Segundo"))],
            ..Default::default()
        };

        let stub = neighbor(&response).unwrap();
        assert_eq!(stub.uid, "segundo-post");
        assert_eq!(stub.title, "Segundo");
    }

    #[test]
    fn test_neighbor_absent_for_empty_results_or_missing_uid() {
        assert_eq!(neighbor(&SearchResponse::default()), None);

        let response = SearchResponse {
            results: vec![document(None, Some("Sem uid"))],
            ..Default::default()
        };
        assert_eq!(neighbor(&response), None);
    }
}
