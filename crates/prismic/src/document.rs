use serde::Deserialize;

/// Repository metadata returned by the API root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiData {
    #[serde(default)]
    pub refs: Vec<ApiRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiRef {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

impl ApiData {
    pub fn master_ref(&self) -> Option<&str> {
        self.refs
            .iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference.as_str())
    }
}

/// One page of search results. `next_page` is an opaque URL into the API;
/// `None` means the last page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results_per_page: u32,
    #[serde(default)]
    pub results_size: u32,
    #[serde(default)]
    pub total_results_size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub prev_page: Option<String>,
    #[serde(default)]
    pub results: Vec<Document>,
}

/// A raw document. The `data` payload is whatever the writing room holds,
/// so every field stays optional here and shaping decides the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    #[serde(default)]
    pub last_publication_date: Option<String>,
    #[serde(default)]
    pub data: DocumentData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub banner: Option<Banner>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Banner {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub body: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub text: Option<String>,
}
