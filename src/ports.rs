use crate::error::Result;
use async_trait::async_trait;
use scraper::{Html, Node};

/// Source of candidate URLs for a company.
#[async_trait]
pub trait SearchPort: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>>;
}

/// Retrieves a page either as JSON or as an HTML document.
#[async_trait]
pub trait PageFetchPort: Send + Sync {
    async fn fetch(&self, url: &str, parse_as_html: bool) -> Result<FetchedPage>;
}

#[derive(Debug, Clone)]
pub enum FetchedPage {
    Json(serde_json::Value),
    Html(PageDocument),
}

/// Raw HTML body of a fetched page.
#[derive(Debug, Clone)]
pub struct PageDocument {
    html: String,
}

const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

impl PageDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Text nodes outside scripts, styles and the document head, separated by
    /// single spaces.
    pub fn visible_text(&self) -> String {
        let document = Html::parse_document(&self.html);
        let mut pieces = Vec::new();
        for node in document.root_element().descendants() {
            let Node::Text(text) = node.value() else {
                continue;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
                    .unwrap_or(false)
            });
            let text = text.trim();
            if !hidden && !text.is_empty() {
                pieces.push(text.to_string());
            }
        }
        pieces.join(" ")
    }
}

/// Fixed candidate list, for callers that already know the URLs.
#[derive(Debug, Clone, Default)]
pub struct StaticSearch {
    urls: Vec<String>,
}

impl StaticSearch {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl SearchPort for StaticSearch {
    async fn search(&self, _query: &str, max_results: usize) -> Result<Vec<String>> {
        Ok(self.urls.iter().take(max_results).cloned().collect())
    }
}
