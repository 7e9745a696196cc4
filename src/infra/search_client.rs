use crate::config::{FetchConfig, SearchConfig};
use crate::error::{ResolverError, Result};
use crate::ports::SearchPort;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, instrument, warn};
use url::Url;

/// Runs queries against an HTML search results page and collects the links.
pub struct HtmlSearchClient {
    client: reqwest::Client,
    endpoint: String,
    result_selector: String,
    delay: Duration,
}

impl HtmlSearchClient {
    pub fn new(search: &SearchConfig, fetch: &FetchConfig) -> Result<Self> {
        Selector::parse(&search.result_selector).map_err(|e| {
            ResolverError::Config(format!(
                "invalid result selector '{}': {:?}",
                search.result_selector, e
            ))
        })?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(fetch.timeout_seconds))
            .user_agent(fetch.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            endpoint: search.endpoint.clone(),
            result_selector: search.result_selector.clone(),
            delay: Duration::from_millis(search.delay_ms),
        })
    }
}

#[async_trait]
impl SearchPort for HtmlSearchClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        tokio::time::sleep(self.delay).await;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| ResolverError::NetworkFailure(format!("search request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(ResolverError::NetworkFailure(format!(
                "search returned status {}",
                response.status()
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| ResolverError::MalformedResponse(format!("search body unreadable: {}", e)))?;

        let links = extract_result_links(&body, &self.result_selector, max_results)?;
        if links.is_empty() {
            warn!("No search results found - the results page structure may have changed");
        }
        info!("Search returned {} candidate links", links.len());
        Ok(links)
    }
}

/// Collects up to `max_results` distinct absolute links matched by `selector`.
pub fn extract_result_links(html: &str, selector: &str, max_results: usize) -> Result<Vec<String>> {
    let selector = Selector::parse(selector).map_err(|e| {
        ResolverError::Config(format!("invalid result selector '{}': {:?}", selector, e))
    })?;
    let document = Html::parse_document(html);

    let mut links: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        if links.len() >= max_results {
            break;
        }
        let Some(link) = element.value().attr("href").and_then(resolve_result_href) else {
            continue;
        };
        if !links.contains(&link) {
            links.push(link);
        }
    }
    Ok(links)
}

/// Unwraps redirect links that carry the real target in a query parameter.
fn resolve_result_href(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };
    let parsed = Url::parse(&absolute).ok()?;

    let redirect_target = parsed
        .query_pairs()
        .find(|(key, _)| key == "uddg" || (key == "q" && parsed.path() == "/url"))
        .map(|(_, value)| value.into_owned());
    if let Some(target) = redirect_target {
        if is_http(&target) {
            return Some(target);
        }
    }

    if is_http(&absolute) {
        Some(absolute)
    } else {
        None
    }
}

fn is_http(link: &str) -> bool {
    Url::parse(link)
        .map(|u| u.scheme() == "http" || u.scheme() == "https")
        .unwrap_or(false)
}
