use crate::config::FetchConfig;
use crate::error::{ResolverError, Result};
use crate::ports::{FetchedPage, PageDocument, PageFetchPort};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument};

/// Fetches pages over HTTP, pausing before every request.
pub struct ReqwestPageFetcher {
    client: reqwest::Client,
    delay: Duration,
}

impl ReqwestPageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            delay: Duration::from_millis(config.delay_ms),
        })
    }
}

#[async_trait]
impl PageFetchPort for ReqwestPageFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str, parse_as_html: bool) -> Result<FetchedPage> {
        tokio::time::sleep(self.delay).await;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolverError::NetworkFailure(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolverError::NetworkFailure(format!(
                "GET {} returned status {}",
                url, status
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let body = response.text().await.map_err(|e| {
            ResolverError::MalformedResponse(format!("body of {} could not be read: {}", url, e))
        })?;
        debug!("HTTP response: status={}, type={}, size={} bytes", status, content_type, body.len());

        decode_body(url, &body, parse_as_html)
    }
}

/// Turns a response body into a page, rejecting empty or unparseable bodies.
pub fn decode_body(url: &str, body: &str, parse_as_html: bool) -> Result<FetchedPage> {
    if body.trim().is_empty() {
        return Err(ResolverError::MalformedResponse(format!("{} returned an empty body", url)));
    }
    if parse_as_html {
        return Ok(FetchedPage::Html(PageDocument::new(body)));
    }
    serde_json::from_str(body)
        .map(FetchedPage::Json)
        .map_err(|e| ResolverError::MalformedResponse(format!("{} is not JSON: {}", url, e)))
}
