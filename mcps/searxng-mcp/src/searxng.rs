//! SearXNG HTTP client
//!
//! Issues one search request per call against a self-hosted SearXNG
//! instance and normalizes its JSON response.
//! See: https://docs.searxng.org/dev/search_api.html

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::server::SearchParams;
use crate::types::SearchResult;

/// Search failure taxonomy
///
/// The `Display` output of each variant is the exact message surfaced in the
/// error envelope. Timeouts and JSON-decode failures fold into [`Request`]
/// via `From<reqwest::Error>`; they are not distinct categories.
///
/// [`Request`]: SearchError::Request
#[derive(Debug, Error)]
pub enum SearchError {
    /// Upstream answered with a failure status code
    #[error("SearXNG error ({status}): {detail}")]
    Upstream { status: u16, detail: String },

    /// Transport, timeout, or response-decoding failure
    #[error("SearXNG request failed: {message}")]
    Request { message: String },
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Request {
            message: err.to_string(),
        }
    }
}

/// SearXNG client
///
/// Holds the pooled HTTP client and the resolved configuration; cloning is
/// cheap and clones share the connection pool.
#[derive(Clone)]
pub struct SearxngClient {
    client: Client,
    config: Config,
}

// SearXNG API response types. Unknown fields are ignored and known fields
// are read permissively: a missing `results` array or missing string fields
// default to empty rather than failing the parse.
#[derive(Debug, Deserialize)]
struct SearxngResponse {
    #[serde(default)]
    results: Vec<SearxngResult>,
}

#[derive(Debug, Deserialize)]
struct SearxngResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    engines: Option<Vec<String>>,
    score: Option<f64>,
    category: Option<String>,
}

impl From<SearxngResult> for SearchResult {
    fn from(raw: SearxngResult) -> Self {
        SearchResult {
            title: raw.title,
            url: raw.url,
            description: raw.content,
            published: raw.published_date,
            engines: raw.engines.map(|engines| engines.join(", ")),
            score: raw.score,
            category: raw.category,
        }
    }
}

impl SearxngClient {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("searxng-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Perform one search, returning at most `count` normalized results
    ///
    /// Exactly one outbound request per call, bounded by the configured
    /// timeout. No retries; a failed attempt is terminal.
    pub async fn search(
        &self,
        params: &SearchParams,
        count: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        // Base URL is joined verbatim, trailing slashes included
        let url = format!("{}/search", self.config.base_url);

        let mut query = vec![
            ("q", params.query.clone()),
            ("format", "json".to_string()),
        ];

        // Optional parameters are omitted entirely when not supplied
        if let Some(categories) = non_empty(&params.categories) {
            query.push(("categories", categories.to_string()));
        }
        if let Some(language) = non_empty(&params.language) {
            query.push(("language", language.to_string()));
        }
        if let Some(time_range) = non_empty(&params.time_range) {
            query.push(("time_range", time_range.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Body read is best-effort; fall back to the reason phrase
            let detail = response.text().await.unwrap_or_default();
            let detail = if detail.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                detail
            };
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let body: SearxngResponse = response.json().await?;

        Ok(body
            .results
            .into_iter()
            .take(count)
            .map(SearchResult::from)
            .collect())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
