//! MCP Server implementation for SearXNG web search
//!
//! Exposes a single `searxng_search` tool. Search failures never surface as
//! MCP errors: the tool call succeeds and carries an error envelope instead,
//! so the host always receives data.

use anyhow::Result;
use mcp_common::{json_success, McpResult};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::searxng::SearxngClient;
use crate::types::Envelope;

/// The SearXNG MCP Server
#[derive(Clone)]
pub struct SearxngMcpServer {
    client: SearxngClient,
    config: Config,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query
    #[schemars(description = "Search query string.")]
    pub query: String,
    /// Number of results to return
    #[schemars(description = "Number of results (1-20, default 5).", range(min = 1, max = 20))]
    pub count: Option<usize>,
    /// Restrict the search to SearXNG categories
    #[schemars(
        description = "Comma-separated categories: general, images, news, videos, it, science, files, music, social media."
    )]
    pub categories: Option<String>,
    /// Preferred result language
    #[schemars(description = "Language code (e.g. en, de, fr).")]
    pub language: Option<String>,
    /// Recency filter
    #[schemars(description = "Time range: day, week, month, year.")]
    pub time_range: Option<String>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SearxngMcpServer {
    pub fn new(config: Config) -> Result<Self> {
        tracing::info!("Using SearXNG instance at {}", config.base_url);
        let client = SearxngClient::new(config.clone())?;

        Ok(Self {
            client,
            config,
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        description = "Search the web via self-hosted SearXNG. Returns titles, URLs, and snippets. \
                       Privacy-preserving, aggregated results from 70+ engines. \
                       Use for web searches, especially when privacy matters."
    )]
    async fn searxng_search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> McpResult<CallToolResult> {
        let count = params.count.unwrap_or(self.config.default_count);

        tracing::info!("Searching for: {} (count: {})", params.query, count);

        let envelope = match self.client.search(&params, count).await {
            Ok(results) => Envelope::success(params.query, results),
            Err(err) => {
                tracing::warn!("Search failed: {}", err);
                Envelope::error(err.to_string())
            }
        };

        json_success(&envelope)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SearxngMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "SearXNG MCP Server - web search through a self-hosted SearXNG \
                 meta-search instance. One tool, searxng_search, returning a JSON \
                 envelope of normalized results. No API keys required."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_with(base_url: String, default_count: usize) -> SearxngMcpServer {
        let config = Config {
            base_url,
            timeout_ms: 2_000,
            default_count,
        };
        SearxngMcpServer::new(config).unwrap()
    }

    fn params(query: &str) -> SearchParams {
        SearchParams {
            query: query.to_string(),
            count: None,
            categories: None,
            language: None,
            time_range: None,
        }
    }

    fn envelope_json(result: &CallToolResult) -> serde_json::Value {
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        };
        serde_json::from_str(&text).unwrap()
    }

    async fn mock_upstream(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn unset_count_uses_configured_default() {
        let results: Vec<_> = (0..10)
            .map(|i| json!({"title": format!("r{i}"), "url": "http://x", "content": ""}))
            .collect();
        let upstream = mock_upstream(json!({ "results": results })).await;
        let server = server_with(upstream.uri(), 2);

        let result = server
            .searxng_search(Parameters(params("rust")))
            .await
            .unwrap();

        let envelope = envelope_json(&result);
        assert_eq!(envelope["count"], 2);
        assert_eq!(envelope["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn explicit_count_overrides_default() {
        let results: Vec<_> = (0..10)
            .map(|i| json!({"title": format!("r{i}"), "url": "http://x", "content": ""}))
            .collect();
        let upstream = mock_upstream(json!({ "results": results })).await;
        let server = server_with(upstream.uri(), 5);

        let mut request = params("rust");
        request.count = Some(3);
        let result = server.searxng_search(Parameters(request)).await.unwrap();

        let envelope = envelope_json(&result);
        assert_eq!(envelope["count"], 3);
    }

    #[tokio::test]
    async fn success_envelope_matches_contract() {
        let upstream = mock_upstream(json!({
            "results": [{"title": "A", "url": "http://a", "content": "desc"}]
        }))
        .await;
        let server = server_with(upstream.uri(), 5);

        let result = server
            .searxng_search(Parameters(params("rust")))
            .await
            .unwrap();

        let envelope = envelope_json(&result);
        assert_eq!(envelope["query"], "rust");
        assert_eq!(envelope["provider"], "searxng");
        assert_eq!(envelope["count"], 1);

        let item = &envelope["results"][0];
        assert_eq!(item["title"], "A");
        assert_eq!(item["url"], "http://a");
        assert_eq!(item["description"], "desc");
        // No optional keys when absent upstream
        assert_eq!(item.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn upstream_failure_is_a_successful_call_with_error_envelope() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&upstream)
            .await;
        let server = server_with(upstream.uri(), 5);

        let result = server
            .searxng_search(Parameters(params("rust")))
            .await
            .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        let envelope = envelope_json(&result);
        assert_eq!(envelope["error"], "SearXNG error (500): boom");
        assert!(envelope.get("results").is_none());
    }

    #[tokio::test]
    async fn unreachable_upstream_is_a_successful_call_with_error_envelope() {
        // Nothing listens on this port
        let server = server_with("http://127.0.0.1:1".to_string(), 5);

        let result = server
            .searxng_search(Parameters(params("rust")))
            .await
            .unwrap();

        let envelope = envelope_json(&result);
        let message = envelope["error"].as_str().unwrap();
        assert!(message.starts_with("SearXNG request failed: "));
    }
}
