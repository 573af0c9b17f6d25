//! Envelope types returned by the search tool
//!
//! Every invocation produces exactly one [`Envelope`], serialized as a flat
//! JSON object carrying either a `results` key or an `error` key.

use serde::Serialize;

/// Provider tag embedded in every success envelope
pub const PROVIDER: &str = "searxng";

/// A single normalized search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// The title of the result (empty string if absent upstream)
    pub title: String,
    /// The URL of the result (empty string if absent upstream)
    pub url: String,
    /// Snippet text; upstream calls this `content`
    pub description: String,
    /// When the content was published (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Engines that contributed the result, comma-joined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines: Option<String>,
    /// Upstream ranking score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Category the result was found under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Tool response envelope: search results or a search failure, never both
///
/// Failures downstream of the tool boundary are data, not errors - the host
/// always receives a well-formed envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        query: String,
        provider: &'static str,
        count: usize,
        results: Vec<SearchResult>,
    },
    Error {
        error: String,
    },
}

impl Envelope {
    /// Success envelope; `count` always reflects the returned results
    pub fn success(query: String, results: Vec<SearchResult>) -> Self {
        Self::Success {
            query,
            provider: PROVIDER,
            count: results.len(),
            results,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}
