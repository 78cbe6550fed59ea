//! Narrative generator interface.

use crate::models::{Analysis, IndicatorSnapshot};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("request to model {model} failed: {source}")]
    Request {
        model: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("model {model} returned HTTP {status}")]
    Status { model: String, status: u16 },

    #[error("model {model} returned a malformed response: {message}")]
    Malformed { model: String, message: String },

    #[error("model {model} returned no text")]
    EmptyResponse { model: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("no models configured")]
    NoModels,

    #[error("all configured models failed, last error: {0}")]
    AllModelsFailed(Box<NarrativeError>),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Turns a latest-value snapshot into free text.
///
/// Implementations absorb their own failures: callers always get a result.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Human-readable backend name, reported alongside generated analyses.
    fn name(&self) -> &str;

    /// Two-section analysis of the snapshot. On failure the result carries
    /// placeholder text and an `error`.
    async fn summarize(&self, snapshot: &IndicatorSnapshot) -> Analysis;

    /// One-sentence comment on a single indicator. Falls back to
    /// `"{name}: {current}"` on failure.
    async fn quick_insight(&self, name: &str, current: f64, previous: Option<f64>) -> String;
}
