//! Gemini `generateContent` client with model fallback

use crate::config::Config;
use crate::models::{Analysis, IndicatorSnapshot};
use crate::services::narrative::{NarrativeError, NarrativeGenerator};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::messages::{GenerateContentRequest, GenerateContentResponse};
use super::parser::extract_sections;
use super::prompt::{build_analysis_prompt, build_insight_prompt};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Text returned by whichever model answered first.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub model: String,
    pub text: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    models: Vec<String>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, NarrativeError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(NarrativeError::Client)?;
        Ok(Self::with_client(
            config.gemini_base_url.clone(),
            config.gemini_api_key.clone(),
            config.gemini_models.clone(),
            http,
        ))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        models: Vec<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            models,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    fn endpoint(&self, model: &str) -> Result<Url, NarrativeError> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        ))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Send `prompt` to a single model.
    pub async fn generate_with_model(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<String, NarrativeError> {
        let url = self.endpoint(model)?;
        let response = self
            .http
            .post(url)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| NarrativeError::Request {
                model: model.to_string(),
                source: e.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NarrativeError::Status {
                model: model.to_string(),
                status: status.as_u16(),
            });
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(|e| NarrativeError::Malformed {
                model: model.to_string(),
                message: e.without_url().to_string(),
            })?;

        body.text().ok_or_else(|| NarrativeError::EmptyResponse {
            model: model.to_string(),
        })
    }

    /// Try each configured model in order until one returns text.
    pub async fn generate(&self, prompt: &str) -> Result<Completion, NarrativeError> {
        let mut last_error = None;

        for model in &self.models {
            debug!(model = %model, "Requesting Gemini completion");
            match self.generate_with_model(model, prompt).await {
                Ok(text) => {
                    info!(model = %model, "Gemini completion received");
                    return Ok(Completion {
                        model: model.clone(),
                        text,
                    });
                }
                Err(e) => {
                    warn!(model = %model, error = %e, "Gemini model failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => NarrativeError::AllModelsFailed(Box::new(e)),
            None => NarrativeError::NoModels,
        })
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    fn name(&self) -> &str {
        "Google Gemini"
    }

    async fn summarize(&self, snapshot: &IndicatorSnapshot) -> Analysis {
        let prompt = build_analysis_prompt(snapshot);

        match self.generate(&prompt).await {
            Ok(completion) => {
                let sections = extract_sections(&completion.text);
                Analysis {
                    summary: sections
                        .summary
                        .unwrap_or_else(|| Analysis::DEFAULT_SUMMARY.to_string()),
                    outlook: sections
                        .outlook
                        .unwrap_or_else(|| Analysis::DEFAULT_OUTLOOK.to_string()),
                    raw: completion.text,
                    model: Some(completion.model),
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Narrative generation failed");
                Analysis::failed(e.to_string())
            }
        }
    }

    async fn quick_insight(&self, name: &str, current: f64, previous: Option<f64>) -> String {
        let prompt = build_insight_prompt(name, current, previous);

        match self.generate(&prompt).await {
            Ok(completion) => completion.text,
            Err(e) => {
                warn!(indicator = name, error = %e, "Quick insight generation failed");
                format!("{name}: {current}")
            }
        }
    }
}
