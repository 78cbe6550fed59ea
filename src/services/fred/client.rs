//! HTTP client for the FRED observations endpoint

use crate::config::Config;
use crate::models::{Observation, Series};
use crate::services::series_provider::{DateRange, FetchError, SeriesProvider};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::messages::{ObservationsResponse, RawObservation, MISSING_VALUE};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FredClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FredClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(
            config.fred_base_url.clone(),
            config.fred_api_key.clone(),
            http,
        ))
    }

    pub fn with_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn observations_url(&self, series_id: &str, range: DateRange) -> Result<Url, FetchError> {
        let mut url = Url::parse(&format!(
            "{}/series/observations",
            self.base_url.trim_end_matches('/')
        ))?;
        url.query_pairs_mut()
            .append_pair("series_id", series_id)
            .append_pair("api_key", &self.api_key)
            .append_pair("file_type", "json")
            .append_pair("observation_start", &range.start.format(DATE_FORMAT).to_string())
            .append_pair("observation_end", &range.end.format(DATE_FORMAT).to_string())
            .append_pair("sort_order", "desc");
        Ok(url)
    }

    /// Fetch and parse observations, newest first, with missing values dropped.
    pub async fn get_observations(
        &self,
        series_id: &str,
        range: DateRange,
    ) -> Result<Vec<Observation>, FetchError> {
        let url = self.observations_url(series_id, range)?;
        // The url carries the api key; keep it out of error text.
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;
        let payload: ObservationsResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))?;

        parse_observations(&payload.observations)
    }
}

/// Convert raw observations, skipping the missing-value marker.
///
/// Anything else that is not a finite number or a `YYYY-MM-DD` date rejects
/// the whole payload.
pub fn parse_observations(raw: &[RawObservation]) -> Result<Vec<Observation>, FetchError> {
    raw.iter()
        .filter(|obs| obs.value.trim() != MISSING_VALUE)
        .map(|obs| {
            let date = NaiveDate::parse_from_str(obs.date.trim(), DATE_FORMAT).map_err(|e| {
                FetchError::Malformed(format!("invalid date {:?}: {}", obs.date, e))
            })?;
            let value = obs
                .value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FetchError::Malformed(format!("invalid value {:?}", obs.value)))?;
            Ok(Observation::new(date, value))
        })
        .collect()
}

#[async_trait]
impl SeriesProvider for FredClient {
    async fn fetch_series(&self, series_id: &str, range: DateRange) -> Series {
        debug!(series_id, start = %range.start, end = %range.end, "Fetching FRED series");

        match self.get_observations(series_id, range).await {
            Ok(observations) => {
                debug!(series_id, count = observations.len(), "Fetched FRED series");
                Series::new(series_id, observations).with_range(range.start, range.end)
            }
            Err(e) => {
                warn!(series_id, error = %e, "FRED fetch failed");
                Series::failed(series_id, e.to_string())
            }
        }
    }
}
