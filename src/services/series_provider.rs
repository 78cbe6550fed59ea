//! Series provider interface consumed by the aggregation layer.

use crate::models::{LatestObservation, OrderedMap, Series};
use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use futures_util::future::join_all;
use thiserror::Error;

/// Days covered when a caller does not say otherwise.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Failure while fetching one series. Providers turn this into
/// [`Series::failed`] instead of returning it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Inclusive observation date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `days` back from `today` through `today`.
    pub fn ending_on(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - Duration::days(days),
            end: today,
        }
    }

    /// `days` back from the local current date.
    pub fn last_days(days: i64) -> Self {
        Self::ending_on(Local::now().date_naive(), days)
    }

    /// Fill in omitted bounds: the end defaults to `today` and the start to
    /// [`DEFAULT_LOOKBACK_DAYS`] before `today`.
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            start: start.unwrap_or(today - Duration::days(DEFAULT_LOOKBACK_DAYS)),
            end: end.unwrap_or(today),
        }
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::last_days(DEFAULT_LOOKBACK_DAYS)
    }
}

#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch one series. Transport and parse failures come back as a failed
    /// series, never as an error.
    async fn fetch_series(&self, series_id: &str, range: DateRange) -> Series;

    /// Fetch several series concurrently, keyed in `series_ids` order. A
    /// failure in one does not affect the others.
    async fn fetch_many(&self, series_ids: &[&str], range: DateRange) -> OrderedMap<Series> {
        let fetches = series_ids.iter().map(|id| self.fetch_series(id, range));
        let results = join_all(fetches).await;

        series_ids
            .iter()
            .map(|id| id.to_string())
            .zip(results)
            .collect()
    }

    /// Most recent valid observation over the default window.
    async fn latest(&self, series_id: &str) -> Option<LatestObservation> {
        self.fetch_series(series_id, DateRange::default())
            .await
            .latest()
    }
}
