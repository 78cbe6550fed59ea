use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated data point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A fetched time series.
///
/// Observations are held newest first; index 0 is the most recent point.
/// A series carrying an `error` never has observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    series_id: String,
    #[serde(rename = "data")]
    observations: Vec<Observation>,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Series {
    /// Build a populated series. Observations are reordered newest first.
    pub fn new(series_id: impl Into<String>, mut observations: Vec<Observation>) -> Self {
        observations.sort_by(|a, b| b.date.cmp(&a.date));
        Self {
            series_id: series_id.into(),
            count: observations.len(),
            observations,
            start_date: None,
            end_date: None,
            error: None,
        }
    }

    /// Build a series that failed to fetch.
    pub fn failed(series_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            observations: Vec::new(),
            count: 0,
            start_date: None,
            end_date: None,
            error: Some(error.into()),
        }
    }

    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        if self.error.is_none() {
            self.start_date = Some(start);
            self.end_date = Some(end);
        }
        self
    }

    pub fn series_id(&self) -> &str {
        &self.series_id
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Most recent observation, if any.
    pub fn latest(&self) -> Option<LatestObservation> {
        self.observations.first().map(|obs| LatestObservation {
            series_id: self.series_id.clone(),
            date: obs.date,
            value: obs.value,
        })
    }
}

/// Most recent valid point of a named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestObservation {
    pub series_id: String,
    pub date: NaiveDate,
    pub value: f64,
}
