use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Change between the two most recent observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodChange {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    pub change_percent: f64,
    pub date: NaiveDate,
    pub previous_date: NaiveDate,
}

/// Change against the observation twelve positions back.
///
/// The lag is positional, so it only means "a year ago" for monthly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoYChange {
    pub current: f64,
    pub year_ago: f64,
    pub change: f64,
    pub change_percent: f64,
    pub date: NaiveDate,
    pub year_ago_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: NaiveDate,
    pub value: f64,
    pub moving_average: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    Unknown,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
            Trend::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point rescaled to 0..=100. `normalized` is absent when the series is flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub date: NaiveDate,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<f64>,
}

/// Every derived metric for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAnalytics {
    pub period_change: Option<PeriodChange>,
    pub yoy_change: Option<YoYChange>,
    pub trend: Trend,
    pub moving_average_window: usize,
    pub moving_average: Vec<MovingAveragePoint>,
    pub normalized: Vec<NormalizedPoint>,
}
