//! Derived metrics over a single series.
//!
//! Every function takes observations newest first and degrades to an
//! absent, pass-through or `Unknown` result when there is too little data.

pub mod change;
pub mod moving_average;
pub mod normalize;
pub mod trend;

pub use change::{calculate_period_change, calculate_yoy_change, YOY_LAG};
pub use moving_average::{calculate_moving_average, DEFAULT_WINDOW};
pub use normalize::normalize;
pub use trend::{calculate_trend, DEFAULT_TREND_PERIODS};

use crate::models::{Series, SeriesAnalytics};

impl SeriesAnalytics {
    /// Compute every metric for `series` with the given moving-average window
    /// and trend lookback.
    pub fn compute(series: &Series, window: usize, trend_periods: usize) -> Self {
        let observations = series.observations();
        Self {
            period_change: calculate_period_change(observations),
            yoy_change: calculate_yoy_change(observations),
            trend: calculate_trend(observations, trend_periods),
            moving_average_window: window,
            moving_average: calculate_moving_average(observations, window),
            normalized: normalize(observations),
        }
    }

    pub fn with_defaults(series: &Series) -> Self {
        Self::compute(series, DEFAULT_WINDOW, DEFAULT_TREND_PERIODS)
    }
}
