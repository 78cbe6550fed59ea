//! Period-over-period and year-over-year change

use crate::common::math::{percent_change, round2};
use crate::models::{Observation, PeriodChange, YoYChange};

/// Position of the "year ago" observation. Assumes monthly data.
pub const YOY_LAG: usize = 11;

/// Change between the newest observation and the one before it.
///
/// `change` and `change_percent` are rounded to 2 decimals; a zero previous
/// value gives a `0.0` percent change.
pub fn calculate_period_change(observations: &[Observation]) -> Option<PeriodChange> {
    let [current, previous, ..] = observations else {
        return None;
    };

    Some(PeriodChange {
        current: current.value,
        previous: previous.value,
        change: round2(current.value - previous.value),
        change_percent: round2(percent_change(current.value, previous.value)),
        date: current.date,
        previous_date: previous.date,
    })
}

/// Change between the newest observation and the one at [`YOY_LAG`].
pub fn calculate_yoy_change(observations: &[Observation]) -> Option<YoYChange> {
    let current = observations.first()?;
    let year_ago = observations.get(YOY_LAG)?;

    Some(YoYChange {
        current: current.value,
        year_ago: year_ago.value,
        change: round2(current.value - year_ago.value),
        change_percent: round2(percent_change(current.value, year_ago.value)),
        date: current.date,
        year_ago_date: year_ago.date,
    })
}
