//! Trailing simple moving average

use crate::common::math::{mean, round2};
use crate::models::{MovingAveragePoint, Observation};

pub const DEFAULT_WINDOW: usize = 3;

/// Trailing mean over `window` points.
///
/// Output is oldest first, unlike the input. The first `window - 1` points
/// have no average. When there are fewer than `window` observations (or the
/// window is zero) the input is passed through in its own order with every
/// average absent.
pub fn calculate_moving_average(
    observations: &[Observation],
    window: usize,
) -> Vec<MovingAveragePoint> {
    if window == 0 || observations.len() < window {
        return observations
            .iter()
            .map(|obs| MovingAveragePoint {
                date: obs.date,
                value: obs.value,
                moving_average: None,
            })
            .collect();
    }

    let mut ascending = observations.to_vec();
    ascending.sort_by_key(|obs| obs.date);
    let values: Vec<f64> = ascending.iter().map(|obs| obs.value).collect();

    ascending
        .iter()
        .enumerate()
        .map(|(i, obs)| {
            let moving_average = if i + 1 >= window {
                mean(&values[i + 1 - window..=i]).map(round2)
            } else {
                None
            };
            MovingAveragePoint {
                date: obs.date,
                value: obs.value,
                moving_average,
            }
        })
        .collect()
}
