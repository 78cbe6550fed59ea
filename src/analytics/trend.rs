//! Short-window trend classification

use crate::models::{Observation, Trend};

pub const DEFAULT_TREND_PERIODS: usize = 3;

/// Classify the direction of the `periods` most recent observations.
///
/// Each adjacent pair is compared newer against older: a newer value above
/// its predecessor counts as an increase, below as a decrease. Ties between
/// the counts are `Stable`. Fewer than `periods` observations, or none at
/// all, give `Unknown`.
pub fn calculate_trend(observations: &[Observation], periods: usize) -> Trend {
    if observations.is_empty() || observations.len() < periods {
        return Trend::Unknown;
    }

    let recent = &observations[..periods];
    let (increases, decreases) =
        recent
            .windows(2)
            .fold((0usize, 0usize), |(up, down), pair| {
                let (newer, older) = (pair[0].value, pair[1].value);
                if newer > older {
                    (up + 1, down)
                } else if newer < older {
                    (up, down + 1)
                } else {
                    (up, down)
                }
            });

    match increases.cmp(&decreases) {
        std::cmp::Ordering::Greater => Trend::Increasing,
        std::cmp::Ordering::Less => Trend::Decreasing,
        std::cmp::Ordering::Equal => Trend::Stable,
    }
}
