//! Min-max normalization to a 0-100 scale

use crate::common::math::{min_max, round2};
use crate::models::{NormalizedPoint, Observation};

/// Rescale every value to `(value - min) / (max - min) * 100`, rounded to
/// 2 decimals. A flat series keeps its raw values with no normalized field.
pub fn normalize(observations: &[Observation]) -> Vec<NormalizedPoint> {
    let values: Vec<f64> = observations.iter().map(|obs| obs.value).collect();
    let Some((min, max)) = min_max(&values) else {
        return Vec::new();
    };
    let span = max - min;

    observations
        .iter()
        .map(|obs| NormalizedPoint {
            date: obs.date,
            value: obs.value,
            normalized: (span != 0.0).then(|| round2((obs.value - min) / span * 100.0)),
        })
        .collect()
}
