//! Unit tests for trend classification

use chrono::NaiveDate;
use macrolens::analytics::{calculate_trend, DEFAULT_TREND_PERIODS};
use macrolens::models::{Observation, Series, Trend};

fn newest_first(values: &[f64]) -> Vec<Observation> {
    let n = values.len() as u32;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Observation::new(NaiveDate::from_ymd_opt(2024, 1, n - i as u32).unwrap(), v)
        })
        .collect()
}

#[test]
fn test_rising_values_are_increasing() {
    // Oldest 6 -> newest 10
    assert_eq!(
        calculate_trend(&newest_first(&[10.0, 8.0, 6.0]), DEFAULT_TREND_PERIODS),
        Trend::Increasing
    );
}

#[test]
fn test_falling_values_are_decreasing() {
    assert_eq!(
        calculate_trend(&newest_first(&[6.0, 8.0, 10.0]), 3),
        Trend::Decreasing
    );
}

#[test]
fn test_flat_values_are_stable() {
    assert_eq!(calculate_trend(&newest_first(&[5.0, 5.0, 5.0]), 3), Trend::Stable);
}

#[test]
fn test_mixed_values_tie_is_stable() {
    assert_eq!(calculate_trend(&newest_first(&[5.0, 4.0, 6.0]), 3), Trend::Stable);
}

#[test]
fn test_insufficient_data_is_unknown() {
    assert_eq!(calculate_trend(&newest_first(&[5.0, 4.0]), 3), Trend::Unknown);
    assert_eq!(calculate_trend(&[], 0), Trend::Unknown);
    assert_eq!(
        calculate_trend(Series::failed("DFF", "HTTP 500").observations(), 3),
        Trend::Unknown
    );
}

#[test]
fn test_only_recent_window_counts() {
    // Recent three rise, older history falls sharply
    let obs = newest_first(&[3.0, 2.0, 1.0, 50.0, 100.0]);
    assert_eq!(calculate_trend(&obs, 3), Trend::Increasing);
    assert_eq!(calculate_trend(&obs, 5), Trend::Stable);
}

#[test]
fn test_trend_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Trend::Increasing).unwrap(), "\"increasing\"");
    assert_eq!(Trend::Unknown.to_string(), "unknown");
}
