//! Unit tests for min-max normalization

use chrono::NaiveDate;
use macrolens::analytics::normalize;
use macrolens::models::Observation;

fn obs(values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Observation::new(NaiveDate::from_ymd_opt(2024, 2, 28 - i as u32).unwrap(), v)
        })
        .collect()
}

#[test]
fn test_min_maps_to_zero_max_to_hundred() {
    let result = normalize(&obs(&[4.0, 2.0, 10.0, 6.0]));
    assert_eq!(result[1].normalized, Some(0.0));
    assert_eq!(result[2].normalized, Some(100.0));
    assert_eq!(result[0].normalized, Some(25.0));
    assert_eq!(result[3].normalized, Some(50.0));
}

#[test]
fn test_keeps_order_and_raw_values() {
    let input = obs(&[4.0, 2.0, 10.0]);
    let result = normalize(&input);
    for (point, original) in result.iter().zip(&input) {
        assert_eq!(point.date, original.date);
        assert_eq!(point.value, original.value);
    }
}

#[test]
fn test_flat_series_is_unchanged() {
    let result = normalize(&obs(&[3.5, 3.5, 3.5]));
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|p| p.value == 3.5 && p.normalized.is_none()));
}

#[test]
fn test_rounding() {
    let result = normalize(&obs(&[0.0, 1.0, 3.0]));
    assert_eq!(result[1].normalized, Some(33.33));
}

#[test]
fn test_empty_series() {
    assert!(normalize(&[]).is_empty());
}
