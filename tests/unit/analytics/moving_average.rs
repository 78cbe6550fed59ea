//! Unit tests for the trailing moving average

use chrono::NaiveDate;
use macrolens::analytics::{calculate_moving_average, DEFAULT_WINDOW};
use macrolens::models::Observation;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// Newest first: the last value is the oldest day.
fn daily_desc(values: &[f64]) -> Vec<Observation> {
    let n = values.len() as u32;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Observation::new(date(n - i as u32), v))
        .collect()
}

#[test]
fn test_short_series_passes_through() {
    let obs = daily_desc(&[5.0, 4.0]);
    let result = calculate_moving_average(&obs, 3);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].date, obs[0].date);
    assert_eq!(result[0].value, 5.0);
    assert!(result.iter().all(|p| p.moving_average.is_none()));
}

#[test]
fn test_zero_window_passes_through() {
    let obs = daily_desc(&[1.0, 2.0, 3.0]);
    let result = calculate_moving_average(&obs, 0);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|p| p.moving_average.is_none()));
}

#[test]
fn test_output_is_ascending_by_date() {
    let obs = daily_desc(&[50.0, 40.0, 30.0, 20.0, 10.0]);
    let result = calculate_moving_average(&obs, DEFAULT_WINDOW);

    let dates: Vec<NaiveDate> = result.iter().map(|p| p.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(result[0].value, 10.0);
}

#[test]
fn test_defined_average_count() {
    let obs = daily_desc(&[7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    for window in 1..=7 {
        let result = calculate_moving_average(&obs, window);
        let defined = result.iter().filter(|p| p.moving_average.is_some()).count();
        assert_eq!(defined, obs.len() - window + 1, "window {window}");
        assert!(result[..window - 1]
            .iter()
            .all(|p| p.moving_average.is_none()));
    }
}

#[test]
fn test_average_values() {
    // Ascending: 10, 20, 30, 40, 50
    let obs = daily_desc(&[50.0, 40.0, 30.0, 20.0, 10.0]);
    let result = calculate_moving_average(&obs, 3);
    let averages: Vec<Option<f64>> = result.iter().map(|p| p.moving_average).collect();
    assert_eq!(averages, vec![None, None, Some(20.0), Some(30.0), Some(40.0)]);
}

#[test]
fn test_average_is_rounded() {
    let obs = daily_desc(&[1.0, 1.0, 2.0]);
    let result = calculate_moving_average(&obs, 3);
    assert_eq!(result[2].moving_average, Some(1.33));
}
