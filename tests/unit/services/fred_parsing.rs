//! Unit tests for FRED observation parsing

use chrono::NaiveDate;
use macrolens::services::fred::client::parse_observations;
use macrolens::services::fred::RawObservation;
use macrolens::services::FetchError;

fn raw(date: &str, value: &str) -> RawObservation {
    RawObservation {
        date: date.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn test_missing_marker_is_dropped() {
    let parsed = parse_observations(&[
        raw("2024-03-01", "5.33"),
        raw("2024-02-01", "."),
        raw("2024-01-01", "5.12"),
    ])
    .unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(parsed[1].value, 5.12);
}

#[test]
fn test_non_numeric_value_is_malformed() {
    let err = parse_observations(&[raw("2024-03-01", "n/a")]).unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[test]
fn test_non_finite_value_is_malformed() {
    let err = parse_observations(&[raw("2024-03-01", "NaN")]).unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[test]
fn test_bad_date_is_malformed() {
    let err = parse_observations(&[raw("03/01/2024", "1.0")]).unwrap_err();
    assert!(matches!(err, FetchError::Malformed(_)));
}

#[test]
fn test_status_error_message() {
    assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
}
