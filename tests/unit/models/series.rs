//! Unit tests for the series model

use chrono::NaiveDate;
use macrolens::models::{Observation, Series};
use serde_json::Value;

fn date(m: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, 1).unwrap()
}

#[test]
fn test_new_orders_newest_first() {
    let series = Series::new(
        "UNRATE",
        vec![
            Observation::new(date(1), 3.7),
            Observation::new(date(3), 3.9),
            Observation::new(date(2), 3.8),
        ],
    );
    let dates: Vec<_> = series.observations().iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![date(3), date(2), date(1)]);
    assert_eq!(series.len(), 3);

    let latest = series.latest().unwrap();
    assert_eq!(latest.series_id, "UNRATE");
    assert_eq!(latest.value, 3.9);
}

#[test]
fn test_failed_series() {
    let series = Series::failed("DFF", "HTTP 500").with_range(date(1), date(2));
    assert!(series.is_failed());
    assert!(series.is_empty());
    assert!(series.latest().is_none());
    assert_eq!(series.error(), Some("HTTP 500"));
    assert!(series.start_date().is_none());
}

#[test]
fn test_serialized_shape() {
    let series = Series::new("DFF", vec![Observation::new(date(5), 5.33)])
        .with_range(date(1), date(6));
    let json: Value = serde_json::to_value(&series).unwrap();

    assert_eq!(json["series_id"], "DFF");
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["date"], "2024-05-01");
    assert_eq!(json["data"][0]["value"], 5.33);
    assert_eq!(json["start_date"], "2024-01-01");
    assert_eq!(json["end_date"], "2024-06-01");
    assert!(json.get("error").is_none());

    let failed: Value = serde_json::to_value(Series::failed("DFF", "HTTP 404")).unwrap();
    assert_eq!(failed["error"], "HTTP 404");
    assert_eq!(failed["data"], Value::Array(vec![]));
    assert_eq!(failed["count"], 0);
}
