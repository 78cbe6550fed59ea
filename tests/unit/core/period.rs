//! Unit tests for period parsing

use chrono::{Duration, Local};
use macrolens::core::period::Period;

#[test]
fn test_known_periods() {
    let cases = [
        ("1m", 30),
        ("3m", 90),
        ("6m", 180),
        ("1y", 365),
        ("3y", 1095),
        ("5y", 1825),
    ];
    for (raw, days) in cases {
        let period = Period::parse(raw).unwrap();
        assert_eq!(period.days(), days);
        assert_eq!(period.as_str(), raw);
    }
}

#[test]
fn test_unknown_period_defaults_to_one_year() {
    assert!(Period::parse("10y").is_none());
    assert_eq!(Period::parse_or_default("10y"), Period::OneYear);
    assert_eq!(Period::parse_or_default(""), Period::OneYear);
}

#[test]
fn test_date_range() {
    let range = Period::ThreeMonths.date_range();
    assert_eq!(range.end - range.start, Duration::days(90));
    assert!(range.end <= Local::now().date_naive());
}
