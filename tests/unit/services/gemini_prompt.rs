//! Unit tests for prompt construction

use chrono::NaiveDate;
use macrolens::models::{IndicatorSnapshot, SnapshotEntry};
use macrolens::services::gemini::prompt::with_thousands;
use macrolens::services::gemini::{build_analysis_prompt, build_context, build_insight_prompt};

fn entry(name: &str, value: f64) -> SnapshotEntry {
    SnapshotEntry {
        name: name.to_string(),
        value,
        date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
    }
}

#[test]
fn test_with_thousands() {
    assert_eq!(with_thousands(159000.0), "159,000");
    assert_eq!(with_thousands(1234567.5), "1,234,567.5");
    assert_eq!(with_thousands(999.0), "999");
    assert_eq!(with_thousands(-12345.0), "-12,345");
}

#[test]
fn test_context_formatting() {
    let mut snapshot = IndicatorSnapshot::new();
    snapshot.insert("interest_rates", "DFF", entry("Federal Funds Rate", 4.58));
    snapshot.insert("employment", "UNRATE", entry("Unemployment Rate", 4.2));
    snapshot.insert("employment", "PAYEMS", entry("Nonfarm Payrolls", 159000.0));
    snapshot.insert("gdp", "A191RL1Q225SBEA", entry("Real GDP Growth Rate", 2.8));
    snapshot.insert("gdp", "GDP", entry("Gross Domestic Product", 29349.9));
    snapshot.insert("inflation", "CPIAUCSL", entry("Consumer Price Index", 315.5));

    let context = build_context(&snapshot);
    assert!(context.contains("- Federal Funds Rate: 4.58% (2024-11-01)"));
    assert!(context.contains("- Unemployment Rate: 4.2%"));
    assert!(context.contains("- Nonfarm Payrolls: 159,000"));
    assert!(context.contains("- Real GDP Growth Rate: 2.8%"));
    assert!(context.contains("- Gross Domestic Product: 29,349.9"));
    assert!(context.contains("- Consumer Price Index: 315.5 (2024-11-01)"));

    let rates = context.find("[Interest Rates]").unwrap();
    let gdp = context.find("[GDP and Growth]").unwrap();
    assert!(rates < gdp);
    assert!(!context.contains("[Leading Indicators]"));

    let unrate = context.find("Unemployment Rate").unwrap();
    let payems = context.find("Nonfarm Payrolls").unwrap();
    assert!(unrate < payems);
}

#[test]
fn test_analysis_prompt_names_both_sections() {
    let prompt = build_analysis_prompt(&IndicatorSnapshot::new());
    assert!(prompt.contains("Summary:"));
    assert!(prompt.contains("Outlook:"));
}

#[test]
fn test_insight_prompt() {
    let prompt = build_insight_prompt("Unemployment Rate", 4.2, Some(4.1));
    assert!(prompt.starts_with("Unemployment Rate is currently 4.2."));
    assert!(prompt.contains("+0.10 from 4.1"));

    let prompt = build_insight_prompt("Core CPI", 320.0, None);
    assert!(!prompt.contains("changed"));
}
