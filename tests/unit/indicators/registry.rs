//! Unit tests for the category registry

use macrolens::indicators::{CategoryRegistry, IndicatorCategory};
use std::collections::HashSet;

#[test]
fn test_five_categories() {
    assert_eq!(CategoryRegistry::all_categories().len(), 5);
}

#[test]
fn test_category_series() {
    assert_eq!(
        IndicatorCategory::InterestRates.series_ids(),
        vec!["DFF", "DGS10", "DGS2", "T10Y2Y", "MORTGAGE30US"]
    );
    assert_eq!(
        IndicatorCategory::Employment.series_ids(),
        vec!["UNRATE", "PAYEMS", "ICSA", "JTSJOL"]
    );
}

#[test]
fn test_all_series_ids_flattened_in_order() {
    let all = CategoryRegistry::all_series_ids();
    let expected_len: usize = CategoryRegistry::all_categories()
        .iter()
        .map(|c| c.series().len())
        .sum();
    assert_eq!(all.len(), expected_len);
    assert_eq!(all.len(), 21);
    assert_eq!(all.first(), Some(&"DFF"));
    assert_eq!(all.last(), Some(&"INDPRO"));

    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_routes_round_trip() {
    for &category in CategoryRegistry::all_categories() {
        assert_eq!(IndicatorCategory::from_route(category.route()), Some(category));
    }
    assert_eq!(
        IndicatorCategory::from_route("interest-rates"),
        Some(IndicatorCategory::InterestRates)
    );
    assert!(IndicatorCategory::from_route("interest_rates").is_none());
    assert!(IndicatorCategory::from_route("crypto").is_none());
}

#[test]
fn test_default_periods() {
    assert_eq!(IndicatorCategory::Gdp.default_period(), "5y");
    assert_eq!(IndicatorCategory::Inflation.default_period(), "1y");
}

#[test]
fn test_find_and_display_name() {
    let (category, def) = CategoryRegistry::find("UNRATE").unwrap();
    assert_eq!(category, IndicatorCategory::Employment);
    assert_eq!(def.name, "Unemployment Rate");
    assert_eq!(
        CategoryRegistry::display_name("A191RL1Q225SBEA"),
        Some("Real GDP Growth Rate")
    );
    assert!(CategoryRegistry::find("NOPE").is_none());
}

#[test]
fn test_slug_serialization() {
    assert_eq!(
        serde_json::to_string(&IndicatorCategory::InterestRates).unwrap(),
        "\"interest_rates\""
    );
    assert_eq!(IndicatorCategory::InterestRates.to_string(), "interest_rates");
}
