use super::ordered::OrderedMap;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Latest point of one series, labelled with its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub value: f64,
    pub date: NaiveDate,
}

pub type CategoryEntries = OrderedMap<SnapshotEntry>;

/// Latest values keyed by category slug, then series id, both in the order
/// they were inserted.
///
/// This is the only input the narrative generator receives: no history and
/// no derived metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndicatorSnapshot {
    pub categories: OrderedMap<CategoryEntries>,
}

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category so it shows up even when none of its series had data.
    pub fn ensure_category(&mut self, category: &str) {
        self.categories.get_or_insert_default(category);
    }

    pub fn insert(&mut self, category: &str, series_id: &str, entry: SnapshotEntry) {
        self.categories
            .get_or_insert_default(category)
            .insert(series_id, entry);
    }

    pub fn category(&self, category: &str) -> Option<&CategoryEntries> {
        self.categories.get(category)
    }

    /// Number of series with a value, across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(OrderedMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Free-text economic analysis produced by a narrative generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: String,
    pub outlook: String,
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Analysis {
    pub const DEFAULT_SUMMARY: &'static str =
        "The latest economic indicators were analyzed; see the full text for details.";
    pub const DEFAULT_OUTLOOK: &'static str =
        "Continued monitoring of these indicators is recommended.";
    pub const FAILED_SUMMARY: &'static str =
        "An error occurred while generating the AI analysis.";
    pub const FAILED_OUTLOOK: &'static str = "Please check the data and try again.";

    /// Placeholder result carrying the failure reason.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            summary: Self::FAILED_SUMMARY.to_string(),
            outlook: Self::FAILED_OUTLOOK.to_string(),
            raw: String::new(),
            model: None,
            error: Some(error.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}
