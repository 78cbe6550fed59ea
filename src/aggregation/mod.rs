//! Category-level aggregation over a series provider

use crate::indicators::{CategoryRegistry, IndicatorCategory};
use crate::models::{IndicatorSnapshot, OrderedMap, Series, SnapshotEntry};
use crate::services::series_provider::{DateRange, SeriesProvider};
use chrono::NaiveDate;
use futures_util::future::join_all;
use serde::Serialize;
use tracing::debug;

pub const DATA_SOURCE: &str = "FRED";

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub source: &'static str,
}

/// Every series of one category over one window.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: IndicatorCategory,
    pub period: String,
    pub data: OrderedMap<Series>,
    pub metadata: ReportMetadata,
}

impl CategoryReport {
    pub fn failed_series(&self) -> impl Iterator<Item = &Series> {
        self.data.values().filter(|series| series.is_failed())
    }
}

/// Fetch every series in `category`. Failed series stay in the report with
/// their error set.
pub async fn fetch_category(
    provider: &dyn SeriesProvider,
    category: IndicatorCategory,
    period: &str,
    range: DateRange,
) -> CategoryReport {
    let ids = category.series_ids();
    let data = provider.fetch_many(&ids, range).await;

    let report = CategoryReport {
        category,
        period: period.to_string(),
        data,
        metadata: ReportMetadata {
            start_date: range.start,
            end_date: range.end,
            source: DATA_SOURCE,
        },
    };
    debug!(
        category = %category,
        series = report.data.len(),
        failed = report.failed_series().count(),
        "Category fetched"
    );
    report
}

/// Latest value of every registered series, grouped by category.
///
/// Series with no data are left out; every category is present even if empty.
pub async fn latest_snapshot(provider: &dyn SeriesProvider) -> IndicatorSnapshot {
    let definitions: Vec<_> = CategoryRegistry::all_categories()
        .iter()
        .flat_map(|&category| category.series().iter().map(move |def| (category, *def)))
        .collect();

    let latest = join_all(definitions.iter().map(|(_, def)| provider.latest(def.id))).await;

    let mut snapshot = IndicatorSnapshot::new();
    for category in CategoryRegistry::all_categories() {
        snapshot.ensure_category(category.slug());
    }
    for ((category, def), observation) in definitions.into_iter().zip(latest) {
        if let Some(observation) = observation {
            snapshot.insert(
                category.slug(),
                def.id,
                SnapshotEntry {
                    name: def.name.to_string(),
                    value: observation.value,
                    date: observation.date,
                },
            );
        }
    }
    snapshot
}
